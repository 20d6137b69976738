//! Defines the `ProbabilityModel`, the fixed parameters of the inheritance model.
//!
//! The parameters are held as conditional probability tables:
//! * the founder prior ```P(G)```, a table over gene counts
//! * the trait likelihood ```P(T | G)```, a table of shape ```(3, 2)``` whose columns are the
//!   trait being absent and present
//! * the mutation rate, from which the inheritance table ```P(G | G_mother, G_father)``` of shape
//!   ```(3, 3, 3)``` is derived

use crate::util::{HeredityError, Result};
use crate::world::GeneCount;

use ndarray::prelude as nd;

/// Tolerance allowed when checking that a table row sums to 1
const CPD_TOLERANCE: f64 = 0.001;


/// The parameters of the gene and trait model. Immutable once constructed; every engine receives
/// one explicitly.
#[derive(Clone, Debug)]
pub struct ProbabilityModel {

    /// ```P(G)``` for a person with no recorded parents
    gene_prior: nd::Array1<f64>,

    /// ```P(T | G)```, indexed ```[genes, trait as usize]```
    trait_given_gene: nd::Array2<f64>,

    /// Probability that a copy of the gene flips when passed from parent to child
    mutation: f64,

    /// ```P(G | G_mother, G_father)```, indexed ```[mother, father, child]```
    inheritance: nd::Array3<f64>

}


impl Default for ProbabilityModel {

    fn default() -> Self {
        // the constants are known to be valid
        ProbabilityModel::new(
            array![0.96, 0.03, 0.01],
            array![[0.99, 0.01], [0.44, 0.56], [0.35, 0.65]],
            0.01
        ).expect("default model parameters are valid")
    }

}


impl ProbabilityModel {

    /// Construct a new `ProbabilityModel`
    ///
    /// # Args
    /// * `gene_prior`: ```P(G = 0), P(G = 1), P(G = 2)``` for founders
    /// * `trait_given_gene`: row ```g``` is ```[P(T = false | G = g), P(T = true | G = g)]```
    /// * `mutation`: the mutation rate, in ```[0, 1]```
    ///
    /// # Errors
    /// * `HeredityError::InvalidParameters` if a table has the wrong shape, holds a negative or
    ///   non-finite entry, or has a row that does not sum to 1
    pub fn new(
        gene_prior: nd::Array1<f64>,
        trait_given_gene: nd::Array2<f64>,
        mutation: f64
    ) -> Result<Self> {
        if gene_prior.len() != 3 {
            return Err(HeredityError::InvalidParameters(
                format!("gene prior must have 3 entries, found {}", gene_prior.len())
            ));
        }

        if trait_given_gene.shape() != [3, 2] {
            return Err(HeredityError::InvalidParameters(
                format!("trait table must have shape [3, 2], found {:?}", trait_given_gene.shape())
            ));
        }

        if ! (mutation >= 0.0 && mutation <= 1.0) {
            return Err(HeredityError::InvalidParameters(
                format!("mutation rate {} is outside [0, 1]", mutation)
            ));
        }

        check_distribution(gene_prior.view(), "gene prior")?;
        for (g, row) in trait_given_gene.outer_iter().enumerate() {
            check_distribution(row, &format!("trait table row {}", g))?;
        }

        let inheritance = inheritance_table(mutation);

        Ok(ProbabilityModel { gene_prior, trait_given_gene, mutation, inheritance })
    }


    /// Derive a model with the same prior and trait table but a different mutation rate
    pub fn with_mutation(&self, mutation: f64) -> Result<Self> {
        ProbabilityModel::new(self.gene_prior.clone(), self.trait_given_gene.clone(), mutation)
    }


    /// The mutation rate
    pub fn mutation(&self) -> f64 {
        self.mutation
    }


    /// ```P(G = genes)``` for a founder
    pub fn gene_prior(&self, genes: GeneCount) -> f64 {
        self.gene_prior[genes.index()]
    }


    /// ```P(T = present | G = genes)```
    pub fn trait_likelihood(&self, genes: GeneCount, present: bool) -> f64 {
        self.trait_given_gene[[genes.index(), present as usize]]
    }


    /// ```P(G = child | G_mother = mother, G_father = father)```
    pub fn inheritance(&self, mother: GeneCount, father: GeneCount, child: GeneCount) -> f64 {
        self.inheritance[[mother.index(), father.index(), child.index()]]
    }


    /// Probability that a parent carrying `genes` copies passes a copy of the gene to a child,
    /// accounting for mutation.
    pub fn transmission(&self, genes: GeneCount) -> f64 {
        transmission(genes, self.mutation)
    }


    /// The full distribution ```P(G | G_mother = mother, G_father = father)``` over gene counts
    pub fn child_gene_distribution(&self, mother: GeneCount, father: GeneCount) -> [f64; 3] {
        let row = self.inheritance_row(mother, father);
        [row[0], row[1], row[2]]
    }


    /// View of the founder prior, indexed by gene count
    pub fn prior_row(&self) -> nd::ArrayView1<f64> {
        self.gene_prior.view()
    }


    /// View of ```P(G | G_mother = mother, G_father = father)```, indexed by gene count
    pub fn inheritance_row(&self, mother: GeneCount, father: GeneCount) -> nd::ArrayView1<f64> {
        self.inheritance.slice(s![mother.index(), father.index(), ..])
    }


    /// View of ```P(T | G = genes)```, indexed by trait presence
    pub fn trait_row(&self, genes: GeneCount) -> nd::ArrayView1<f64> {
        self.trait_given_gene.row(genes.index())
    }

}


/// Check that `row` is a probability distribution
fn check_distribution(row: nd::ArrayView1<f64>, what: &str) -> Result<()> {
    if row.iter().any(|&p| ! p.is_finite() || p < 0.0) {
        return Err(HeredityError::InvalidParameters(
            format!("{} holds a negative or non-finite probability", what)
        ));
    }

    if (row.sum() - 1.0).abs() > CPD_TOLERANCE {
        return Err(HeredityError::InvalidParameters(
            format!("{} sums to {}, not 1", what, row.sum())
        ));
    }

    Ok(())
}


/// Probability that a parent with `genes` copies passes on a copy of the gene
fn transmission(genes: GeneCount, mutation: f64) -> f64 {
    match genes {
        // only a mutation passes on the gene
        GeneCount::Zero => mutation,
        // either copy is passed with equal probability, and a mutation of either copy cancels out
        GeneCount::One => 0.5,
        // passed on unless it mutates
        GeneCount::Two => 1.0 - mutation,
    }
}


/// Build the table ```P(G | G_mother, G_father)```. Each parent passes on exactly one copy, so
/// the child's count is the sum of two independent Bernoulli draws.
fn inheritance_table(mutation: f64) -> nd::Array3<f64> {
    let mut tbl = nd::Array3::zeros((3, 3, 3));

    for (&mother, &father) in iproduct!(GeneCount::ALL.iter(), GeneCount::ALL.iter()) {
        let from_mother = transmission(mother, mutation);
        let from_father = transmission(father, mutation);

        let none = (1.0 - from_mother) * (1.0 - from_father);
        let both = from_mother * from_father;
        let one = from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father;

        tbl[[mother.index(), father.index(), 0]] = none;
        tbl[[mother.index(), father.index(), 1]] = one;
        tbl[[mother.index(), father.index(), 2]] = both;
    }

    tbl
}


#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn defaults() {
        let model = ProbabilityModel::default();

        assert_eq!(0.96, model.gene_prior(GeneCount::Zero));
        assert_eq!(0.03, model.gene_prior(GeneCount::One));
        assert_eq!(0.01, model.gene_prior(GeneCount::Two));

        assert_eq!(0.01, model.trait_likelihood(GeneCount::Zero, true));
        assert_eq!(0.99, model.trait_likelihood(GeneCount::Zero, false));
        assert_eq!(0.56, model.trait_likelihood(GeneCount::One, true));
        assert_eq!(0.44, model.trait_likelihood(GeneCount::One, false));
        assert_eq!(0.65, model.trait_likelihood(GeneCount::Two, true));
        assert_eq!(0.35, model.trait_likelihood(GeneCount::Two, false));

        assert_eq!(0.01, model.mutation());
    }

    #[test]
    fn transmission_probabilities() {
        let model = ProbabilityModel::default();
        assert_eq!(0.01, model.transmission(GeneCount::Zero));
        assert_eq!(0.5, model.transmission(GeneCount::One));
        assert_eq!(0.99, model.transmission(GeneCount::Two));
    }

    #[test]
    /// Two parents without the gene can only pass it on through mutation
    fn child_of_gene_free_parents() {
        let model = ProbabilityModel::default();
        let m = model.mutation();

        let d = model.child_gene_distribution(GeneCount::Zero, GeneCount::Zero);
        assert!((d[0] - (1.0 - m) * (1.0 - m)).abs() < EPS);
        assert!((d[1] - 2.0 * m * (1.0 - m)).abs() < EPS);
        assert!((d[2] - m * m).abs() < EPS);
    }

    #[test]
    fn inheritance_rows_are_distributions() {
        let model = ProbabilityModel::default();

        for &mother in GeneCount::ALL.iter() {
            for &father in GeneCount::ALL.iter() {
                let total: f64 = model.inheritance_row(mother, father).sum();
                assert!((total - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn inheritance_is_symmetric() {
        let model = ProbabilityModel::default();

        let all = GeneCount::ALL.iter();
        for (&a, &b, &c) in iproduct!(all.clone(), all.clone(), all) {
            assert_eq!(model.inheritance(a, b, c), model.inheritance(b, a, c));
        }
    }

    #[test]
    fn one_and_two() {
        let model = ProbabilityModel::default();

        // 0.5 * 0.99 + 0.5 * 0.01
        let d = model.child_gene_distribution(GeneCount::One, GeneCount::Two);
        assert!((d[0] - 0.5 * 0.01).abs() < EPS);
        assert!((d[1] - (0.5 * 0.01 + 0.5 * 0.99)).abs() < EPS);
        assert!((d[2] - 0.5 * 0.99).abs() < EPS);
    }

    #[test]
    fn without_mutation() {
        let model = ProbabilityModel::default().with_mutation(0.0).unwrap();
        let d = model.child_gene_distribution(GeneCount::Two, GeneCount::Two);
        assert_eq!([0.0, 0.0, 1.0], d);

        // the rest of the model is unchanged
        assert_eq!(0.96, model.gene_prior(GeneCount::Zero));
    }

    #[test]
    fn invalid_parameters() {
        let bad_prior = ProbabilityModel::new(
            array![0.5, 0.3, 0.1],
            array![[0.99, 0.01], [0.44, 0.56], [0.35, 0.65]],
            0.01
        );
        assert!(bad_prior.is_err());

        let bad_shape = ProbabilityModel::new(
            array![0.96, 0.04],
            array![[0.99, 0.01], [0.44, 0.56], [0.35, 0.65]],
            0.01
        );
        assert!(bad_shape.is_err());

        let negative = ProbabilityModel::new(
            array![0.96, 0.03, 0.01],
            array![[1.01, -0.01], [0.44, 0.56], [0.35, 0.65]],
            0.01
        );
        assert!(negative.is_err());

        assert!(ProbabilityModel::default().with_mutation(1.5).is_err());
        assert!(ProbabilityModel::default().with_mutation(::std::f64::NAN).is_err());
    }

}

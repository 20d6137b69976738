//! Accumulation of world probabilities into per-person marginal distributions.
//!
//! An `Accumulator` collects unnormalized mass as worlds are scored. Once every world has been
//! folded in, `Accumulator::normalize` consumes it and produces the final `Marginals`.

use crate::model::Population;
use crate::util::{HeredityError, Result};
use crate::world::{GeneCount, World};

use indexmap::IndexMap;
use indexmap::map::Iter;


/// The two distributions of a single person
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Distribution {

    /// Mass for ```G = 0, 1, 2```
    pub gene: [f64; 3],

    /// Mass for ```T = false, true```
    pub traits: [f64; 2]

}

impl Distribution {

    /// ```P(G = genes)```
    pub fn gene(&self, genes: GeneCount) -> f64 {
        self.gene[genes.index()]
    }

    /// ```P(T = present)```
    pub fn has_trait(&self, present: bool) -> f64 {
        self.traits[present as usize]
    }

    fn add(&mut self, genes: GeneCount, present: bool, p: f64) {
        self.gene[genes.index()] += p;
        self.traits[present as usize] += p;
    }

    fn merge(&mut self, other: &Distribution) {
        for (a, b) in self.gene.iter_mut().zip(other.gene.iter()) {
            *a += *b;
        }
        for (a, b) in self.traits.iter_mut().zip(other.traits.iter()) {
            *a += *b;
        }
    }

    /// Rescale both distributions to sum to 1
    ///
    /// # Errors
    /// * `HeredityError::ContradictoryEvidence` if either distribution has no mass
    fn normalize(&mut self) -> Result<()> {
        let gene_total: f64 = self.gene.iter().sum();
        let trait_total: f64 = self.traits.iter().sum();

        if ! (gene_total > 0.0 && trait_total > 0.0) {
            return Err(HeredityError::ContradictoryEvidence);
        }

        for p in self.gene.iter_mut() {
            *p /= gene_total;
        }
        for p in self.traits.iter_mut() {
            *p /= trait_total;
        }

        Ok(())
    }

}


/// Running, unnormalized per-person totals, indexed like a `World`
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator {

    dists: Vec<Distribution>,

    /// Number of worlds folded in
    worlds: u64

}

impl Accumulator {

    /// An `Accumulator` for `size` people with no mass
    pub fn new(size: usize) -> Self {
        Accumulator { dists: vec![Distribution::default(); size], worlds: 0 }
    }

    /// Add `p` to the gene bucket and the trait bucket that `world` assigns to every person
    pub fn accumulate(&mut self, world: &World, p: f64) {
        for (idx, dist) in self.dists.iter_mut().enumerate() {
            dist.add(world.genes(idx), world.has_trait(idx), p);
        }
        self.worlds += 1;
    }

    /// Fold the totals of another `Accumulator` over the same people into this one
    pub fn merge(&mut self, other: Accumulator) {
        for (mine, theirs) in self.dists.iter_mut().zip(other.dists.iter()) {
            mine.merge(theirs);
        }
        self.worlds += other.worlds;
    }

    /// The number of worlds accumulated so far
    pub fn worlds(&self) -> u64 {
        self.worlds
    }

    /// Rescale every person's distributions to sum to 1, labelling them with the names in
    /// `population`.
    ///
    /// # Errors
    /// * `HeredityError::ContradictoryEvidence` if no world with positive probability was
    ///   accumulated
    pub fn normalize(self, population: &Population) -> Result<Marginals> {
        let mut dists = IndexMap::with_capacity(self.dists.len());

        for (person, mut dist) in population.iter().zip(self.dists.into_iter()) {
            dist.normalize()?;
            dists.insert(String::from(person.name()), dist);
        }

        Ok(Marginals { dists })
    }

}


/// The finalized posterior distributions of every person, in `Population` order
#[derive(Clone, Debug, PartialEq)]
pub struct Marginals {

    dists: IndexMap<String, Distribution>

}

impl Marginals {

    /// Lookup the distributions of a person by name
    pub fn get(&self, name: &str) -> Option<&Distribution> {
        self.dists.get(name)
    }

    pub fn len(&self) -> usize {
        self.dists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dists.is_empty()
    }

    /// Iterate over ```(name, distribution)``` pairs in `Population` order
    pub fn iter(&self) -> Iter<String, Distribution> {
        self.dists.iter()
    }

    /// The largest absolute difference between any corresponding probabilities of two
    /// `Marginals`, or `None` if they are over different people.
    pub fn max_difference(&self, other: &Marginals) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }

        let mut diff: f64 = 0.0;
        for (name, mine) in self.iter() {
            let theirs = other.get(name)?;
            for (a, b) in mine.gene.iter().zip(theirs.gene.iter()) {
                diff = diff.max((a - b).abs());
            }
            for (a, b) in mine.traits.iter().zip(theirs.traits.iter()) {
                diff = diff.max((a - b).abs());
            }
        }

        Some(diff)
    }

}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PopulationBuilder;

    fn pair() -> Population {
        PopulationBuilder::new()
            .with_founder("Lily", None)
            .with_founder("James", None)
            .build()
            .unwrap()
    }

    #[test]
    fn accumulate() {
        let population = pair();
        let mut acc = Accumulator::new(2);

        let mut world = World::new(2);
        world.set_genes(0, GeneCount::Two);
        world.set_trait(1, true);
        acc.accumulate(&world, 0.25);
        acc.accumulate(&World::new(2), 0.75);
        assert_eq!(2, acc.worlds());

        let marginals = acc.normalize(&population).unwrap();
        let lily = marginals.get("Lily").unwrap();
        assert_eq!([0.75, 0.0, 0.25], lily.gene);
        assert_eq!([1.0, 0.0], lily.traits);

        let james = marginals.get("James").unwrap();
        assert_eq!([1.0, 0.0, 0.0], james.gene);
        assert_eq!(0.75, james.has_trait(false));
        assert_eq!(0.25, james.has_trait(true));
        assert_eq!(1.0, james.gene(GeneCount::Zero));
    }

    #[test]
    fn normalize_rescales() {
        let population = pair();
        let mut acc = Accumulator::new(2);
        let mut world = World::new(2);
        acc.accumulate(&world, 0.002);
        world.set_genes(1, GeneCount::One);
        acc.accumulate(&world, 0.006);

        let marginals = acc.normalize(&population).unwrap();
        let james = marginals.get("James").unwrap();
        assert!((james.gene[0] - 0.25).abs() < 1e-12);
        assert!((james.gene[1] - 0.75).abs() < 1e-12);

        let names: Vec<&str> = marginals.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(vec!["Lily", "James"], names);
    }

    #[test]
    fn merge() {
        let mut world = World::new(2);
        world.set_genes(0, GeneCount::One);

        let mut a = Accumulator::new(2);
        a.accumulate(&world, 0.5);
        let mut b = Accumulator::new(2);
        b.accumulate(&World::new(2), 0.25);
        b.accumulate(&world, 0.25);

        let mut whole = Accumulator::new(2);
        whole.accumulate(&world, 0.5);
        whole.accumulate(&World::new(2), 0.25);
        whole.accumulate(&world, 0.25);

        a.merge(b);
        assert_eq!(whole, a);
    }

    #[test]
    fn no_mass() {
        let population = pair();
        let mut acc = Accumulator::new(2);
        acc.accumulate(&World::new(2), 0.0);

        assert_eq!(Err(HeredityError::ContradictoryEvidence), acc.normalize(&population));
    }

    #[test]
    fn difference() {
        let population = pair();
        let mut a = Accumulator::new(2);
        a.accumulate(&World::new(2), 1.0);
        let a = a.normalize(&population).unwrap();

        let mut b = Accumulator::new(2);
        b.accumulate(&World::new(2), 3.0);
        let mut world = World::new(2);
        world.set_trait(0, true);
        b.accumulate(&world, 1.0);
        let b = b.normalize(&population).unwrap();

        assert_eq!(Some(0.0), a.max_difference(&a));
        assert_eq!(Some(0.25), a.max_difference(&b));
    }

}

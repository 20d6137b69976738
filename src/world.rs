//! Defines a `World`: one complete hypothesis assigning a gene count and trait presence to every
//! person in a `Population`.

use crate::model::Population;
use crate::person::Observeable;
use crate::util::{HeredityError, Result};

use std::collections::HashSet;

/// The number of copies of the gene a person carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneCount {
    Zero,
    One,
    Two
}

impl GeneCount {

    /// Every `GeneCount`, in increasing order
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Index of the `GeneCount` into tables over gene counts
    pub fn index(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        GeneCount::ALL.get(idx).cloned()
    }

    /// The next larger `GeneCount`, if any
    fn succ(self) -> Option<Self> {
        GeneCount::from_index(self.index() + 1)
    }

}


/// A full assignment to a `Population`. Entries are indexed by each person's position in the
/// `Population`.
#[derive(Clone, Debug, PartialEq)]
pub struct World {

    /// The gene count of each person
    genes: Vec<GeneCount>,

    /// Whether each person expresses the trait
    traits: Vec<bool>

}

impl World {

    /// A world of `size` people, none of whom carry the gene or express the trait
    pub fn new(size: usize) -> Self {
        World { genes: vec![GeneCount::Zero; size], traits: vec![false; size] }
    }

    /// Construct a `World` from three sets of names.
    ///
    /// # Args
    /// * `one_gene`: the people with one copy of the gene
    /// * `two_genes`: the people with two copies. Must be disjoint from `one_gene`.
    /// * `have_trait`: the people expressing the trait
    ///
    /// Everyone else has no copies and does not express the trait.
    ///
    /// # Errors
    /// * `HeredityError::UnknownPerson` if a name is not in the `Population`
    /// * `HeredityError::InvalidWorld` if `one_gene` and `two_genes` intersect
    pub fn from_sets(
        population: &Population,
        one_gene: &HashSet<&str>,
        two_genes: &HashSet<&str>,
        have_trait: &HashSet<&str>
    ) -> Result<Self> {
        if let Some(name) = one_gene.intersection(two_genes).next() {
            return Err(HeredityError::InvalidWorld(
                format!("{} cannot have both one and two copies of the gene", name)
            ));
        }

        let mut world = World::new(population.len());
        for &name in one_gene.iter() {
            world.genes[population.index_of(name)?] = GeneCount::One;
        }
        for &name in two_genes.iter() {
            world.genes[population.index_of(name)?] = GeneCount::Two;
        }
        for &name in have_trait.iter() {
            world.traits[population.index_of(name)?] = true;
        }

        Ok(world)
    }

    /// The number of people in the `World`
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene count of the person at `idx`
    pub fn genes(&self, idx: usize) -> GeneCount {
        self.genes[idx]
    }

    /// Whether the person at `idx` expresses the trait
    pub fn has_trait(&self, idx: usize) -> bool {
        self.traits[idx]
    }

    pub fn set_genes(&mut self, idx: usize, genes: GeneCount) {
        self.genes[idx] = genes;
    }

    pub fn set_trait(&mut self, idx: usize, present: bool) {
        self.traits[idx] = present;
    }

    /// The names of the people in `population` with exactly `genes` copies of the gene
    pub fn carrying<'a>(&self, population: &'a Population, genes: GeneCount) -> HashSet<&'a str> {
        population.iter()
                  .enumerate()
                  .filter(|&(idx, _)| self.genes[idx] == genes)
                  .map(|(_, p)| p.name())
                  .collect()
    }

    /// The names of the people in `population` expressing the trait
    pub fn expressing<'a>(&self, population: &'a Population) -> HashSet<&'a str> {
        population.iter()
                  .enumerate()
                  .filter(|&(idx, _)| self.traits[idx])
                  .map(|(_, p)| p.name())
                  .collect()
    }

    /// Replace the trait assignment with the bits of `mask`; bit ```i``` is person ```i```.
    pub(crate) fn set_traits_from_mask(&mut self, mask: u64) {
        for (idx, t) in self.traits.iter_mut().enumerate() {
            *t = mask & (1 << idx) != 0;
        }
    }

    /// Step the gene assignment to the next one in base-3 counting order, with person 0 as the
    /// least significant digit.
    ///
    /// # Returns
    /// `false`, once every assignment has been visited and the genes wrapped back to all `Zero`
    pub(crate) fn advance_genes(&mut self) -> bool {
        for g in self.genes.iter_mut() {
            match g.succ() {
                Some(next) => {
                    *g = next;
                    return true;
                },
                None => *g = GeneCount::Zero
            }
        }

        false
    }

}


/// The trait observations of a `Population`, precomputed as bit masks so that a candidate set of
/// trait-expressing people can be checked against the evidence in constant time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evidence {

    /// Bit ```i``` is set if person ```i```'s trait was observed
    observed: u64,

    /// Bit ```i``` is set if person ```i``` was observed to express the trait
    present: u64

}

impl Evidence {

    /// Collect the observations of every person in `population`
    pub fn of(population: &Population) -> Self {
        let mut evidence = Evidence { observed: 0, present: 0 };

        for (idx, person) in population.iter().enumerate().take(64) {
            if let Some(val) = person.observation() {
                evidence.observed |= 1 << idx;
                if val {
                    evidence.present |= 1 << idx;
                }
            }
        }

        evidence
    }

    /// `true` if the trait assignment `mask` agrees with every observation
    pub fn admits(&self, mask: u64) -> bool {
        mask & self.observed == self.present
    }

    /// The number of people whose trait was observed
    pub fn num_observed(&self) -> u32 {
        self.observed.count_ones()
    }

}

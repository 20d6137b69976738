//! Computes the joint probability of a single `World`.
//!
//! By the chain rule for Bayesian networks, the probability of a full assignment is the product
//! of each variable's CPD evaluated at that assignment:
//!
//! ```text
//! P(world) = prod_p P(G_p | G_mother(p), G_father(p)) * P(T_p | G_p)
//! ```
//!
//! where a founder's gene term is the prior ```P(G_p)```. A child's term reads the gene counts that
//! *this* world assigns to the parents; nothing is marginalized.

use crate::model::{Population, ProbabilityModel};
use crate::world::{GeneCount, World};


/// Scores `World`s of a `Population` under a `ProbabilityModel`
#[derive(Clone, Copy)]
pub struct JointProbability<'a> {

    population: &'a Population,

    model: &'a ProbabilityModel

}

impl<'a> JointProbability<'a> {

    pub fn new(population: &'a Population, model: &'a ProbabilityModel) -> Self {
        JointProbability { population, model }
    }

    /// ```P(world)```. The `world` must be over the people of this `Population`.
    pub fn probability(&self, world: &World) -> f64 {
        self.population
            .topological_order()
            .iter()
            .map(|&idx| self.person_term(world, idx))
            .product()
    }

    /// The factor contributed by the person at `idx`: ```P(G | Pa(G)) * P(T | G)```
    pub fn person_term(&self, world: &World, idx: usize) -> f64 {
        let genes = world.genes(idx);
        self.gene_term(world, idx) * self.model.trait_likelihood(genes, world.has_trait(idx))
    }

    /// ```P(G | Pa(G))``` for the person at `idx`
    pub fn gene_term(&self, world: &World, idx: usize) -> f64 {
        self.gene_given_parents(world, idx, world.genes(idx))
    }

    /// ```P(G = genes)``` for the person at `idx`, given only the gene counts of their parents in
    /// `world`. Founders get the prior.
    pub fn gene_given_parents(&self, world: &World, idx: usize, genes: GeneCount) -> f64 {
        match self.population.parents_of(idx) {
            None => self.model.gene_prior(genes),
            Some((mother, father)) => {
                self.model.inheritance(world.genes(mother), world.genes(father), genes)
            }
        }
    }

}

//! Defines a `Sampler` for likelihood weighted particle generation.
//!
//! Gene counts are drawn forward exactly as in `ForwardSampler`. Observed traits are not drawn:
//! they are clamped to the evidence, and the sample's weight is multiplied by the likelihood of
//! each observation given the gene count drawn for that person.

use crate::model::{Population, ProbabilityModel};
use crate::person::Observeable;
use crate::world::World;
use super::{draw, draw_genes, WeightedSample, WeightedSampler};

use rand::Rng;


/// A `Sampler` that uses likelihood weighting to draw full `World`s consistent with the evidence
/// of a `Population`.
pub struct LikelihoodWeightedSampler<'a> {

    /// The population from which to sample. Its observations are the evidence.
    population: &'a Population,

    model: &'a ProbabilityModel

}


impl<'a> LikelihoodWeightedSampler<'a> {

    pub fn new(population: &'a Population, model: &'a ProbabilityModel) -> Self {
        LikelihoodWeightedSampler { population, model }
    }

}


impl<'a> WeightedSampler for LikelihoodWeightedSampler<'a> {

    fn weighted_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> WeightedSample {
        let mut world = World::new(self.population.len());
        let mut w = 1.0;

        for &idx in self.population.topological_order().iter() {
            let genes = draw_genes(self.population, self.model, &world, idx, rng);
            world.set_genes(idx, genes);

            let observed = self.population.person(idx).and_then(|p| p.observation());
            match observed {
                Some(present) => {
                    world.set_trait(idx, present);
                    // update the weight by P(T | G)
                    w *= self.model.trait_likelihood(genes, present);
                },
                None => {
                    let present = draw(self.model.trait_row(genes), rng) == 1;
                    world.set_trait(idx, present);
                }
            }
        }

        WeightedSample(world, w)
    }

}

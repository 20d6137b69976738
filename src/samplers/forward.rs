//! Defines a simple forward sampler for the inheritance model
//!
//! Every person is drawn in topological order: first their gene count, from the prior or from the
//! gene counts already drawn for their parents, then their trait given that gene count. Evidence is
//! ignored.

use crate::model::{Population, ProbabilityModel};
use crate::world::World;
use super::{draw, draw_genes, Sampler};

use rand::Rng;

/// A simple, stateless `Sampler` for the prior distribution over `World`s
pub struct ForwardSampler<'a> {

    population: &'a Population,

    model: &'a ProbabilityModel

}


impl<'a> ForwardSampler<'a> {

    pub fn new(population: &'a Population, model: &'a ProbabilityModel) -> Self {
        ForwardSampler { population, model }
    }

}

impl<'a> Sampler for ForwardSampler<'a> {

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> World {
        let mut world = World::new(self.population.len());

        for &idx in self.population.topological_order().iter() {
            // parents are always drawn before their children
            let genes = draw_genes(self.population, self.model, &world, idx, rng);
            world.set_genes(idx, genes);

            let present = draw(self.model.trait_row(genes), rng) == 1;
            world.set_trait(idx, present);
        }

        world
    }

}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::JointProbability;
    use crate::model::PopulationBuilder;
    use crate::world::GeneCount;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample() {
        let population = PopulationBuilder::new()
            .with_child("Harry", "Lily", "James", None)
            .with_founder("James", None)
            .with_founder("Lily", None)
            .build()
            .unwrap();
        let model = ProbabilityModel::default();
        let joint = JointProbability::new(&population, &model);

        let sampler = ForwardSampler::new(&population, &model);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let world = sampler.sample(&mut rng);
            assert_eq!(3, world.len());
            assert!(joint.probability(&world) > 0.0);
        }
    }

    #[test]
    /// Without mutation, two parents with two copies always pass on two copies
    fn deterministic_inheritance() {
        let population = PopulationBuilder::new()
            .with_child("Harry", "Lily", "James", None)
            .with_founder("James", None)
            .with_founder("Lily", None)
            .build()
            .unwrap();
        let model = ProbabilityModel::new(
            array![0.0, 0.0, 1.0],
            array![[0.99, 0.01], [0.44, 0.56], [0.35, 0.65]],
            0.0
        ).unwrap();

        let sampler = ForwardSampler::new(&population, &model);
        let mut rng = StdRng::seed_from_u64(3);
        let harry = population.index_of("Harry").unwrap();

        for _ in 0..50 {
            assert_eq!(GeneCount::Two, sampler.sample(&mut rng).genes(harry));
        }
    }

    #[test]
    fn founder_frequencies() {
        let population = PopulationBuilder::new().with_founder("Lily", None).build().unwrap();
        let model = ProbabilityModel::default();
        let sampler = ForwardSampler::new(&population, &model);
        let mut rng = StdRng::seed_from_u64(11);

        let n = 20_000;
        let carriers = (0..n).filter(|_| sampler.sample(&mut rng).genes(0) != GeneCount::Zero).count();

        assert!((carriers as f64 / n as f64 - 0.04).abs() < 0.01);
    }

}

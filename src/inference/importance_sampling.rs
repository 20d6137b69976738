//! Defines an importance-sampling `InferenceEngine` for approximate inference using particle-based
//! approximations.
//!
//! Each particle is a `World` drawn by a `LikelihoodWeightedSampler` and folded into the
//! `Accumulator` with its weight in place of its joint probability. Normalizing the totals gives
//! the normalized likelihood weighting estimate of each marginal.

use crate::marginals::{Accumulator, Marginals};
use crate::model::{Population, ProbabilityModel};
use crate::samplers::{LikelihoodWeightedSampler, WeightedSample, WeightedSampler};
use crate::util::{HeredityError, Result};
use super::InferenceEngine;

use log::{debug, info};
use rand::Rng;

/// An `InferenceEngine` using Importance Sampling
pub struct ImportanceSamplingEngine<'a, R: Rng> {

    population: &'a Population,

    /// The Likelihood-Weighted sampler for the given `Population`
    sampler: LikelihoodWeightedSampler<'a>,

    /// The number of samples to use
    samples: usize,

    /// The source of randomness. Seed it for reproducible estimates.
    rng: R

}

impl<'a, R: Rng> ImportanceSamplingEngine<'a, R> {

    pub fn new(population: &'a Population, model: &'a ProbabilityModel, samples: usize, rng: R) -> Self {
        ImportanceSamplingEngine {
            population,
            sampler: LikelihoodWeightedSampler::new(population, model),
            samples,
            rng
        }
    }

}

impl<'a, R: Rng> InferenceEngine for ImportanceSamplingEngine<'a, R> {

    fn infer(&mut self) -> Result<Marginals> {
        if self.samples == 0 {
            return Err(HeredityError::General(String::from("importance sampling needs at least one sample")));
        }

        debug!("drawing {} likelihood weighted samples", self.samples);

        let mut acc = Accumulator::new(self.population.len());
        for _ in 0..self.samples {
            let WeightedSample(world, w) = self.sampler.weighted_sample(&mut self.rng);
            acc.accumulate(&world, w);
        }

        info!("accumulated {} weighted samples over {} people", acc.worlds(), self.population.len());
        acc.normalize(self.population)
    }

}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PopulationBuilder;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn requires_samples() {
        let population = PopulationBuilder::new().with_founder("Lily", None).build().unwrap();
        let model = ProbabilityModel::default();
        let mut engine = ImportanceSamplingEngine::new(&population, &model, 0, StdRng::seed_from_u64(1));
        assert!(engine.infer().is_err());
    }

    #[test]
    fn reproducible() {
        let population = PopulationBuilder::new()
            .with_child("Harry", "Lily", "James", None)
            .with_founder("James", Some(true))
            .with_founder("Lily", None)
            .build()
            .unwrap();
        let model = ProbabilityModel::default();

        let a = ImportanceSamplingEngine::new(&population, &model, 500, StdRng::seed_from_u64(9))
            .infer()
            .unwrap();
        let b = ImportanceSamplingEngine::new(&population, &model, 500, StdRng::seed_from_u64(9))
            .infer()
            .unwrap();

        assert_eq!(a, b);
    }

}

//! Exact inference by enumeration.
//!
//! Every world consistent with the evidence is generated, scored with `JointProbability`, and
//! folded into an `Accumulator`. The outer loop runs over candidate sets of trait-expressing
//! people and skips those that contradict the evidence before the gene assignments are
//! enumerated; the inner loop runs over every assignment of gene counts.
//!
//! For ```n``` people with ```k``` observed traits this visits ```2^(n-k) * 3^n``` worlds, so it
//! is only practical for small families.

use crate::marginals::{Accumulator, Marginals};
use crate::model::{Population, ProbabilityModel};
use crate::util::{HeredityError, Result};
use crate::world::{Evidence, World};
use super::{InferenceEngine, JointProbability};

use log::{debug, info, warn};
use rayon::prelude::*;

/// The most people a `Population` may hold for enumeration. Trait sets are represented as bits
/// of a `u64`, and anything near this size would not finish anyway.
pub const MAX_PEOPLE: usize = 32;

/// Above this size enumeration takes noticeably long
const SLOW_ENUMERATION: usize = 10;


/// Generates every `World` of a `Population` that agrees with its evidence
#[derive(Clone, Copy)]
pub struct Enumerator<'a> {

    population: &'a Population,

    /// The observations, precomputed once for the whole enumeration
    evidence: Evidence

}

impl<'a> Enumerator<'a> {

    /// # Errors
    /// * `HeredityError::PopulationTooLarge` if `population` has more than `MAX_PEOPLE` people
    pub fn new(population: &'a Population) -> Result<Self> {
        if population.len() > MAX_PEOPLE {
            return Err(HeredityError::PopulationTooLarge {
                size: population.len(),
                limit: MAX_PEOPLE
            });
        }

        if population.len() > SLOW_ENUMERATION {
            warn!(
                "enumerating a population of {} people; this grows as 6^n and may take a long time",
                population.len()
            );
        }

        Ok(Enumerator { population, evidence: population.evidence() })
    }

    /// Every set of trait-expressing people that agrees with the evidence, as a bit mask where
    /// bit ```i``` is the person at index ```i```.
    pub fn trait_subsets(&self) -> impl Iterator<Item = u64> {
        let evidence = self.evidence;
        (0..self.num_trait_masks()).filter(move |&mask| evidence.admits(mask))
    }

    /// Visit every gene assignment paired with the trait set `mask`
    pub fn for_each_in_trait_subset<F>(&self, mask: u64, mut visit: F)
        where F: FnMut(&World)
    {
        let mut world = World::new(self.population.len());
        world.set_traits_from_mask(mask);

        loop {
            visit(&world);
            if ! world.advance_genes() {
                break;
            }
        }
    }

    /// Visit every `World` that agrees with the evidence
    pub fn for_each_world<F>(&self, mut visit: F)
        where F: FnMut(&World)
    {
        for mask in self.trait_subsets() {
            self.for_each_in_trait_subset(mask, &mut visit);
        }
    }

    /// The number of worlds `for_each_world` visits
    pub fn num_worlds(&self) -> u128 {
        let n = self.population.len() as u32;
        let free = n - self.evidence.num_observed();
        2u128.pow(free) * 3u128.pow(n)
    }

    /// The number of trait sets considered before filtering
    fn num_trait_masks(&self) -> u64 {
        1u64 << self.population.len()
    }

}


/// Exact, single-threaded inference by enumeration
pub struct EnumerationEngine<'a> {

    population: &'a Population,

    model: &'a ProbabilityModel

}

impl<'a> EnumerationEngine<'a> {

    pub fn new(population: &'a Population, model: &'a ProbabilityModel) -> Self {
        EnumerationEngine { population, model }
    }

}

impl<'a> InferenceEngine for EnumerationEngine<'a> {

    fn infer(&mut self) -> Result<Marginals> {
        let enumerator = Enumerator::new(self.population)?;
        let joint = JointProbability::new(self.population, self.model);

        debug!("enumerating {} worlds", enumerator.num_worlds());

        let mut acc = Accumulator::new(self.population.len());
        enumerator.for_each_world(|world| acc.accumulate(world, joint.probability(world)));

        info!("accumulated {} worlds over {} people", acc.worlds(), self.population.len());
        acc.normalize(self.population)
    }

}


/// Exact inference by enumeration, with the trait sets partitioned across a rayon thread pool.
///
/// Each worker accumulates its own partial totals, which are merged at the end. The result
/// differs from `EnumerationEngine` only by the order of floating point summation.
pub struct ParallelEnumerationEngine<'a> {

    population: &'a Population,

    model: &'a ProbabilityModel,

    /// A dedicated pool, or `None` to use rayon's global pool
    tpool: Option<rayon::ThreadPool>

}

impl<'a> ParallelEnumerationEngine<'a> {

    /// Construct an engine that runs on rayon's global thread pool
    pub fn new(population: &'a Population, model: &'a ProbabilityModel) -> Self {
        ParallelEnumerationEngine { population, model, tpool: None }
    }

    /// Construct an engine with its own pool of `threads` workers
    pub fn with_threads(
        population: &'a Population,
        model: &'a ProbabilityModel,
        threads: usize
    ) -> Result<Self> {
        let tpool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| HeredityError::General(format!("could not start thread pool: {}", e)))?;

        Ok(ParallelEnumerationEngine { population, model, tpool: Some(tpool) })
    }

    fn accumulate(&self, enumerator: &Enumerator) -> Accumulator {
        let n = self.population.len();
        let joint = JointProbability::new(self.population, self.model);
        let evidence = self.population.evidence();

        (0..enumerator.num_trait_masks())
            .into_par_iter()
            .filter(|&mask| evidence.admits(mask))
            .fold(
                || Accumulator::new(n),
                |mut acc, mask| {
                    enumerator.for_each_in_trait_subset(
                        mask,
                        |world| acc.accumulate(world, joint.probability(world))
                    );
                    acc
                }
            )
            .reduce(
                || Accumulator::new(n),
                |mut acc, other| {
                    acc.merge(other);
                    acc
                }
            )
    }

}

impl<'a> InferenceEngine for ParallelEnumerationEngine<'a> {

    fn infer(&mut self) -> Result<Marginals> {
        let enumerator = Enumerator::new(self.population)?;

        debug!("enumerating {} worlds in parallel", enumerator.num_worlds());

        let acc = match self.tpool {
            Some(ref tpool) => tpool.install(|| self.accumulate(&enumerator)),
            None => self.accumulate(&enumerator)
        };

        info!("accumulated {} worlds over {} people", acc.worlds(), self.population.len());
        acc.normalize(self.population)
    }

}

//! Defines the interface to inference engines.
//!
//! Every engine answers the same query: the posterior ```P(G_p | e)``` and ```P(T_p | e)``` of every
//! person ```p``` in a `Population`, where ```e``` is the trait evidence recorded in it.

use crate::marginals::Marginals;
use crate::model::{Population, ProbabilityModel};
use crate::util::Result;

mod enumeration;
mod importance_sampling;
mod joint;

pub use self::enumeration::{EnumerationEngine, Enumerator, ParallelEnumerationEngine, MAX_PEOPLE};
pub use self::importance_sampling::ImportanceSamplingEngine;
pub use self::joint::JointProbability;


/// An `InferenceEngine` computes the marginal distributions of every person in a `Population`
/// given its evidence.
///
/// `InferenceEngine`s are stateful and must take the `Population` and `ProbabilityModel` as
/// arguments to whatever construction mechanism they employ.
pub trait InferenceEngine {

    /// Infer the gene and trait distributions of every person
    fn infer(&mut self) -> Result<Marginals>;

}


/// Exact inference with the single-threaded `EnumerationEngine`.
///
/// # Errors
/// * `HeredityError::PopulationTooLarge` if the population cannot be enumerated
/// * `HeredityError::ContradictoryEvidence` if no world consistent with the evidence has
///   positive probability
pub fn infer(population: &Population, model: &ProbabilityModel) -> Result<Marginals> {
    EnumerationEngine::new(population, model).infer()
}

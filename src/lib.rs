//! Posterior inference of an inherited gene and the trait it causes, over a family tree.
//!
//! A `Population` of people with optional trait observations is combined with a
//! `ProbabilityModel` to form a Bayesian network. An `InferenceEngine` then computes the
//! marginal gene count and trait distributions of every person given the observations.

extern crate indexmap;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate ndarray;
extern crate rand;
extern crate rayon;

pub mod util;
pub mod person;
pub mod model;
pub mod world;
pub mod marginals;
pub mod inference;
pub mod samplers;
pub mod io;

pub use util::{Result, HeredityError};
pub use person::{Observeable, Person};
pub use model::{Population, PopulationBuilder, ProbabilityModel};
pub use world::{Evidence, GeneCount, World};
pub use marginals::{Accumulator, Distribution, Marginals};
pub use inference::{
    infer,
    EnumerationEngine,
    Enumerator,
    ImportanceSamplingEngine,
    InferenceEngine,
    JointProbability,
    ParallelEnumerationEngine,
    MAX_PEOPLE
};

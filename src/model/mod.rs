//! Defines the inheritance model: the `Population` (the structure of the Bayesian network) and
//! the `ProbabilityModel` (its parameters).
//!
//! Every person contributes two variables to the network, their gene count ```G``` and whether
//! they express the trait ```T```. A founder's ```G``` has no parents; a child's ```G``` has the
//! gene counts of their mother and father as parents; every ```T``` has only its own person's
//! ```G``` as a parent.

mod parameters;
mod population;

pub use self::parameters::ProbabilityModel;
pub use self::population::{Population, PopulationBuilder};

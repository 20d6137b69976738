//! Defines the `Error` type for the heredity library

use std::error::Error;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, HeredityError>;

#[derive(Clone, Debug, PartialEq)]
pub enum HeredityError {

    /// A person names a mother or father that is not part of the `Population`.
    MissingParent { person: String, parent: String },

    /// A person records exactly one parent. Parents must be both present or both absent.
    IncompleteParents(String),

    /// A person records the same individual as both mother and father
    SelfParent(String),

    /// A name was encountered twice while building a `Population`
    DuplicatePerson(String),

    /// The ancestry relation contains a cycle. The value holds the people on (or descending from)
    /// the cycle.
    AncestryCycle(Vec<String>),

    /// A lookup by name failed
    UnknownPerson(String),

    /// The `Population` exceeds the number of people that can be enumerated
    PopulationTooLarge { size: usize, limit: usize },

    /// A `ProbabilityModel` was given parameters that do not describe probability distributions
    InvalidParameters(String),

    /// A `World` was described by inconsistent sets of people
    InvalidWorld(String),

    /// No world consistent with the evidence has positive probability
    ContradictoryEvidence,

    /// Malformed input data, with the 1-based line on which it was found
    Parse { line: usize, reason: String },

    /// An I/O failure while reading input data
    Io(String),

    /// A general error with the given description
    General(String),

}

impl HeredityError {

    /// `true` if this error rejects the structure of a `Population`
    pub fn is_invalid_population(&self) -> bool {
        match self {
            &HeredityError::MissingParent { .. } |
            &HeredityError::IncompleteParents(_) |
            &HeredityError::SelfParent(_) |
            &HeredityError::DuplicatePerson(_) |
            &HeredityError::AncestryCycle(_) => true,
            _ => false
        }
    }

}

impl Error for HeredityError {}

impl fmt::Display for HeredityError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &HeredityError::MissingParent { ref person, ref parent } => {
                write!(f, "invalid population: {} names unknown parent {}", person, parent)
            },
            &HeredityError::IncompleteParents(ref person) => {
                write!(f, "invalid population: {} must have both parents or neither", person)
            },
            &HeredityError::SelfParent(ref person) => {
                write!(f, "invalid population: {} has the same person as mother and father", person)
            },
            &HeredityError::DuplicatePerson(ref person) => {
                write!(f, "invalid population: {} appears more than once", person)
            },
            &HeredityError::AncestryCycle(ref people) => {
                write!(f, "invalid population: ancestry cycle among {}", people.join(", "))
            },
            &HeredityError::UnknownPerson(ref person) => write!(f, "unknown person {}", person),
            &HeredityError::PopulationTooLarge { size, limit } => {
                write!(f, "population of {} exceeds the enumeration limit of {}", size, limit)
            },
            &HeredityError::InvalidParameters(ref reason) => {
                write!(f, "invalid model parameters: {}", reason)
            },
            &HeredityError::InvalidWorld(ref reason) => write!(f, "invalid world: {}", reason),
            &HeredityError::ContradictoryEvidence => {
                write!(f, "no consistent world found for given evidence")
            },
            &HeredityError::Parse { line, ref reason } => write!(f, "line {}: {}", line, reason),
            &HeredityError::Io(ref reason) => write!(f, "i/o error: {}", reason),
            &HeredityError::General(ref reason) => write!(f, "{}", reason),
        }
    }

}

impl From<io::Error> for HeredityError {

    fn from(err: io::Error) -> Self {
        HeredityError::Io(err.to_string())
    }

}

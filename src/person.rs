//! Definition of the person module
//!
//! A `Person` is a single member of a `Population`: a name, an optional pair of parents, and an
//! optional observation of whether they express the trait.

/// Something whose value may be observed as evidence.
pub trait Observeable<T> {

    fn observe(&mut self, val: T);

    fn forget(&mut self);

    fn observation(&self) -> Option<T>;

}


#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    /// The unique name of the `Person`
    name: String,

    /// The names of the mother and father, or `None` for a founder
    parents: Option<(String, String)>,

    /// Evidence of whether the trait is expressed. `None` if unknown.
    observed_trait: Option<bool>
}

impl Person {

    /// Construct a `Person` with no recorded parents
    pub fn founder(name: &str) -> Self {
        Person {
            name: String::from(name),
            parents: None,
            observed_trait: None
        }
    }

    /// Construct a `Person` with the given mother and father
    pub fn child(name: &str, mother: &str, father: &str) -> Self {
        Person {
            name: String::from(name),
            parents: Some((String::from(mother), String::from(father))),
            observed_trait: None
        }
    }

    /// Attach an observation of the trait, consuming and returning the `Person`
    pub fn with_trait(mut self, observed: Option<bool>) -> Self {
        self.observed_trait = observed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mother(&self) -> Option<&str> {
        self.parents.as_ref().map(|&(ref m, _)| m.as_str())
    }

    pub fn father(&self) -> Option<&str> {
        self.parents.as_ref().map(|&(_, ref f)| f.as_str())
    }

    /// `true` if the `Person` has no recorded parents
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }

}

impl Observeable<bool> for Person {

    fn observe(&mut self, val: bool) {
        self.observed_trait = Some(val);
    }

    fn forget(&mut self) {
        self.observed_trait = None;
    }

    fn observation(&self) -> Option<bool> {
        self.observed_trait
    }

}

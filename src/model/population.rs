//! Defines a `Population`, the pedigree over which inference runs.

use crate::person::{Observeable, Person};
use crate::util::{HeredityError, Result};
use crate::world::Evidence;

use indexmap::IndexMap;
use indexmap::map::Values;

use std::collections::VecDeque;


/// A validated family pedigree.
///
/// # Representation
/// The people are held in insertion order, keyed by name. Every person's position in that order
/// is their index into a `World`. Alongside the people, the `Population` resolves each child's
/// parents to indices and precomputes a topological order in which every parent precedes their
/// children.
#[derive(Clone, Debug)]
pub struct Population {

    /// The people, keyed by name, in insertion order
    people: IndexMap<String, Person>,

    /// The indices of the mother and father of each person, or `None` for a founder
    parents: Vec<Option<(usize, usize)>>,

    /// Indices of the people such that parents precede their children
    order: Vec<usize>

}

impl Population {

    /// The number of people
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate over the people in insertion order
    pub fn iter(&self) -> Values<String, Person> {
        self.people.values()
    }

    /// Lookup a `Person` by name
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    /// The `Person` at `idx`
    pub fn person(&self, idx: usize) -> Option<&Person> {
        self.people.get_index(idx).map(|(_, p)| p)
    }

    /// Lookup the index of a `Person` by name
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.people
            .get_index_of(name)
            .ok_or_else(|| HeredityError::UnknownPerson(String::from(name)))
    }

    /// The indices of the mother and father of the person at `idx`, or `None` for a founder
    pub fn parents_of(&self, idx: usize) -> Option<(usize, usize)> {
        self.parents[idx]
    }

    /// Indices of every person, ordered so that parents come before their children
    pub fn topological_order(&self) -> &[usize] {
        &self.order
    }

    /// The number of people without recorded parents
    pub fn num_founders(&self) -> usize {
        self.parents.iter().filter(|p| p.is_none()).count()
    }

    /// The trait observations of every person
    pub fn evidence(&self) -> Evidence {
        Evidence::of(self)
    }

    /// Record that the named person was observed with (or without) the trait
    pub fn observe(&mut self, name: &str, present: bool) -> Result<()> {
        match self.people.get_mut(name) {
            Some(person) => {
                person.observe(present);
                Ok(())
            },
            None => Err(HeredityError::UnknownPerson(String::from(name)))
        }
    }

    /// Remove any observation of the named person's trait
    pub fn forget(&mut self, name: &str) -> Result<()> {
        match self.people.get_mut(name) {
            Some(person) => {
                person.forget();
                Ok(())
            },
            None => Err(HeredityError::UnknownPerson(String::from(name)))
        }
    }

}


/// An implementation of the [builder pattern] for creating a `Population`.
///
/// People may be added in any order; parents are resolved, and the ancestry checked for cycles,
/// when the `Population` is built.
///
/// [builder pattern]: https://en.wikipedia.org/wiki/Builder_pattern
pub struct PopulationBuilder {

    /// The people added so far
    people: IndexMap<String, Person>,

    /// The error state of the builder
    err: Option<HeredityError>

}

impl Default for PopulationBuilder {

    fn default() -> Self {
        PopulationBuilder::new()
    }

}

impl PopulationBuilder {

    /// Construct a new `PopulationBuilder` representing an empty `Population`
    pub fn new() -> Self {
        PopulationBuilder {
            people: IndexMap::new(),
            err: None
        }
    }


    /// Add a person with no recorded parents
    pub fn with_founder(self, name: &str, observed: Option<bool>) -> Self {
        self.with_person(Person::founder(name).with_trait(observed))
    }


    /// Add a person with the given mother and father
    pub fn with_child(self, name: &str, mother: &str, father: &str, observed: Option<bool>) -> Self {
        self.with_person(Person::child(name, mother, father).with_trait(observed))
    }


    /// Add a `Person` to the `Population`
    pub fn with_person(mut self, person: Person) -> Self {
        if self.err.is_some() {
            return self;
        }

        if self.people.contains_key(person.name()) {
            self.err = Some(HeredityError::DuplicatePerson(String::from(person.name())));
            return self;
        }

        self.people.insert(String::from(person.name()), person);
        self
    }


    /// Complete building the `Population`.
    ///
    /// # Returns
    /// the `Population`, or an error if one was generated during the building process
    ///
    /// # Errors
    /// * `HeredityError::DuplicatePerson` if a name was added twice
    /// * `HeredityError::SelfParent` if a person's mother and father are the same person
    /// * `HeredityError::MissingParent` if a parent is not in the `Population`
    /// * `HeredityError::AncestryCycle` if a person is their own ancestor
    pub fn build(self) -> Result<Population> {
        if let Some(e) = self.err {
            return Err(e);
        }

        let parents = resolve_parents(&self.people)?;
        let order = topological_order(&self.people, &parents)?;

        Ok(Population { people: self.people, parents, order })
    }

}


/// Resolve the parent names of every person to indices
fn resolve_parents(people: &IndexMap<String, Person>) -> Result<Vec<Option<(usize, usize)>>> {
    let lookup = |person: &Person, parent: &str| {
        people.get_index_of(parent).ok_or_else(|| HeredityError::MissingParent {
            person: String::from(person.name()),
            parent: String::from(parent)
        })
    };

    let mut parents = Vec::with_capacity(people.len());
    for person in people.values() {
        match (person.mother(), person.father()) {
            (Some(mother), Some(father)) => {
                if mother == father {
                    return Err(HeredityError::SelfParent(String::from(person.name())));
                }
                parents.push(Some((lookup(person, mother)?, lookup(person, father)?)));
            },
            _ => parents.push(None)
        }
    }

    Ok(parents)
}


/// Kahn's algorithm over the ancestry graph. Ties are broken by insertion order, so a
/// `Population` entered parents-first keeps its order.
fn topological_order(
    people: &IndexMap<String, Person>,
    parents: &[Option<(usize, usize)>]
) -> Result<Vec<usize>> {
    let n = parents.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut unresolved = vec![0; n];

    for (child, p) in parents.iter().enumerate() {
        if let &Some((mother, father)) = p {
            children[mother].push(child);
            children[father].push(child);
            unresolved[child] = 2;
        }
    }

    let mut ready: VecDeque<usize> = (0..n).filter(|&i| unresolved[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(idx) = ready.pop_front() {
        order.push(idx);

        for &child in children[idx].iter() {
            unresolved[child] -= 1;
            if unresolved[child] == 0 {
                ready.push_back(child);
            }
        }
    }

    if order.len() < n {
        let stuck = (0..n).filter(|&i| unresolved[i] > 0)
                          .filter_map(|i| people.get_index(i))
                          .map(|(name, _)| name.clone())
                          .collect();
        return Err(HeredityError::AncestryCycle(stuck));
    }

    Ok(order)
}

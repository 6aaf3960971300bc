//! In-memory directory state: the fetched batch and the active search term.

use crate::filter::filter_people;
use crate::person::Person;

/// Holds the most recent batch of people and the active search term.
///
/// The batch is replaced wholesale by [`DirectoryStore::replace`]; there is no
/// partial update or merge.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    people: Vec<Person>,
    search_term: String,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `people` with no search term.
    pub fn with_people(people: Vec<Person>) -> Self {
        let mut store = Self::new();
        store.replace(people);
        store
    }

    /// Replace the whole collection with a freshly fetched batch.
    pub fn replace(&mut self, people: Vec<Person>) {
        tracing::debug!(count = people.len(), "replacing directory contents");
        self.people = people;
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The people matching the active search term, in fetch order.
    pub fn filtered(&self) -> Vec<&Person> {
        filter_people(&self.people, &self.search_term)
    }

    pub fn find_by_full_name(&self, name: &str) -> Option<&Person> {
        find_by_full_name(&self.people, name)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Person> {
        find_by_email(&self.people, email)
    }
}

/// Find a person whose `"first last"` equals `name` exactly.
///
/// Case-sensitive, no trimming. Returns the first match when names repeat.
pub fn find_by_full_name<'a>(people: &'a [Person], name: &str) -> Option<&'a Person> {
    people.iter().find(|p| p.full_name() == name)
}

/// Find a person by email, the identity key within a batch.
pub fn find_by_email<'a>(people: &'a [Person], email: &str) -> Option<&'a Person> {
    people.iter().find(|p| p.email == email)
}

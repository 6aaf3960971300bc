//! Name filtering for the gallery.

use crate::person::Person;

/// Filter people by a free-text search term.
///
/// A term that is blank after trimming matches everyone. Otherwise a person
/// matches when their lower-cased full name contains the lower-cased term.
/// The term itself is not trimmed for the substring test, so `"ann "` only
/// matches names with a space after "ann". Input order is preserved.
pub fn filter_people<'a>(people: &'a [Person], term: &str) -> Vec<&'a Person> {
    if term.trim().is_empty() {
        return people.iter().collect();
    }

    let needle = term.to_lowercase();
    people
        .iter()
        .filter(|person| person.full_name().to_lowercase().contains(&needle))
        .collect()
}

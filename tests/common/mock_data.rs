//! Mock data builders for people records.
//!
//! Builds both typed [`Person`] values for library tests and raw JSON in the
//! shape the listing endpoint returns for server-backed tests.

#![allow(dead_code)]

use roster::person::{DateOfBirth, Location, Name, Person, PersonId, Picture, Street};
use serde_json::{Value, json};

/// Builder for creating test people
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    /// Create a person with the given name; email is `first.last@example.com`.
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            person: Person {
                id: PersonId {
                    name: "SSN".to_string(),
                    value: Some("000-00-0000".to_string()),
                },
                name: Name {
                    title: "Ms".to_string(),
                    first: first.to_string(),
                    last: last.to_string(),
                },
                dob: DateOfBirth {
                    date: "1990-03-04T10:00:00.000Z".to_string(),
                    age: 34,
                },
                email: format!("{}.{}@example.com", first, last).to_lowercase(),
                location: Location {
                    street: Street {
                        number: 12,
                        name: "Main Street".to_string(),
                    },
                    city: "Springfield".to_string(),
                    state: "Oregon".to_string(),
                    country: "United States".to_string(),
                    postcode: "97477".to_string(),
                },
                phone: "(555) 010-0000".to_string(),
                picture: Picture {
                    large: format!("https://example.com/large/{}.jpg", first.to_lowercase()),
                    medium: format!("https://example.com/med/{}.jpg", first.to_lowercase()),
                    thumbnail: format!("https://example.com/thumb/{}.jpg", first.to_lowercase()),
                },
            },
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.person.email = email.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.person.location.city = city.to_string();
        self
    }

    pub fn dob(mut self, date: &str) -> Self {
        self.person.dob.date = date.to_string();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

/// Alice Adams, Bob Brown, Carol Clark in that order
pub fn abc_people() -> Vec<Person> {
    vec![
        PersonBuilder::new("Alice", "Adams").build(),
        PersonBuilder::new("Bob", "Brown").build(),
        PersonBuilder::new("Carol", "Clark").build(),
    ]
}

/// Encode people the way the listing endpoint does, with a numeric postcode
/// on the first record.
pub fn people_json(people: &[Person]) -> Value {
    let mut value = serde_json::to_value(people).expect("people serialize");
    if let Some(first) = value.get_mut(0) {
        let code = first["location"]["postcode"]
            .as_str()
            .and_then(|s| s.parse::<i64>().ok());
        if let Some(code) = code {
            first["location"]["postcode"] = json!(code);
        }
    }
    value
}

//! Person records as returned by the people listing endpoint.
//!
//! Records are decoded once per fetch and never mutated afterwards. The
//! email address is the identity key used by lookup and navigation.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: PersonId,
    pub name: Name,
    #[serde(default)]
    pub dob: DateOfBirth,
    pub email: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub picture: Picture,
}

impl Person {
    /// Full name as displayed on cards: `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Whether `other` is the same person (same email).
    pub fn same_identity(&self, other: &Person) -> bool {
        self.email == other.email
    }
}

#[cfg(test)]
impl Person {
    /// Minimal record for unit tests; email is `first.last@example.com`.
    pub(crate) fn named(first: &str, last: &str) -> Self {
        Person {
            id: PersonId::default(),
            name: Name {
                title: String::new(),
                first: first.to_string(),
                last: last.to_string(),
            },
            dob: DateOfBirth::default(),
            email: format!("{}.{}@example.com", first, last).to_lowercase(),
            location: Location::default(),
            phone: String::new(),
            picture: Picture::default(),
        }
    }
}

/// Upstream identifier. `value` is null for some nationalities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonId {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    /// RFC 3339 timestamp, e.g. `1993-07-20T09:44:18.674Z`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub age: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub street: Street,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "deserialize_postcode")]
    pub postcode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// Postcodes arrive as strings for some countries and numbers for others.
fn deserialize_postcode<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Postcode {
        Text(String),
        Number(i64),
    }

    Ok(match Postcode::deserialize(deserializer)? {
        Postcode::Text(s) => s,
        Postcode::Number(n) => n.to_string(),
    })
}

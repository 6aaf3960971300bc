use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api";

pub const DEFAULT_BATCH_SIZE: u32 = 12;

/// Message shown in place of the gallery when the people listing cannot be fetched.
pub const DEGRADED_MESSAGE: &str = "There was a problem accessing people data";

/// A field accepted by the listing endpoint's `inc` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Gender,
    Name,
    Location,
    Email,
    Login,
    Registered,
    Dob,
    Phone,
    Cell,
    Id,
    Picture,
    Nat,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::Name => "name",
            Field::Location => "location",
            Field::Email => "email",
            Field::Login => "login",
            Field::Registered => "registered",
            Field::Dob => "dob",
            Field::Phone => "phone",
            Field::Cell => "cell",
            Field::Id => "id",
            Field::Picture => "picture",
            Field::Nat => "nat",
        }
    }

    /// Fields requested when the configuration does not name any.
    pub fn defaults() -> Vec<Field> {
        vec![
            Field::Id,
            Field::Name,
            Field::Dob,
            Field::Email,
            Field::Location,
            Field::Phone,
            Field::Picture,
        ]
    }

    /// Join fields into the comma-separated form the endpoint expects.
    pub fn join(fields: &[Field]) -> String {
        fields
            .iter()
            .map(Field::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gender" => Ok(Field::Gender),
            "name" => Ok(Field::Name),
            "location" => Ok(Field::Location),
            "email" => Ok(Field::Email),
            "login" => Ok(Field::Login),
            "registered" => Ok(Field::Registered),
            "dob" => Ok(Field::Dob),
            "phone" => Ok(Field::Phone),
            "cell" => Ok(Field::Cell),
            "id" => Ok(Field::Id),
            "picture" => Ok(Field::Picture),
            "nat" => Ok(Field::Nat),
            _ => Err(RosterError::Config(format!("unknown field '{}'", s))),
        }
    }
}

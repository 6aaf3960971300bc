pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod logging;
pub mod navigation;
pub mod person;
pub mod source;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{Result, RosterError};
pub use filter::filter_people;
pub use navigation::{next, previous};
pub use person::Person;
pub use source::{PersonSource, RandomUserSource};
pub use store::{DirectoryStore, find_by_email, find_by_full_name};
pub use types::Field;

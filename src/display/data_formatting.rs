use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::Serialize;

use crate::person::{Location, Person};

/// Format a birth date as `M/D/YYYY` without zero padding.
///
/// The date is read as an RFC 3339 timestamp and shown in UTC. Anything that
/// does not parse is returned unchanged.
///
/// # Examples
///
/// ```
/// use roster::display::format_birthday;
///
/// assert_eq!(format_birthday("1993-07-20T09:44:18.674Z"), "7/20/1993");
/// assert_eq!(format_birthday("1968-01-05T00:00:00Z"), "1/5/1968");
/// assert_eq!(format_birthday("unknown"), "unknown");
/// ```
pub fn format_birthday(date: &str) -> String {
    match date.parse::<Timestamp>() {
        Ok(ts) => {
            let zoned = ts.to_zoned(TimeZone::UTC);
            format!("{}/{}/{}", zoned.month(), zoned.day(), zoned.year())
        }
        Err(_) => date.to_string(),
    }
}

/// Format a postal address as `"{number} {street}, {city}, {country} {postcode}"`.
pub fn format_address(location: &Location) -> String {
    format!(
        "{} {}, {}, {} {}",
        location.street.number,
        location.street.name,
        location.city,
        location.country,
        location.postcode
    )
}

/// What a gallery card shows for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// 1-based position in the gallery being shown
    pub index: usize,
    pub name: String,
    pub email: String,
    pub location: String,
    pub picture: String,
}

impl CardView {
    pub fn new(index: usize, person: &Person) -> Self {
        Self {
            index,
            name: person.full_name(),
            email: person.email.clone(),
            location: format!("{}, {}", person.location.city, person.location.state),
            picture: person.picture.medium.clone(),
        }
    }
}

/// Build the cards for a gallery view, numbered from 1.
pub fn gallery_cards(view: &[&Person]) -> Vec<CardView> {
    view.iter()
        .enumerate()
        .map(|(i, person)| CardView::new(i + 1, person))
        .collect()
}

/// What the detail view shows for one person.
///
/// The email doubles as the identity the detail view is tracked by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
    pub picture: String,
}

impl From<&Person> for DetailView {
    fn from(person: &Person) -> Self {
        Self {
            name: person.full_name(),
            email: person.email.clone(),
            city: person.location.city.clone(),
            phone: person.phone.clone(),
            address: format_address(&person.location),
            birthday: format_birthday(&person.dob.date),
            picture: person.picture.large.clone(),
        }
    }
}

//! Cyclic navigation over the filtered gallery.
//!
//! Both directions wrap around at the ends. The view passed in must be the
//! live filtered view (recomputed from the current search term), not a
//! snapshot from when the detail view was opened.

use crate::error::{Result, RosterError};
use crate::person::Person;

/// Position of `current` in `view`, matched by email.
fn position(view: &[&Person], current: &Person) -> Option<usize> {
    view.iter().position(|p| p.same_identity(current))
}

/// The person after `current`, wrapping from the last back to the first.
///
/// If `current` is not in the view the first person is returned.
pub fn next<'a>(view: &[&'a Person], current: &Person) -> Result<&'a Person> {
    if view.is_empty() {
        return Err(RosterError::EmptyNavigation);
    }

    let idx = match position(view, current) {
        Some(i) if i + 1 < view.len() => i + 1,
        _ => 0,
    };
    Ok(view[idx])
}

/// The person before `current`, wrapping from the first to the last.
///
/// If `current` is not in the view the last person is returned.
pub fn previous<'a>(view: &[&'a Person], current: &Person) -> Result<&'a Person> {
    let Some(last) = view.len().checked_sub(1) else {
        return Err(RosterError::EmptyNavigation);
    };

    let idx = match position(view, current) {
        Some(i) if i > 0 => i - 1,
        _ => last,
    };
    Ok(view[idx])
}

/// Move `steps` times from `current`: positive steps go forward, negative back.
///
/// Zero steps returns `current` unchanged. The step count is reduced modulo
/// the view length, so any `i64` is answered in one pass over the view. When
/// `current` is not in the view the first step lands on the first (forward)
/// or last (backward) person, as with [`next`] and [`previous`].
pub fn step<'a>(view: &[&'a Person], current: &'a Person, steps: i64) -> Result<&'a Person> {
    if view.is_empty() {
        return Err(RosterError::EmptyNavigation);
    }
    if steps == 0 {
        return Ok(current);
    }

    let len = view.len() as i64;
    let (start, remaining) = match position(view, current) {
        Some(i) => (i as i64, steps),
        None if steps > 0 => (0, steps - 1),
        None => (len - 1, steps + 1),
    };
    let idx = (start + remaining.rem_euclid(len)) % len;
    Ok(view[idx as usize])
}

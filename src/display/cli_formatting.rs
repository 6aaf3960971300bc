use owo_colors::OwoColorize;

use super::data_formatting::{CardView, DetailView, gallery_cards};
use crate::person::Person;
use crate::types::DEGRADED_MESSAGE;

/// Format one gallery card with colors
pub fn format_card(card: &CardView) -> String {
    let index = format!("[{}]", card.index);
    format!(
        "{} {}\n    {}\n    {}\n    {}",
        index.cyan(),
        card.name.bold(),
        card.email,
        card.location.dimmed(),
        card.picture.dimmed()
    )
}

/// Format a whole gallery view.
///
/// An empty view prints a notice naming the search term instead of nothing.
pub fn format_gallery(view: &[&Person], search_term: &str) -> String {
    format_cards(&gallery_cards(view), search_term)
}

/// Format already-built cards, or the empty-gallery notice.
pub fn format_cards(cards: &[CardView], search_term: &str) -> String {
    if cards.is_empty() {
        return if search_term.trim().is_empty() {
            "No people to show".dimmed().to_string()
        } else {
            format!("No people match '{}'", search_term)
                .dimmed()
                .to_string()
        };
    }

    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format the detail view for one person
pub fn format_detail(detail: &DetailView) -> String {
    let mut output = format!("{}", detail.name.bold());
    output.push_str(&format!("\n{}", detail.email));
    output.push_str(&format!("\n{}", detail.city));
    output.push_str(&format!("\n{}", "-".repeat(32).dimmed()));
    output.push_str(&format!("\n{}", detail.phone));
    output.push_str(&format!("\n{}", detail.address));
    output.push_str(&format!("\nBirthday: {}", detail.birthday));
    output.push_str(&format!("\n{}", detail.picture.dimmed()));
    output
}

/// The banner shown instead of a gallery when fetching failed.
pub fn format_degraded() -> String {
    DEGRADED_MESSAGE.red().bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gallery_lists_every_card() {
        let people = vec![Person::named("Ann", "Lee"), Person::named("Bo", "Yu")];
        let view: Vec<&Person> = people.iter().collect();
        let output = format_gallery(&view, "");
        assert!(output.contains("Ann Lee"));
        assert!(output.contains("bo.yu@example.com"));
        assert!(output.contains("[2]"));
    }

    #[test]
    fn test_format_gallery_empty_with_term() {
        let output = format_gallery(&[], "zed");
        assert!(output.contains("No people match 'zed'"));
    }

    #[test]
    fn test_format_gallery_empty_without_term() {
        assert!(format_gallery(&[], "  ").contains("No people to show"));
    }

    #[test]
    fn test_format_detail_contains_birthday_line() {
        let person = Person::named("Ann", "Lee");
        let output = format_detail(&DetailView::from(&person));
        assert!(output.contains("Ann Lee"));
        assert!(output.contains("Birthday: "));
    }

    #[test]
    fn test_format_degraded_contains_message() {
        assert!(format_degraded().contains(DEGRADED_MESSAGE));
    }
}

//! Interactive browsing session.
//!
//! The session owns the [`DirectoryStore`] and the open detail view. The
//! open person is tracked by email, and every prev/next step recomputes the
//! filtered view from the store's current search term.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::display::{CardView, DetailView, format_cards, format_detail, gallery_cards};
use crate::error::{Result, RosterError};
use crate::navigation;
use crate::person::Person;
use crate::store::DirectoryStore;

/// Which person an `open` command refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// 1-based card number in the current gallery
    Index(usize),
    Email(String),
    FullName(String),
}

/// One user action in the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Search(String),
    Open(Target),
    Next,
    Previous,
    Close,
    List,
    Help,
    Quit,
}

impl FromStr for BrowseAction {
    type Err = RosterError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line.trim_end(), ""),
        };

        match command {
            // The whole separator run is dropped; trailing spaces stay part of the term
            "search" | "/" => Ok(BrowseAction::Search(
                rest.trim_start().trim_end_matches(['\r', '\n']).to_string(),
            )),
            "open" | "o" => parse_target(rest.trim()).map(BrowseAction::Open),
            "next" | "n" => Ok(BrowseAction::Next),
            "prev" | "p" => Ok(BrowseAction::Previous),
            "close" | "c" => Ok(BrowseAction::Close),
            "list" | "ls" => Ok(BrowseAction::List),
            "help" | "?" => Ok(BrowseAction::Help),
            "quit" | "q" | "exit" => Ok(BrowseAction::Quit),
            _ => match command.parse::<usize>() {
                Ok(index) if rest.trim().is_empty() => {
                    Ok(BrowseAction::Open(Target::Index(index)))
                }
                _ => Err(RosterError::InvalidCommand(line.trim_end().to_string())),
            },
        }
    }
}

fn parse_target(arg: &str) -> Result<Target> {
    if arg.is_empty() {
        return Err(RosterError::InvalidCommand("open".to_string()));
    }
    if let Ok(index) = arg.parse::<usize>() {
        return Ok(Target::Index(index));
    }
    if arg.contains('@') {
        return Ok(Target::Email(arg.to_string()));
    }
    Ok(Target::FullName(arg.to_string()))
}

/// The open detail view, identified by the shown person's email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub email: String,
}

/// What the session shows after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Gallery {
        cards: Vec<CardView>,
        search_term: String,
    },
    Detail(DetailView),
    Closed,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  search, / <term>    filter the gallery by name (empty term clears)
  open, o <n|name>    show details for card n, a full name or an email
  <n>                 same as open <n>
  next, n             next person in the gallery
  prev, p             previous person in the gallery
  close, c            close the detail view
  list, ls            show the gallery again
  help, ?             show this list
  quit, q, exit       leave";

#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    store: DirectoryStore,
    modal: Option<Modal>,
}

impl BrowseSession {
    pub fn new(store: DirectoryStore) -> Self {
        Self { store, modal: None }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// The gallery for the active search term.
    pub fn gallery(&self) -> Screen {
        Screen::Gallery {
            cards: gallery_cards(&self.store.filtered()),
            search_term: self.store.search_term().to_string(),
        }
    }

    /// Apply one action and return what should be shown.
    pub fn apply(&mut self, action: BrowseAction) -> Result<Screen> {
        match action {
            BrowseAction::Search(term) => {
                self.store.set_search_term(term);
                Ok(self.gallery())
            }
            BrowseAction::Open(target) => {
                let person = self.resolve(&target)?.clone();
                Ok(self.show(person))
            }
            BrowseAction::Next => self.navigate(navigation::next),
            BrowseAction::Previous => self.navigate(navigation::previous),
            BrowseAction::Close => {
                self.modal = None;
                Ok(Screen::Closed)
            }
            BrowseAction::List => Ok(self.gallery()),
            BrowseAction::Help => Ok(Screen::Help),
            BrowseAction::Quit => Ok(Screen::Quit),
        }
    }

    fn resolve(&self, target: &Target) -> Result<&Person> {
        match target {
            Target::Index(index) => index
                .checked_sub(1)
                .and_then(|i| self.store.filtered().get(i).copied())
                .ok_or_else(|| RosterError::PersonNotFound(format!("#{}", index))),
            Target::Email(email) => self
                .store
                .find_by_email(email)
                .ok_or_else(|| RosterError::PersonNotFound(email.clone())),
            Target::FullName(name) => self
                .store
                .find_by_full_name(name)
                .ok_or_else(|| RosterError::PersonNotFound(name.clone())),
        }
    }

    fn show(&mut self, person: Person) -> Screen {
        self.modal = Some(Modal {
            email: person.email.clone(),
        });
        Screen::Detail(DetailView::from(&person))
    }

    fn navigate<F>(&mut self, step: F) -> Result<Screen>
    where
        F: for<'a> Fn(&[&'a Person], &Person) -> Result<&'a Person>,
    {
        let Some(modal) = &self.modal else {
            return Err(RosterError::NothingOpen);
        };

        let current = self
            .store
            .find_by_email(&modal.email)
            .ok_or_else(|| RosterError::PersonNotFound(modal.email.clone()))?;
        let view = self.store.filtered();
        let target = step(&view, current)?.clone();
        Ok(self.show(target))
    }
}

/// Render a screen as terminal text.
pub fn render(screen: &Screen) -> Option<String> {
    match screen {
        Screen::Gallery { cards, search_term } => Some(format_cards(cards, search_term)),
        Screen::Detail(detail) => Some(format_detail(detail)),
        Screen::Closed => Some("Closed".to_string()),
        Screen::Help => Some(HELP_TEXT.to_string()),
        Screen::Quit => None,
    }
}

/// Run the session over line-based input until `quit` or end of input.
///
/// Errors from single actions (unknown commands, lookup misses, navigating an
/// empty gallery) are printed and the session continues.
pub fn run<R: BufRead, W: Write>(
    session: &mut BrowseSession,
    input: R,
    out: &mut W,
) -> Result<()> {
    if let Some(text) = render(&session.gallery()) {
        writeln!(out, "{}", text)?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let screen = line
            .parse::<BrowseAction>()
            .and_then(|action| session.apply(action));

        match screen {
            Ok(Screen::Quit) => return Ok(()),
            Ok(screen) => {
                if let Some(text) = render(&screen) {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "browse action failed");
                writeln!(out, "{}", e)?;
            }
        }
        out.flush()?;
    }

    Ok(())
}

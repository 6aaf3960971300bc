use serde_json::json;

use super::{CommandOutput, Directory, degraded_output, load_directory};
use crate::config::Config;
use crate::display::{DetailView, format_detail};
use crate::error::{Result, RosterError};
use crate::navigation;
use crate::source::{PersonSource, RandomUserSource};

/// Options for `roster show`
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Full name (`"first last"`) or, with `by_email`, an email address
    pub who: String,
    pub by_email: bool,
    /// Search term defining the view that `step` navigates
    pub search: Option<String>,
    /// Navigation steps after opening: positive = next, negative = previous
    pub step: i64,
}

/// Build the detail output for the person named in `options`.
pub async fn show_output<S: PersonSource>(
    source: &S,
    config: &Config,
    options: &ShowOptions,
) -> Result<CommandOutput> {
    let mut store = match load_directory(source, config).await? {
        Directory::Ready(store) => store,
        Directory::Degraded(reason) => return Ok(degraded_output(&reason)),
    };

    if let Some(term) = &options.search {
        store.set_search_term(term.as_str());
    }

    let opened = if options.by_email {
        store.find_by_email(&options.who)
    } else {
        store.find_by_full_name(&options.who)
    }
    .ok_or_else(|| RosterError::PersonNotFound(options.who.clone()))?;

    let person = if options.step == 0 {
        opened
    } else {
        let view = store.filtered();
        navigation::step(&view, opened, options.step)?
    };

    let detail = DetailView::from(person);
    let text = format_detail(&detail);
    Ok(CommandOutput::new(json!({
        "search": store.search_term(),
        "person": detail,
    }))
    .with_text(text))
}

/// Fetch the directory and print one person's details
pub async fn cmd_show(config: &Config, options: &ShowOptions, output_json: bool) -> Result<()> {
    let source = RandomUserSource::from_config(config)?;
    show_output(&source, config, options)
        .await?
        .print(output_json)
}

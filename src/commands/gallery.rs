use serde_json::json;

use super::{CommandOutput, Directory, degraded_output, load_directory};
use crate::config::Config;
use crate::display::{format_gallery, gallery_cards};
use crate::error::Result;
use crate::source::{PersonSource, RandomUserSource};

/// Build the gallery output for `source`, filtered by `search`.
pub async fn gallery_output<S: PersonSource>(
    source: &S,
    config: &Config,
    search: Option<&str>,
) -> Result<CommandOutput> {
    let mut store = match load_directory(source, config).await? {
        Directory::Ready(store) => store,
        Directory::Degraded(reason) => return Ok(degraded_output(&reason)),
    };

    if let Some(term) = search {
        store.set_search_term(term);
    }

    let view = store.filtered();
    let cards = gallery_cards(&view);
    let text = format_gallery(&view, store.search_term());

    Ok(CommandOutput::new(json!({
        "search": store.search_term(),
        "total": store.len(),
        "cards": cards,
    }))
    .with_text(text))
}

/// Fetch the directory and print the card gallery
pub async fn cmd_gallery(config: &Config, search: Option<&str>, output_json: bool) -> Result<()> {
    let source = RandomUserSource::from_config(config)?;
    gallery_output(&source, config, search)
        .await?
        .print(output_json)
}

use std::io;

use super::{Directory, degraded_output, load_directory};
use crate::browse::{BrowseSession, run};
use crate::config::Config;
use crate::error::Result;
use crate::source::RandomUserSource;

/// Fetch the directory and start an interactive browsing session on stdin
pub async fn cmd_browse(config: &Config, search: Option<&str>) -> Result<()> {
    let source = RandomUserSource::from_config(config)?;
    let mut store = match load_directory(&source, config).await? {
        Directory::Ready(store) => store,
        Directory::Degraded(reason) => return degraded_output(&reason).print(false),
    };

    if let Some(term) = search {
        store.set_search_term(term);
    }

    let mut session = BrowseSession::new(store);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout)
}

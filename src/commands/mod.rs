mod browse;
mod config;
mod gallery;
mod show;

pub use browse::cmd_browse;
pub use config::cmd_config_show;
pub use gallery::{cmd_gallery, gallery_output};
pub use show::{ShowOptions, cmd_show, show_output};

use serde_json::{Value, json};

use crate::config::Config;
use crate::display::format_degraded;
use crate::error::Result;
use crate::source::{PersonSource, fetch_configured};
use crate::store::DirectoryStore;
use crate::types::DEGRADED_MESSAGE;

/// Output of a command in both JSON and text form.
///
/// Commands build one of these and print whichever form was requested.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Render the requested form. Without text, the JSON is used for both.
    pub fn render(&self, output_json: bool) -> Result<String> {
        match (&self.text, output_json) {
            (Some(text), false) => Ok(text.clone()),
            _ => Ok(serde_json::to_string_pretty(&self.json)?),
        }
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        println!("{}", self.render(output_json)?);
        Ok(())
    }
}

/// Result of the startup fetch.
pub enum Directory {
    Ready(DirectoryStore),
    /// The listing could not be fetched; the message is for logs and JSON output.
    Degraded(String),
}

/// Fetch the configured batch into a fresh store.
///
/// Fetch failures are not errors here: they become [`Directory::Degraded`]
/// so callers can show the degraded banner instead of aborting.
pub async fn load_directory<S: PersonSource>(source: &S, config: &Config) -> Result<Directory> {
    match fetch_configured(source, config).await {
        Ok(people) => {
            Ok(Directory::Ready(DirectoryStore::with_people(people)))
        }
        Err(e) if e.is_fetch_failure() => {
            tracing::warn!(error = %e, "people listing unavailable");
            Ok(Directory::Degraded(e.to_string()))
        }
        Err(e) => Err(e),
    }
}

/// The output shown in place of a gallery or detail view after a failed fetch.
pub fn degraded_output(reason: &str) -> CommandOutput {
    CommandOutput::new(json!({
        "error": DEGRADED_MESSAGE,
        "reason": reason,
    }))
    .with_text(format_degraded())
}


#[cfg(test)]
mod tests {
    use super::testing::StaticSource;
    use super::*;

    #[tokio::test]
    async fn test_load_directory_ready() {
        let config = Config::default();
        match load_directory(&StaticSource::abc(), &config).await.unwrap() {
            Directory::Ready(store) => assert_eq!(store.len(), 3),
            Directory::Degraded(reason) => panic!("unexpected degraded state: {reason}"),
        }
    }

    #[tokio::test]
    async fn test_load_directory_respects_batch_size() {
        let config = Config {
            results: 2,
            ..Config::default()
        };
        match load_directory(&StaticSource::abc(), &config).await.unwrap() {
            Directory::Ready(store) => assert_eq!(store.len(), 2),
            Directory::Degraded(reason) => panic!("unexpected degraded state: {reason}"),
        }
    }

    #[tokio::test]
    async fn test_load_directory_degraded() {
        let config = Config::default();
        match load_directory(&StaticSource::failing(), &config).await.unwrap() {
            Directory::Degraded(reason) => assert!(reason.contains("503")),
            Directory::Ready(_) => panic!("expected degraded state"),
        }
    }

    #[test]
    fn test_command_output_text_and_json() {
        let output = CommandOutput::new(json!({"name": "Ann"})).with_text("Ann");
        assert_eq!(output.render(false).unwrap(), "Ann");
        assert!(output.render(true).unwrap().contains("\"name\": \"Ann\""));
    }

    #[test]
    fn test_command_output_without_text_uses_json() {
        let output = CommandOutput::new(json!({"count": 1}));
        assert!(output.render(false).unwrap().contains("\"count\": 1"));
    }

    #[test]
    fn test_degraded_output() {
        let output = degraded_output("HTTP 500");
        assert!(output.render(false).unwrap().contains(DEGRADED_MESSAGE));
        let json = output.render(true).unwrap();
        assert!(json.contains("HTTP 500"));
    }
}

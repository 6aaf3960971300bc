use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to fetch people: {0}")]
    Fetch(String),

    #[error("person '{0}' not found")]
    PersonNotFound(String),

    #[error("no candidates to navigate")]
    EmptyNavigation,

    #[error("no person is open")]
    NothingOpen,

    #[error("unknown command '{0}' (type 'help' for a list)")]
    InvalidCommand(String),

    #[error("invalid URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RosterError {
    /// Whether this error should be shown as the degraded gallery state
    /// rather than aborting the command.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, RosterError::Fetch(_))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

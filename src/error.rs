// Error types for the sub-tab controller.
// Covers configuration errors, invariant violations, and host save failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubTabError {
    #[error("Sub-tab registry has no entry for '{0}'")]
    MissingSubTab(&'static str),

    #[error("Sub-tab '{0}' is registered more than once")]
    DuplicateSubTab(&'static str),

    #[error("Unknown sub-tab identifier: {0}")]
    UnknownSubTab(String),

    #[error("Default sub-tab '{0}' is not present in the registry")]
    DefaultNotRegistered(&'static str),

    #[error("Active sub-tab '{0}' does not resolve to a registered sub-tab")]
    UnregisteredSubTab(&'static str),

    #[error("Failed to save settings: {source}")]
    Save {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SubTabError {
    /// Wrap a host error raised while persisting settings.
    pub fn save(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SubTabError::Save {
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SubTabError>;

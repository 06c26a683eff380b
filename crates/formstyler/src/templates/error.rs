//! Template loading errors.

use thiserror::Error;

/// Error returned when template data cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The YAML document did not parse into a template list.
    #[error("invalid template data: {message}")]
    Parse { message: String },
    /// Two templates share a key.
    #[error("duplicate template key '{key}'")]
    DuplicateKey { key: String },
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        LoadError::Parse {
            message: err.to_string(),
        }
    }
}

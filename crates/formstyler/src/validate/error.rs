//! Validation errors.

use thiserror::Error;

/// Why a raw preset or one of its settings was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The preset has no title after sanitizing.
    #[error("preset has an empty title")]
    MissingTitle,
    /// The preset's class is empty or not a valid CSS class token.
    #[error("'{class}' is not a valid CSS class name")]
    InvalidClass { class: String },
    /// A settings key outside the recognized field table.
    #[error("unknown setting '{key}'")]
    UnknownField { key: String },
    /// A recognized setting whose value failed its field's constraints.
    #[error("invalid value {value} for setting '{key}'")]
    InvalidValue { key: String, value: String },
}

/// A rejection tied to the raw preset it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the raw preset in the input list.
    pub index: usize,
    pub error: ValidationError,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "preset #{}: {}", self.index, self.error)
    }
}

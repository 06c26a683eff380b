//! Compiler configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how the compiler renders CSS.
///
/// Deserializes from the `options:` section of a presets file; missing keys
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Append `!important` to every override rule so presets win over
    /// theme-level form styling.
    pub important: bool,
    /// Prepend the generation timestamp comment.
    pub header: bool,
    /// Name written into the header comment.
    pub generator: String,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            important: true,
            header: true,
            generator: "Form Styler".to_string(),
        }
    }
}

//! Compiler results.

use crate::fonts::FontRequest;
use crate::settings::Field;

/// Something the compiler left out of the stylesheet.
///
/// Skips never fail a compile; they are returned so the caller can report
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// The preset's class is not a valid CSS class; its whole block was
    /// dropped.
    Preset { index: usize, class: String },
    /// A stored value failed its field's check; only that rule was dropped.
    Field {
        class: String,
        field: Field,
        value: String,
    },
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::Preset { index, class } => {
                write!(f, "preset #{} with invalid class {:?}", index, class)
            }
            Skip::Field {
                class,
                field,
                value,
            } => write!(f, "'{}' = {:?} in .{}", field, value, class),
        }
    }
}

/// A compiled stylesheet and the fonts it needs.
///
/// Fully determined by the preset list (and the header timestamp); cache it
/// and recompile whenever any preset changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOutput {
    /// The CSS text, header comment included.
    pub css: String,
    /// Fonts used by the presets that were emitted.
    pub fonts: FontRequest,
    /// Presets and fields left out, in the order they were met.
    pub skipped: Vec<Skip>,
}

impl CompiledOutput {
    /// The CSS without the leading header comment.
    pub fn body(&self) -> &str {
        if self.css.starts_with("/*") {
            self.css
                .split_once("\n\n")
                .map(|(_, body)| body)
                .unwrap_or("")
        } else {
            &self.css
        }
    }
}

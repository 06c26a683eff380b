//! # Formstyler - scoped CSS for styled forms
//!
//! Formstyler turns named style presets into one stylesheet. Each preset binds
//! a set of form-styling settings (colors, borders, fonts, spacing) to a CSS
//! class; every rule the compiler emits is scoped to that class, so a form
//! wrapped in it is styled and nothing else on the page is touched.
//!
//! ## Core Concepts
//!
//! - [`Preset`]: A title and CSS class bound to a [`SettingsMap`]
//! - [`Validator`]: Turns raw, untrusted input into presets
//! - [`Compiler`]: Compiles presets into a [`CompiledOutput`]
//! - [`FontRequest`]: The web fonts a set of presets needs
//! - [`StylesheetCache`]: Keeps the last stylesheet until presets change
//!
//! ## Quick Start
//!
//! ```rust
//! use formstyler::{Compiler, RawPreset, Validator};
//!
//! let raw = RawPreset::new("Newsletter", "lpfs-newsletter")
//!     .set("input_border_radius", 8)
//!     .set("button_bg_color", "#0073aa")
//!     .set("button_font_family", "Open Sans")
//!     .set("button_font_weight", "700");
//!
//! let report = Validator::new().validate(&[raw]);
//! let output = Compiler::new().compile(&report.presets);
//!
//! assert!(output.css.contains(".lpfs-newsletter button { background-color: #0073aa !important; }"));
//! assert_eq!(
//!     output.fonts.google_fonts_url().unwrap(),
//!     "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;500;600;700&display=swap"
//! );
//! ```
//!
//! ## Safety
//!
//! Every user-controlled value is checked or escaped right before it is
//! written (see [`escape_class_name`], [`escape_font_family`] and
//! [`is_valid_color`]). A preset whose class is not a valid CSS class is
//! dropped whole rather than emitted unscoped, and a stored value that fails
//! its field's check is dropped alone. Both are listed in
//! [`CompiledOutput::skipped`].

pub mod cache;
pub mod compiler;
pub mod escape;
pub mod fonts;
pub mod settings;
pub mod templates;
pub mod validate;

pub use cache::StylesheetCache;
pub use compiler::{compile, CompiledOutput, Compiler, CompilerOptions, Skip};
pub use escape::{escape_class_name, escape_font_family, is_valid_color};
pub use fonts::{resolve, FontRequest, FontWeight, KNOWN_FONTS};
pub use settings::{
    Color, Field, FieldKind, FontName, Length, LineHeight, Preset, SettingsMap, Target, Weight,
};
pub use templates::{builtin_templates, find_template, LoadError, StyleTemplate};
pub use validate::{RawPreset, Rejection, Report, ValidationError, Validator};

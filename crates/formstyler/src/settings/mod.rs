//! Settings data model.
//!
//! - [`Preset`]: a title and CSS class bound to a [`SettingsMap`]
//! - [`SettingsMap`]: one optional, typed field per recognized key
//! - [`Field`]: the closed field table (key, kind, target, CSS property)
//! - [`Length`], [`Color`], [`Weight`], [`LineHeight`], [`FontName`]: value
//!   wrappers

mod field;
mod map;
mod preset;
mod value;

pub use field::{Field, FieldKind, Target};
pub use map::SettingsMap;
pub use preset::Preset;
pub use value::{Color, FontName, Length, LineHeight, Weight};

pub(crate) use value::{is_ascii_digits, is_plain_decimal};

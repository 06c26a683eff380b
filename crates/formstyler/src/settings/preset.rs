//! Named presets binding settings to a CSS class.

use serde::{Deserialize, Serialize};

use super::map::SettingsMap;

/// A named, reusable bundle of form-styling settings bound to a CSS class.
///
/// The class must be a valid CSS class token; presets whose class is not are
/// skipped by the compiler. Class uniqueness across presets is up to the
/// caller.
///
/// # Example
///
/// ```rust
/// use formstyler::{Field, Preset, SettingsMap};
///
/// let preset = Preset::new("Newsletter", "lpfs-newsletter")
///     .with_settings(SettingsMap::new().with(Field::ButtonBgColor, "#0073aa"));
///
/// assert_eq!(preset.css_class, "lpfs-newsletter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preset {
    pub title: String,
    #[serde(alias = "custom_class")]
    pub css_class: String,
    #[serde(default)]
    pub settings: SettingsMap,
}

impl Preset {
    /// Creates a preset with no settings.
    pub fn new(title: impl Into<String>, css_class: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            css_class: css_class.into(),
            settings: SettingsMap::new(),
        }
    }

    /// Replaces the settings, returning the updated preset for chaining.
    pub fn with_settings(mut self, settings: SettingsMap) -> Self {
        self.settings = settings;
        self
    }
}

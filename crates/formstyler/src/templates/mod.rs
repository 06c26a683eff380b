//! Predesigned style templates.
//!
//! Templates are ready-made settings bundles an operator can start a preset
//! from. The built-in set is embedded at compile time from `templates.yaml`;
//! [`load_templates`] parses any document of the same shape.
//!
//! Template settings are raw: they pass through the [`Validator`] when a
//! template is instantiated, like any other submitted preset.

mod error;

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::settings::Preset;
use crate::validate::{RawPreset, ValidationError, Validator};

pub use error::LoadError;

static BUILTIN: Lazy<Result<Vec<StyleTemplate>, LoadError>> =
    Lazy::new(|| load_templates(include_str!("templates.yaml")));

/// A named settings bundle to start a preset from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTemplate {
    /// Stable identifier, e.g. `modern_minimal`.
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub settings: BTreeMap<String, Value>,
}

impl StyleTemplate {
    /// The template as an unvalidated preset bound to `css_class`.
    pub fn raw_preset(&self, css_class: &str) -> RawPreset {
        RawPreset {
            title: self.name.clone(),
            css_class: css_class.to_string(),
            settings: self.settings.clone(),
        }
    }

    /// Validates the template into a preset bound to `css_class`.
    ///
    /// Returns the preset together with any settings the validator dropped.
    pub fn instantiate(
        &self,
        css_class: &str,
    ) -> Result<(Preset, Vec<ValidationError>), ValidationError> {
        Validator::new().validate_preset(&self.raw_preset(css_class))
    }
}

/// Parses a YAML list of templates.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed YAML and
/// [`LoadError::DuplicateKey`] when two templates share a key.
pub fn load_templates(yaml: &str) -> Result<Vec<StyleTemplate>, LoadError> {
    let templates: Vec<StyleTemplate> = serde_yaml::from_str(yaml)?;

    let mut seen = HashSet::new();
    for template in &templates {
        if !seen.insert(template.key.as_str()) {
            return Err(LoadError::DuplicateKey {
                key: template.key.clone(),
            });
        }
    }

    Ok(templates)
}

/// The templates shipped with the crate.
pub fn builtin_templates() -> Result<&'static [StyleTemplate], LoadError> {
    BUILTIN.as_deref().map_err(Clone::clone)
}

/// Looks up a built-in template by key.
pub fn find_template(key: &str) -> Option<&'static StyleTemplate> {
    builtin_templates()
        .ok()?
        .iter()
        .find(|template| template.key == key)
}

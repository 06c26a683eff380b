//! Raw input to sanitized presets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{Rejection, ValidationError};
use crate::escape::{escape_class_name, normalize_color};
use crate::fonts::FontWeight;
use crate::settings::{Field, FieldKind, FontName, LineHeight, Preset, SettingsMap};

/// A preset as submitted by an editor or read from an import file.
///
/// Settings are an untyped key/value map; nothing here has been checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPreset {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "custom_class")]
    pub css_class: String,
    #[serde(default)]
    pub settings: BTreeMap<String, Value>,
}

impl RawPreset {
    pub fn new(title: impl Into<String>, css_class: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            css_class: css_class.into(),
            settings: BTreeMap::new(),
        }
    }

    /// Sets a raw setting, returning the updated preset for chaining.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(key.to_string(), value.into());
        self
    }
}

/// Outcome of validating a list of raw presets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Presets that passed, in input order.
    pub presets: Vec<Preset>,
    /// Every dropped preset and dropped setting.
    pub rejections: Vec<Rejection>,
}

impl Report {
    /// True when nothing was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// Converts raw presets into the typed [`Preset`]s the compiler trusts.
///
/// Numeric fields are clamped to their range, colors are normalized, and
/// weights, line heights and font families are checked against their
/// allow-lists. A setting that fails is dropped and reported; a preset with
/// no title or an unusable class is dropped entirely.
///
/// # Example
///
/// ```rust
/// use formstyler::{Field, RawPreset, Validator};
///
/// let raw = RawPreset::new("Contact", "contact-form")
///     .set("input_border_radius", 250)
///     .set("label_color", "javascript:alert(1)");
///
/// let report = Validator::new().validate(&[raw]);
/// let settings = &report.presets[0].settings;
///
/// assert_eq!(settings.get(Field::InputBorderRadius), Some("100"));
/// assert_eq!(settings.get(Field::LabelColor), None);
/// assert_eq!(report.rejections.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validates every raw preset, collecting passes and rejections.
    pub fn validate(&self, raws: &[RawPreset]) -> Report {
        let mut report = Report::default();

        for (index, raw) in raws.iter().enumerate() {
            match self.validate_preset(raw) {
                Ok((preset, errors)) => {
                    report.presets.push(preset);
                    report
                        .rejections
                        .extend(errors.into_iter().map(|error| Rejection { index, error }));
                }
                Err(error) => report.rejections.push(Rejection { index, error }),
            }
        }

        for rejection in &report.rejections {
            log::warn!("rejected {}", rejection);
        }
        report
    }

    /// Validates one raw preset.
    ///
    /// Returns the sanitized preset and the setting-level errors, or the
    /// preset-level error that caused it to be dropped.
    pub fn validate_preset(
        &self,
        raw: &RawPreset,
    ) -> Result<(Preset, Vec<ValidationError>), ValidationError> {
        let title = sanitize_title(&raw.title);
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let class = sanitize_class(&raw.css_class);
        if escape_class_name(&class).is_none() {
            return Err(ValidationError::InvalidClass {
                class: raw.css_class.clone(),
            });
        }

        let (settings, errors) = self.validate_settings(&raw.settings);
        let preset = Preset::new(title, class).with_settings(settings);
        Ok((preset, errors))
    }

    /// Validates a raw settings map.
    pub fn validate_settings(
        &self,
        raw: &BTreeMap<String, Value>,
    ) -> (SettingsMap, Vec<ValidationError>) {
        let mut settings = SettingsMap::new();
        let mut errors = Vec::new();

        for (key, value) in raw {
            let Some(field) = Field::from_key(key) else {
                errors.push(ValidationError::UnknownField { key: key.clone() });
                continue;
            };
            match sanitize_field(field, value) {
                Ok(Some(clean)) => settings.set(field, clean),
                Ok(None) => {}
                Err(err) => errors.push(err),
            }
        }

        (settings, errors)
    }
}

/// Sanitizes one value for `field`.
///
/// `Ok(None)` means the value is blank and the field stays unset.
pub(crate) fn sanitize_field(field: Field, value: &Value) -> Result<Option<String>, ValidationError> {
    if value.is_null() || value.as_str().is_some_and(|s| s.trim().is_empty()) {
        return match field.kind() {
            // An explicitly empty family means "inherit".
            FieldKind::FontFamily if !value.is_null() => Ok(Some(String::new())),
            _ => Ok(None),
        };
    }

    let invalid = || ValidationError::InvalidValue {
        key: field.key().to_string(),
        value: value.to_string(),
    };

    let clean = match field.kind() {
        FieldKind::Length => {
            let (min, max) = field.range().unwrap_or((0, i64::MAX));
            let n = as_number(value).ok_or_else(invalid)?;
            // Fractions truncate toward zero before clamping.
            (n.trunc() as i64).clamp(min, max).to_string()
        }
        FieldKind::Color => value.as_str().and_then(normalize_color).ok_or_else(invalid)?,
        FieldKind::Weight => {
            let text = match value {
                Value::Number(n) => n.to_string(),
                Value::String(s) => s.clone(),
                _ => return Err(invalid()),
            };
            FontWeight::parse(&text).ok_or_else(invalid)?.as_str().to_string()
        }
        FieldKind::LineHeight => {
            let n = as_number(value).ok_or_else(invalid)?;
            LineHeight::new(n).ok_or_else(invalid)?.as_str().to_string()
        }
        FieldKind::FontFamily => {
            let name = value.as_str().and_then(FontName::parse).ok_or_else(invalid)?;
            name.as_str().to_string()
        }
    };

    Ok(Some(clean))
}

fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn sanitize_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps only characters allowed in a class token.
fn sanitize_class(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

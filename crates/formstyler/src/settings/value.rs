//! Typed wrappers for settings values.
//!
//! Each wrapper holds the value's CSS text. Values built through the
//! constructors here (or through [`Validator`](crate::Validator)) are always
//! valid; values deserialized from storage are taken as-is and re-checked by
//! the compiler before they reach a stylesheet.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::escape::normalize_color;
use crate::fonts::{is_known_font, FontWeight};

/// Accepts a JSON/YAML number or string and keeps its textual form.
fn deserialize_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Text(s) => s,
    })
}

/// A whole number of pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Length(pub(crate) String);

impl Length {
    pub fn px(value: u32) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value, if the stored text is a plain digit sequence.
    pub fn value(&self) -> Option<u32> {
        if is_ascii_digits(&self.0) {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(n) => serializer.serialize_u32(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_scalar(deserializer).map(Self)
    }
}

/// A CSS color in one of the accepted forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub(crate) String);

impl Color {
    /// Parses and normalizes a color.
    ///
    /// `rgb()`/`rgba()` are rewritten with canonical spacing and keywords are
    /// lowercased; hex values are kept as written.
    ///
    /// ```rust
    /// use formstyler::Color;
    ///
    /// assert_eq!(Color::parse("rgb(0,0,0)").unwrap().as_str(), "rgb(0, 0, 0)");
    /// assert_eq!(Color::parse("#FFF").unwrap().as_str(), "#FFF");
    /// assert!(Color::parse("red; } body {").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_color(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A font weight as stored in a settings map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Weight(pub(crate) String);

impl Weight {
    pub fn new(weight: FontWeight) -> Self {
        Self(weight.as_str().to_string())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        FontWeight::parse(raw).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The weight, if the stored text is one of the nine numeric weights.
    pub fn font_weight(&self) -> Option<FontWeight> {
        FontWeight::parse(&self.0)
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_scalar(deserializer).map(Self)
    }
}

/// A unitless line height.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineHeight(pub(crate) String);

impl LineHeight {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 3.0;

    /// Builds a line height, rejecting values outside `[0.5, 3.0]`.
    pub fn new(value: f64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the stored text is a plain decimal (`1`, `1.5`).
    pub fn is_plain_decimal(&self) -> bool {
        is_plain_decimal(&self.0)
    }
}

impl Serialize for LineHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<f64>() {
            Ok(n) if self.is_plain_decimal() => serializer.serialize_f64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for LineHeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_scalar(deserializer).map(Self)
    }
}

/// A font family name. Empty means "inherit".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontName(pub(crate) String);

impl FontName {
    /// The inherited (empty) font family.
    pub fn inherit() -> Self {
        Self::default()
    }

    /// Accepts an empty name or a member of the known-fonts allow-list.
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() || is_known_font(name) {
            Some(Self(name.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

pub(crate) fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn is_plain_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((int, frac)) => is_ascii_digits(int) && is_ascii_digits(frac),
        None => is_ascii_digits(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_deserializes_numbers_and_strings() {
        let n: Length = serde_json::from_str("8").unwrap();
        let s: Length = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(n.value(), Some(8));
        assert_eq!(s.value(), Some(12));
    }

    #[test]
    fn test_length_keeps_corrupt_text() {
        let bad: Length = serde_json::from_str("\"8px; color: red\"").unwrap();
        assert_eq!(bad.value(), None);
        assert_eq!(bad.as_str(), "8px; color: red");

        let negative: Length = serde_json::from_str("-3").unwrap();
        assert_eq!(negative.value(), None);
    }

    #[test]
    fn test_length_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Length::px(8)).unwrap(), "8");
    }

    #[test]
    fn test_weight_from_number() {
        let w: Weight = serde_yaml::from_str("700").unwrap();
        assert_eq!(w.font_weight(), Some(FontWeight::Bold));
        assert!(Weight::parse("bold").is_none());
    }

    #[test]
    fn test_line_height_bounds() {
        assert_eq!(LineHeight::new(1.5).unwrap().as_str(), "1.5");
        assert_eq!(LineHeight::new(2.0).unwrap().as_str(), "2");
        assert!(LineHeight::new(0.4).is_none());
        assert!(LineHeight::new(3.01).is_none());
    }

    #[test]
    fn test_line_height_plain_decimal() {
        let ok: LineHeight = serde_json::from_str("1.4").unwrap();
        assert!(ok.is_plain_decimal());
        let bad: LineHeight = serde_json::from_str("\"1e3\"").unwrap();
        assert!(!bad.is_plain_decimal());
        let empty: LineHeight = serde_json::from_str("\"\"").unwrap();
        assert!(!empty.is_plain_decimal());
    }

    #[test]
    fn test_font_name_allow_list() {
        assert_eq!(FontName::parse("Open Sans").unwrap().as_str(), "Open Sans");
        assert!(FontName::parse("").unwrap().is_empty());
        assert!(FontName::parse("Comic Sans MS").is_none());
    }
}

//! The typed settings record attached to each preset.

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::value::{Color, FontName, Length, LineHeight, Weight};

/// Sanitized form-styling settings.
///
/// Every recognized key is an optional field; an absent field is "unset" and
/// produces no CSS. Unknown keys in stored data are ignored on
/// deserialization.
///
/// # Example
///
/// ```rust
/// use formstyler::{Field, SettingsMap};
///
/// let settings = SettingsMap::new()
///     .with(Field::InputBorderRadius, "8")
///     .with(Field::InputBorderColor, "#3498db")
///     // Rejected by validation and left unset
///     .with(Field::LabelColor, "red; }");
///
/// assert_eq!(settings.get(Field::InputBorderRadius), Some("8"));
/// assert_eq!(settings.get(Field::LabelColor), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_border_radius: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_border_width: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_bg_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_focus_border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_border_radius: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_hover_bg_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_hover_text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_hover_border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_font_size: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_font_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_line_height: Option<LineHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_font_family: Option<FontName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font_family: Option<FontName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_font_family: Option<FontName>,
}

impl SettingsMap {
    /// Creates an empty map with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `raw` for `field` and sets it, returning the updated map.
    ///
    /// Values that fail validation leave the field unchanged.
    pub fn with(mut self, field: Field, raw: &str) -> Self {
        let value = serde_json::Value::String(raw.to_string());
        match crate::validate::sanitize_field(field, &value) {
            Ok(Some(clean)) => self.set(field, clean),
            Ok(None) => {}
            Err(err) => log::warn!("{}", err),
        }
        self
    }

    /// The stored CSS text for `field`, if set.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::InputBorderRadius => self.input_border_radius.as_ref().map(Length::as_str),
            Field::InputBorderWidth => self.input_border_width.as_ref().map(Length::as_str),
            Field::InputBorderColor => self.input_border_color.as_ref().map(Color::as_str),
            Field::InputTextColor => self.input_text_color.as_ref().map(Color::as_str),
            Field::InputBgColor => self.input_bg_color.as_ref().map(Color::as_str),
            Field::InputFocusBorderColor => {
                self.input_focus_border_color.as_ref().map(Color::as_str)
            }
            Field::LabelColor => self.label_color.as_ref().map(Color::as_str),
            Field::ButtonBorderRadius => self.button_border_radius.as_ref().map(Length::as_str),
            Field::ButtonBgColor => self.button_bg_color.as_ref().map(Color::as_str),
            Field::ButtonBorderColor => self.button_border_color.as_ref().map(Color::as_str),
            Field::ButtonTextColor => self.button_text_color.as_ref().map(Color::as_str),
            Field::ButtonHoverBgColor => self.button_hover_bg_color.as_ref().map(Color::as_str),
            Field::ButtonHoverTextColor => {
                self.button_hover_text_color.as_ref().map(Color::as_str)
            }
            Field::ButtonHoverBorderColor => {
                self.button_hover_border_color.as_ref().map(Color::as_str)
            }
            Field::ButtonFontSize => self.button_font_size.as_ref().map(Length::as_str),
            Field::ButtonFontWeight => self.button_font_weight.as_ref().map(Weight::as_str),
            Field::ButtonLineHeight => self.button_line_height.as_ref().map(LineHeight::as_str),
            Field::InputFontFamily => self.input_font_family.as_ref().map(FontName::as_str),
            Field::LabelFontFamily => self.label_font_family.as_ref().map(FontName::as_str),
            Field::ButtonFontFamily => self.button_font_family.as_ref().map(FontName::as_str),
        }
    }

    /// Fields that are set, in emission order.
    pub fn present(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |field| self.get(*field).is_some())
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// Stores already-sanitized text under `field`.
    pub(crate) fn set(&mut self, field: Field, clean: String) {
        match field {
            Field::InputBorderRadius => self.input_border_radius = Some(Length(clean)),
            Field::InputBorderWidth => self.input_border_width = Some(Length(clean)),
            Field::InputBorderColor => self.input_border_color = Some(Color(clean)),
            Field::InputTextColor => self.input_text_color = Some(Color(clean)),
            Field::InputBgColor => self.input_bg_color = Some(Color(clean)),
            Field::InputFocusBorderColor => self.input_focus_border_color = Some(Color(clean)),
            Field::LabelColor => self.label_color = Some(Color(clean)),
            Field::ButtonBorderRadius => self.button_border_radius = Some(Length(clean)),
            Field::ButtonBgColor => self.button_bg_color = Some(Color(clean)),
            Field::ButtonBorderColor => self.button_border_color = Some(Color(clean)),
            Field::ButtonTextColor => self.button_text_color = Some(Color(clean)),
            Field::ButtonHoverBgColor => self.button_hover_bg_color = Some(Color(clean)),
            Field::ButtonHoverTextColor => self.button_hover_text_color = Some(Color(clean)),
            Field::ButtonHoverBorderColor => self.button_hover_border_color = Some(Color(clean)),
            Field::ButtonFontSize => self.button_font_size = Some(Length(clean)),
            Field::ButtonFontWeight => self.button_font_weight = Some(Weight(clean)),
            Field::ButtonLineHeight => self.button_line_height = Some(LineHeight(clean)),
            Field::InputFontFamily => self.input_font_family = Some(FontName(clean)),
            Field::LabelFontFamily => self.label_font_family = Some(FontName(clean)),
            Field::ButtonFontFamily => self.button_font_family = Some(FontName(clean)),
        }
    }
}

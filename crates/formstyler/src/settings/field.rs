//! The closed table of recognized settings fields.

/// How a field's value is typed and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Integer rendered with a `px` suffix.
    Length,
    /// Hex, `rgb()`/`rgba()`, or a color keyword.
    Color,
    /// One of the nine numeric font weights.
    Weight,
    /// Unitless decimal.
    LineHeight,
    /// Font family from the known-fonts allow-list.
    FontFamily,
}

/// The group of form elements an override rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Inputs,
    FocusedInputs,
    Labels,
    Buttons,
    HoveredButtons,
}

impl Target {
    /// Element selectors, relative to the preset scope.
    pub fn elements(self) -> &'static [&'static str] {
        match self {
            Target::Inputs => &["input", "textarea", "select"],
            Target::FocusedInputs => &["input:focus", "textarea:focus", "select:focus"],
            Target::Labels => &["label"],
            Target::Buttons => &["button"],
            Target::HoveredButtons => &["button:hover"],
        }
    }
}

/// A recognized settings field.
///
/// [`Field::ALL`] lists the fields in the order the compiler emits their
/// override rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    InputBorderRadius,
    InputBorderWidth,
    InputBorderColor,
    InputTextColor,
    InputBgColor,
    InputFocusBorderColor,
    LabelColor,
    ButtonBorderRadius,
    ButtonBgColor,
    ButtonBorderColor,
    ButtonTextColor,
    ButtonHoverBgColor,
    ButtonHoverTextColor,
    ButtonHoverBorderColor,
    ButtonFontSize,
    ButtonFontWeight,
    ButtonLineHeight,
    InputFontFamily,
    LabelFontFamily,
    ButtonFontFamily,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::InputBorderRadius,
        Field::InputBorderWidth,
        Field::InputBorderColor,
        Field::InputTextColor,
        Field::InputBgColor,
        Field::InputFocusBorderColor,
        Field::LabelColor,
        Field::ButtonBorderRadius,
        Field::ButtonBgColor,
        Field::ButtonBorderColor,
        Field::ButtonTextColor,
        Field::ButtonHoverBgColor,
        Field::ButtonHoverTextColor,
        Field::ButtonHoverBorderColor,
        Field::ButtonFontSize,
        Field::ButtonFontWeight,
        Field::ButtonLineHeight,
        Field::InputFontFamily,
        Field::LabelFontFamily,
        Field::ButtonFontFamily,
    ];

    /// The three font-family fields, in role order (input, label, button).
    pub const FONT_FAMILIES: [Field; 3] = [
        Field::InputFontFamily,
        Field::LabelFontFamily,
        Field::ButtonFontFamily,
    ];

    /// The settings key used in stored and imported maps.
    pub fn key(self) -> &'static str {
        match self {
            Field::InputBorderRadius => "input_border_radius",
            Field::InputBorderWidth => "input_border_width",
            Field::InputBorderColor => "input_border_color",
            Field::InputTextColor => "input_text_color",
            Field::InputBgColor => "input_bg_color",
            Field::InputFocusBorderColor => "input_focus_border_color",
            Field::LabelColor => "label_color",
            Field::ButtonBorderRadius => "button_border_radius",
            Field::ButtonBgColor => "button_bg_color",
            Field::ButtonBorderColor => "button_border_color",
            Field::ButtonTextColor => "button_text_color",
            Field::ButtonHoverBgColor => "button_hover_bg_color",
            Field::ButtonHoverTextColor => "button_hover_text_color",
            Field::ButtonHoverBorderColor => "button_hover_border_color",
            Field::ButtonFontSize => "button_font_size",
            Field::ButtonFontWeight => "button_font_weight",
            Field::ButtonLineHeight => "button_line_height",
            Field::InputFontFamily => "input_font_family",
            Field::LabelFontFamily => "label_font_family",
            Field::ButtonFontFamily => "button_font_family",
        }
    }

    /// Looks a field up by its settings key.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::InputBorderRadius
            | Field::InputBorderWidth
            | Field::ButtonBorderRadius
            | Field::ButtonFontSize => FieldKind::Length,
            Field::ButtonFontWeight => FieldKind::Weight,
            Field::ButtonLineHeight => FieldKind::LineHeight,
            Field::InputFontFamily | Field::LabelFontFamily | Field::ButtonFontFamily => {
                FieldKind::FontFamily
            }
            _ => FieldKind::Color,
        }
    }

    pub fn target(self) -> Target {
        match self {
            Field::InputBorderRadius
            | Field::InputBorderWidth
            | Field::InputBorderColor
            | Field::InputTextColor
            | Field::InputBgColor
            | Field::InputFontFamily => Target::Inputs,
            Field::InputFocusBorderColor => Target::FocusedInputs,
            Field::LabelColor | Field::LabelFontFamily => Target::Labels,
            Field::ButtonHoverBgColor
            | Field::ButtonHoverTextColor
            | Field::ButtonHoverBorderColor => Target::HoveredButtons,
            _ => Target::Buttons,
        }
    }

    /// The CSS property the override rule sets.
    pub fn property(self) -> &'static str {
        match self {
            Field::InputBorderRadius | Field::ButtonBorderRadius => "border-radius",
            Field::InputBorderWidth => "border-width",
            Field::InputBorderColor
            | Field::InputFocusBorderColor
            | Field::ButtonBorderColor
            | Field::ButtonHoverBorderColor => "border-color",
            Field::InputTextColor
            | Field::LabelColor
            | Field::ButtonTextColor
            | Field::ButtonHoverTextColor => "color",
            Field::InputBgColor | Field::ButtonBgColor | Field::ButtonHoverBgColor => {
                "background-color"
            }
            Field::ButtonFontSize => "font-size",
            Field::ButtonFontWeight => "font-weight",
            Field::ButtonLineHeight => "line-height",
            Field::InputFontFamily | Field::LabelFontFamily | Field::ButtonFontFamily => {
                "font-family"
            }
        }
    }

    /// Inclusive bounds for length fields; `None` for every other kind.
    pub fn range(self) -> Option<(i64, i64)> {
        match self {
            Field::InputBorderRadius | Field::ButtonBorderRadius => Some((0, 100)),
            Field::InputBorderWidth => Some((0, 20)),
            Field::ButtonFontSize => Some((8, 72)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("button_border_width"), None);
    }

    #[test]
    fn test_field_kind_counts() {
        let count = |kind| Field::ALL.iter().filter(|f| f.kind() == kind).count();
        assert_eq!(count(FieldKind::Color), 11);
        assert_eq!(count(FieldKind::Length), 4);
        assert_eq!(count(FieldKind::Weight), 1);
        assert_eq!(count(FieldKind::LineHeight), 1);
        assert_eq!(count(FieldKind::FontFamily), 3);
    }

    #[test]
    fn test_only_lengths_have_ranges() {
        for field in Field::ALL {
            assert_eq!(field.range().is_some(), field.kind() == FieldKind::Length);
        }
    }

    #[test]
    fn test_hover_and_focus_targets() {
        assert_eq!(Field::ButtonHoverBgColor.target(), Target::HoveredButtons);
        assert_eq!(Field::InputFocusBorderColor.target(), Target::FocusedInputs);
        assert_eq!(
            Target::FocusedInputs.elements(),
            &["input:focus", "textarea:focus", "select:focus"]
        );
    }
}

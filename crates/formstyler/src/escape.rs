//! Escaping and grammar checks for every value interpolated into CSS.
//!
//! The compiler only ever writes three kinds of user-controlled text into a
//! stylesheet: class names (in selectors), font families, and colors. Each
//! one passes through a function in this module first. Numeric values are
//! checked in place by the compiler.

use once_cell::sync::Lazy;
use regex::Regex;

/// Color keywords accepted in place of a color value.
pub const COLOR_KEYWORDS: &[&str] = &["transparent", "inherit", "initial", "unset", "currentcolor"];

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9A-Fa-f]{3}){1,2}$").expect("hex color pattern"));

static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^rgba?\([ \t]*([0-9]{1,3})[ \t]*,[ \t]*([0-9]{1,3})[ \t]*,[ \t]*([0-9]{1,3})[ \t]*(?:,[ \t]*([01](?:\.[0-9]+)?|\.[0-9]+))?[ \t]*\)$",
    )
    .expect("rgb color pattern")
});

/// Makes a font family name safe to interpolate into a declaration.
///
/// Quote characters are stripped, then every character other than ASCII
/// letters, digits, space and hyphen is removed and surrounding spaces are
/// trimmed, so `" Arial"` escapes to `Arial`. The result is wrapped in
/// double quotes when it contains a space or starts with a digit. Applying the
/// function to its own output returns the output unchanged.
///
/// ```rust
/// use formstyler::escape_font_family;
///
/// assert_eq!(escape_font_family("Open Sans"), "\"Open Sans\"");
/// assert_eq!(escape_font_family("Arial"), "Arial");
/// assert_eq!(escape_font_family("Evil\"; } body{x}"), "\"Evil  bodyx\"");
/// ```
pub fn escape_font_family(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let cleaned = cleaned.trim();

    let starts_with_digit = cleaned.starts_with(|c: char| c.is_ascii_digit());
    if cleaned.contains(' ') || starts_with_digit {
        format!("\"{}\"", cleaned)
    } else {
        cleaned.to_string()
    }
}

/// Returns the class name if it is a valid CSS class token.
///
/// A valid token is non-empty, made of ASCII letters, digits, hyphens and
/// underscores, and does not start with a digit.
///
/// ```rust
/// use formstyler::escape_class_name;
///
/// assert_eq!(escape_class_name("lpfs-test"), Some("lpfs-test"));
/// assert_eq!(escape_class_name("1bad"), None);
/// assert_eq!(escape_class_name("a b"), None);
/// ```
pub fn escape_class_name(class: &str) -> Option<&str> {
    let valid_chars = class
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    let first_ok = class
        .bytes()
        .next()
        .is_some_and(|b| !b.is_ascii_digit());

    (valid_chars && first_ok).then_some(class)
}

/// Parses a color and returns its normalized text.
///
/// Hex colors are returned as written; `rgb()`/`rgba()` are rebuilt as
/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; keywords are lowercased.
pub fn normalize_color(raw: &str) -> Option<String> {
    let color = raw.trim();

    if HEX_COLOR.is_match(color) {
        return Some(color.to_string());
    }

    if let Some(caps) = RGB_COLOR.captures(color) {
        let channel = |i: usize| -> Option<u8> { caps.get(i)?.as_str().parse().ok() };
        let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);

        return match caps.get(4).map(|m| m.as_str()).filter(|a| !a.is_empty()) {
            Some(alpha) => {
                let a: f64 = alpha.parse().ok()?;
                (0.0..=1.0)
                    .contains(&a)
                    .then(|| format!("rgba({}, {}, {}, {})", r, g, b, a))
            }
            None => Some(format!("rgb({}, {}, {})", r, g, b)),
        };
    }

    let keyword = color.to_ascii_lowercase();
    if COLOR_KEYWORDS.contains(&keyword.as_str()) {
        Some(keyword)
    } else {
        None
    }
}

/// True when `value` is a color in one of the accepted forms.
pub fn is_valid_color(value: &str) -> bool {
    normalize_color(value).is_some()
}

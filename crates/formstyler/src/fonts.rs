//! Web-font resolution.
//!
//! [`resolve`] scans presets for the font families they use and computes the
//! minimal set of (family, weight) pairs a page must load. The result renders
//! as a Google Fonts `css2` URL via [`FontRequest::google_fonts_url`].

use std::collections::{BTreeMap, BTreeSet};

use crate::settings::{Field, Preset};

/// Font families presets may use.
pub const KNOWN_FONTS: &[&str] = &[
    "Open Sans",
    "Roboto",
    "Lato",
    "Montserrat",
    "Oswald",
    "Source Sans Pro",
    "Raleway",
    "Poppins",
    "Nunito",
    "Ubuntu",
    "Playfair Display",
    "Merriweather",
    "Inter",
    "PT Sans",
    "Roboto Condensed",
    "Noto Sans",
    "Fira Sans",
    "Rubik",
    "Work Sans",
    "Crimson Text",
    "Libre Baskerville",
    "Roboto Slab",
    "Oxygen",
    "Titillium Web",
];

const GOOGLE_FONTS_CSS2: &str = "https://fonts.googleapis.com/css2";

/// True when `name` is on the known-fonts allow-list.
pub fn is_known_font(name: &str) -> bool {
    KNOWN_FONTS.contains(&name)
}

/// One of the nine numeric CSS font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub const ALL: [FontWeight; 9] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
    ];

    /// Parses `"100"` through `"900"`. Anything else is not requestable.
    pub fn parse(raw: &str) -> Option<FontWeight> {
        FontWeight::ALL
            .into_iter()
            .find(|weight| weight.as_str() == raw.trim())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Thin => "100",
            FontWeight::ExtraLight => "200",
            FontWeight::Light => "300",
            FontWeight::Normal => "400",
            FontWeight::Medium => "500",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "700",
            FontWeight::ExtraBold => "800",
            FontWeight::Black => "900",
        }
    }

    /// Human-readable name, as shown in weight pickers.
    pub fn label(self) -> &'static str {
        match self {
            FontWeight::Thin => "Thin",
            FontWeight::ExtraLight => "Extra Light",
            FontWeight::Light => "Light",
            FontWeight::Normal => "Normal",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "Semi Bold",
            FontWeight::Bold => "Bold",
            FontWeight::ExtraBold => "Extra Bold",
            FontWeight::Black => "Black",
        }
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The font families and weights a set of presets needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontRequest {
    families: BTreeMap<String, BTreeSet<FontWeight>>,
}

impl FontRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds weights for a family, merging with any already requested.
    pub fn add(&mut self, family: &str, weights: impl IntoIterator<Item = FontWeight>) {
        self.families
            .entry(family.to_string())
            .or_default()
            .extend(weights);
    }

    /// Weights requested for `family`.
    pub fn weights(&self, family: &str) -> Option<&BTreeSet<FontWeight>> {
        self.families.get(family)
    }

    /// Requested families, sorted by name.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Every (family, weight) pair, sorted by family then weight.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, FontWeight)> {
        self.families
            .iter()
            .flat_map(|(family, weights)| weights.iter().map(move |w| (family.as_str(), *w)))
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Renders the request as a Google Fonts `css2` URL.
    ///
    /// Returns `None` when nothing needs loading.
    ///
    /// ```rust
    /// use formstyler::{FontRequest, FontWeight};
    ///
    /// let mut request = FontRequest::new();
    /// request.add("Open Sans", [FontWeight::Normal, FontWeight::Medium]);
    ///
    /// assert_eq!(
    ///     request.google_fonts_url().unwrap(),
    ///     "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;500&display=swap"
    /// );
    /// ```
    pub fn google_fonts_url(&self) -> Option<String> {
        let families: Vec<String> = self
            .families
            .iter()
            .filter(|(_, weights)| !weights.is_empty())
            .map(|(family, weights)| {
                let weights: Vec<&str> = weights.iter().map(|w| w.as_str()).collect();
                format!("{}:wght@{}", family.replace(' ', "+"), weights.join(";"))
            })
            .collect();

        if families.is_empty() {
            return None;
        }

        Some(format!(
            "{}?family={}&display=swap",
            GOOGLE_FONTS_CSS2,
            families.join("&family=")
        ))
    }
}

/// Computes the fonts needed to render `presets`.
///
/// Every non-empty family gets weights 400 and 500. A family used for buttons
/// also gets 600, 700 and the preset's button weight, when that weight is one
/// of the nine numeric weights. Families are merged across presets.
///
/// Family names outside `[A-Za-z0-9 -]` are not requestable and are dropped.
pub fn resolve(presets: &[Preset]) -> FontRequest {
    let mut request = FontRequest::new();
    for preset in presets {
        add_preset_fonts(&mut request, preset);
    }
    request
}

pub(crate) fn add_preset_fonts(request: &mut FontRequest, preset: &Preset) {
    let settings = &preset.settings;

    for field in Field::FONT_FAMILIES {
        let family = match settings.get(field).map(str::trim) {
            Some(family) if is_requestable(family) => family,
            _ => continue,
        };

        request.add(family, [FontWeight::Normal, FontWeight::Medium]);

        if field == Field::ButtonFontFamily {
            request.add(family, [FontWeight::SemiBold, FontWeight::Bold]);
            let button_weight = settings
                .button_font_weight
                .as_ref()
                .and_then(|weight| weight.font_weight());
            request.add(family, button_weight);
        }
    }
}

fn is_requestable(family: &str) -> bool {
    !family.is_empty()
        && family
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
}

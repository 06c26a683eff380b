//! The settings-to-CSS compiler.

use chrono::{Local, NaiveDateTime};

use super::base::{scoped_selector, write_base_rules};
use super::options::CompilerOptions;
use super::output::{CompiledOutput, Skip};
use crate::escape::{escape_class_name, escape_font_family, is_valid_color};
use crate::fonts::{add_preset_fonts, FontRequest, FontWeight};
use crate::settings::{is_ascii_digits, is_plain_decimal, Field, FieldKind, Preset, SettingsMap};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compiles presets into one scoped stylesheet.
///
/// Each preset becomes a block of rules whose selectors all start with
/// `.{css_class}`: first the fixed base rules, then one override rule per set
/// field. A preset whose class is not a valid CSS class is skipped whole, and
/// a stored value that fails its field's check is skipped alone. Compiling
/// never fails.
///
/// The compiler holds no state besides its options, so one instance can be
/// shared across threads.
///
/// # Example
///
/// ```rust
/// use formstyler::{Compiler, Field, Preset, SettingsMap};
///
/// let preset = Preset::new("Test", "lpfs-test").with_settings(
///     SettingsMap::new()
///         .with(Field::InputBorderRadius, "8")
///         .with(Field::InputBorderColor, "#3498db"),
/// );
///
/// let output = Compiler::new().compile(&[preset]);
/// assert!(output.css.contains(
///     ".lpfs-test input, .lpfs-test textarea, .lpfs-test select \
///      { border-radius: 8px !important; }"
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    /// Creates a compiler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompilerOptions) -> Self {
        Self { options }
    }

    /// Sets whether override rules carry `!important`.
    pub fn important(mut self, important: bool) -> Self {
        self.options.important = important;
        self
    }

    /// Sets whether the timestamp header comment is written.
    pub fn header(mut self, header: bool) -> Self {
        self.options.header = header;
        self
    }

    /// Sets the generator name shown in the header comment.
    pub fn generator(mut self, name: impl Into<String>) -> Self {
        self.options.generator = name.into();
        self
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compiles `presets`, stamping the header with the current local time.
    pub fn compile(&self, presets: &[Preset]) -> CompiledOutput {
        self.compile_at(presets, Local::now().naive_local())
    }

    /// Compiles `presets` with an explicit header timestamp.
    pub fn compile_at(&self, presets: &[Preset], generated_at: NaiveDateTime) -> CompiledOutput {
        let mut skipped = Vec::new();
        let mut fonts = FontRequest::new();
        let mut blocks = Vec::with_capacity(presets.len());

        for (index, preset) in presets.iter().enumerate() {
            let Some(class) = escape_class_name(&preset.css_class) else {
                skipped.push(Skip::Preset {
                    index,
                    class: preset.css_class.clone(),
                });
                continue;
            };
            blocks.push(self.compile_block(class, &preset.settings, &mut skipped));
            add_preset_fonts(&mut fonts, preset);
        }

        let mut css = String::new();
        if self.options.header {
            css.push_str(&format!(
                "/* Generated by {} on {} */\n\n",
                comment_safe(&self.options.generator),
                generated_at.format(TIMESTAMP_FORMAT)
            ));
        }
        css.push_str(&blocks.join("\n"));

        for skip in &skipped {
            log::debug!("skipped {}", skip);
        }
        log::debug!(
            "compiled {} of {} presets into {} bytes",
            blocks.len(),
            presets.len(),
            css.len()
        );

        CompiledOutput {
            css,
            fonts,
            skipped,
        }
    }

    fn compile_block(&self, class: &str, settings: &SettingsMap, skipped: &mut Vec<Skip>) -> String {
        let mut block = String::new();
        write_base_rules(&mut block, class);

        let important = if self.options.important {
            " !important"
        } else {
            ""
        };

        for field in settings.present() {
            let raw = settings.get(field).unwrap_or_default();
            let Some(value) = declaration_value(field, raw) else {
                skipped.push(Skip::Field {
                    class: class.to_string(),
                    field,
                    value: raw.to_string(),
                });
                continue;
            };
            block.push_str(&format!(
                "{} {{ {}: {}{}; }}\n",
                scoped_selector(class, field.target().elements()),
                field.property(),
                value,
                important
            ));
        }

        block
    }
}

/// Compiles `presets` with default options.
pub fn compile(presets: &[Preset]) -> CompiledOutput {
    Compiler::new().compile(presets)
}

/// Renders a stored value as a declaration value, or `None` if it fails the
/// field's check.
fn declaration_value(field: Field, raw: &str) -> Option<String> {
    match field.kind() {
        FieldKind::Length => is_ascii_digits(raw).then(|| format!("{}px", raw)),
        FieldKind::Color => is_valid_color(raw).then(|| raw.trim().to_string()),
        FieldKind::Weight => FontWeight::parse(raw).map(|w| w.as_str().to_string()),
        FieldKind::LineHeight => is_plain_decimal(raw).then(|| raw.to_string()),
        FieldKind::FontFamily => {
            let family = escape_font_family(raw);
            if family.is_empty() {
                Some("inherit".to_string())
            } else {
                Some(format!("{}, sans-serif", family))
            }
        }
    }
}

fn comment_safe(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::base::BASE_RULE_COUNT;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn stored(json: &str) -> SettingsMap {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_header_line() {
        let output = Compiler::new().compile_at(&[], at());
        assert_eq!(
            output.css,
            "/* Generated by Form Styler on 2024-05-01 12:30:00 */\n\n"
        );
    }

    #[test]
    fn test_header_disabled() {
        let preset = Preset::new("a", "a");
        let output = Compiler::new().header(false).compile_at(&[preset], at());
        assert!(output.css.starts_with(".a label {"));
    }

    #[test]
    fn test_generator_cannot_close_comment() {
        let output = Compiler::new()
            .generator("x */ body { display:none } /*")
            .compile_at(&[], at());
        assert_eq!(output.css.matches("*/").count(), 1);
    }

    #[test]
    fn test_empty_settings_emit_only_base_rules() {
        let output = Compiler::new().compile_at(&[Preset::new("a", "a")], at());
        let mut expected = String::new();
        write_base_rules(&mut expected, "a");

        assert_eq!(output.body(), expected);
        assert!(output.skipped.is_empty());
    }

    #[test]
    fn test_override_rule_format() {
        let preset = Preset::new("t", "lpfs-test").with_settings(
            SettingsMap::new()
                .with(Field::InputBorderRadius, "8")
                .with(Field::InputBorderColor, "#3498db"),
        );
        let output = Compiler::new().compile_at(&[preset], at());

        assert!(output.css.contains(
            ".lpfs-test input, .lpfs-test textarea, .lpfs-test select { border-radius: 8px !important; }\n"
        ));
        assert!(output.css.contains(
            ".lpfs-test input, .lpfs-test textarea, .lpfs-test select { border-color: #3498db !important; }\n"
        ));
        assert_eq!(output.body().lines().count(), BASE_RULE_COUNT + 2);
    }

    #[test]
    fn test_without_important() {
        let preset = Preset::new("t", "t")
            .with_settings(SettingsMap::new().with(Field::LabelColor, "#000"));
        let output = Compiler::new().important(false).compile_at(&[preset], at());
        assert!(output.css.contains(".t label { color: #000; }\n"));
    }

    #[test]
    fn test_hover_and_focus_selectors() {
        let preset = Preset::new("t", "t").with_settings(
            SettingsMap::new()
                .with(Field::ButtonHoverBgColor, "#111")
                .with(Field::InputFocusBorderColor, "#222"),
        );
        let css = Compiler::new().compile_at(&[preset], at()).css;

        assert!(css.contains(".t button:hover { background-color: #111 !important; }"));
        assert!(css.contains(
            ".t input:focus, .t textarea:focus, .t select:focus { border-color: #222 !important; }"
        ));
    }

    #[test]
    fn test_weight_and_line_height_unitless() {
        let preset = Preset::new("t", "t").with_settings(
            SettingsMap::new()
                .with(Field::ButtonFontWeight, "600")
                .with(Field::ButtonLineHeight, "1.5")
                .with(Field::ButtonFontSize, "16"),
        );
        let css = Compiler::new().compile_at(&[preset], at()).css;

        assert!(css.contains(".t button { font-weight: 600 !important; }"));
        assert!(css.contains(".t button { line-height: 1.5 !important; }"));
        assert!(css.contains(".t button { font-size: 16px !important; }"));
    }

    #[test]
    fn test_font_family_escaped_with_fallback() {
        let preset = Preset::new("t", "t").with_settings(
            SettingsMap::new()
                .with(Field::LabelFontFamily, "Open Sans")
                .with(Field::ButtonFontFamily, "Inter"),
        );
        let css = Compiler::new().compile_at(&[preset], at()).css;

        assert!(css.contains(".t label { font-family: \"Open Sans\", sans-serif !important; }"));
        assert!(css.contains(".t button { font-family: Inter, sans-serif !important; }"));
    }

    #[test]
    fn test_empty_font_family_inherits() {
        let preset = Preset::new("t", "t")
            .with_settings(SettingsMap::new().with(Field::InputFontFamily, ""));
        let css = Compiler::new().compile_at(&[preset], at()).css;
        assert!(css.contains(
            ".t input, .t textarea, .t select { font-family: inherit !important; }"
        ));
    }

    #[test]
    fn test_corrupt_length_skipped() {
        let preset = Preset::new("t", "t").with_settings(stored(
            r#"{"input_border_radius": "8px; } body { display:none", "button_font_size": 14}"#,
        ));
        let output = Compiler::new().compile_at(&[preset], at());

        assert!(!output.css.contains("display:none"));
        assert!(output.css.contains(".t button { font-size: 14px !important; }"));
        assert_eq!(
            output.skipped,
            vec![Skip::Field {
                class: "t".to_string(),
                field: Field::InputBorderRadius,
                value: "8px; } body { display:none".to_string(),
            }]
        );
    }

    #[test]
    fn test_corrupt_color_weight_line_height_skipped() {
        let preset = Preset::new("t", "t").with_settings(stored(
            r#"{"label_color": "red;}", "button_font_weight": "bold", "button_line_height": "1.5em"}"#,
        ));
        let output = Compiler::new().compile_at(&[preset], at());

        assert_eq!(output.skipped.len(), 3);
        assert_eq!(output.body().lines().count(), BASE_RULE_COUNT);
    }

    #[test]
    fn test_corrupt_font_family_escaped() {
        let preset = Preset::new("t", "t").with_settings(stored(
            r#"{"label_font_family": "Evil\"; } body{display:none} .x{\""}"#,
        ));
        let css = Compiler::new().compile_at(&[preset], at()).css;
        assert!(css.contains(
            ".t label { font-family: \"Evil  bodydisplaynone x\", sans-serif !important; }"
        ));
    }

    #[test]
    fn test_invalid_class_skips_block() {
        let presets = [
            Preset::new("bad", "1bad")
                .with_settings(SettingsMap::new().with(Field::LabelColor, "#000")),
            Preset::new("good", "good")
                .with_settings(SettingsMap::new().with(Field::LabelColor, "#000")),
        ];
        let output = Compiler::new().compile_at(&presets, at());

        assert!(!output.css.contains("1bad"));
        assert!(output.css.contains(".good label { color: #000 !important; }"));
        assert_eq!(
            output.skipped,
            vec![Skip::Preset {
                index: 0,
                class: "1bad".to_string()
            }]
        );
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let presets = [Preset::new("a", "a"), Preset::new("b", "b")];
        let output = Compiler::new().header(false).compile_at(&presets, at());
        let blocks: Vec<&str> = output.css.split("\n\n").collect();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with(".a label"));
        assert!(blocks[1].starts_with(".b label"));
    }

    #[test]
    fn test_fonts_only_from_emitted_presets() {
        let presets = [
            Preset::new("bad", "1bad")
                .with_settings(SettingsMap::new().with(Field::LabelFontFamily, "Lato")),
            Preset::new("good", "good")
                .with_settings(SettingsMap::new().with(Field::LabelFontFamily, "Inter")),
        ];
        let output = Compiler::new().compile_at(&presets, at());
        assert_eq!(output.fonts.families().collect::<Vec<_>>(), vec!["Inter"]);
    }

    #[test]
    fn test_stored_alpha_with_trailing_dot_skipped() {
        let settings =
            stored(r#"{"button_bg_color": "rgba(0,0,0,1.)", "label_color": "rgba(0,0,0,.5)"}"#);
        let preset = Preset::new("t", "t").with_settings(settings);
        let output = Compiler::new().compile_at(&[preset], at());

        assert!(!output.css.contains("1.)"));
        assert!(output.css.contains(".t label { color: rgba(0,0,0,.5) !important; }"));
        assert_eq!(
            output.skipped,
            vec![Skip::Field {
                class: "t".to_string(),
                field: Field::ButtonBgColor,
                value: "rgba(0,0,0,1.)".to_string(),
            }]
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let presets = [Preset::new("a", "a").with_settings(
            SettingsMap::new()
                .with(Field::ButtonBgColor, "rgba(0, 0, 0, 0.5)")
                .with(Field::ButtonFontFamily, "Roboto Slab"),
        )];
        let first = compile(&presets);
        let second = compile(&presets);
        assert_eq!(first.body(), second.body());
        assert_eq!(first.fonts, second.fonts);
    }
}

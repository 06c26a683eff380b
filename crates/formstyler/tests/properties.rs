//! End-to-end behavior of validate -> compile -> resolve.

use chrono::NaiveDate;
use formstyler::{
    resolve, Compiler, Field, FontWeight, Preset, RawPreset, SettingsMap, Validator,
};

#[test]
fn test_presets_without_settings_emit_base_rules_only() {
    let compiler = Compiler::new().header(false);
    let bare = compiler.compile(&[Preset::new("a", "scope")]);
    let rules: Vec<&str> = bare.css.lines().collect();

    assert!(rules.iter().all(|rule| rule.starts_with(".scope ")));
    assert!(!bare.css.contains(": ")); // overrides are written as "property: value"
}

#[test]
fn test_color_forms_pass_through_unchanged() {
    for color in [
        "#abc",
        "#A1B2C3",
        "rgb(12, 34, 56)",
        "rgba(12, 34, 56, 0.25)",
        "transparent",
        "inherit",
        "initial",
        "unset",
        "currentcolor",
    ] {
        let settings = SettingsMap::new().with(Field::ButtonTextColor, color);
        assert_eq!(settings.get(Field::ButtonTextColor), Some(color));

        let css = Compiler::new()
            .compile(&[Preset::new("p", "p").with_settings(settings)])
            .css;
        assert!(
            css.contains(&format!(".p button {{ color: {} !important; }}", color)),
            "{} not emitted verbatim",
            color
        );
    }
}

#[test]
fn test_invalid_class_does_not_affect_valid_preset() {
    let settings = SettingsMap::new().with(Field::LabelColor, "#000");
    let valid = Preset::new("valid", "valid").with_settings(settings.clone());
    let invalid = Preset::new("invalid", "1bad").with_settings(settings);

    let compiler = Compiler::new().header(false);
    let alone = compiler.compile(std::slice::from_ref(&valid));
    let mixed = compiler.compile(&[invalid, valid]);

    assert_eq!(mixed.css, alone.css);
}

#[test]
fn test_compile_twice_differs_only_in_header() {
    let presets = vec![
        Preset::new("a", "a").with_settings(
            SettingsMap::new()
                .with(Field::InputBorderRadius, "4")
                .with(Field::LabelFontFamily, "Lato"),
        ),
        Preset::new("b", "b"),
    ];
    let compiler = Compiler::new();
    let first = compiler.compile_at(
        &presets,
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    );
    let second = compiler.compile(&presets);

    assert_ne!(first.css, second.css);
    assert_eq!(first.body(), second.body());
}

#[test]
fn test_font_resolver_merges_roboto() {
    let presets = [
        Preset::new("a", "a")
            .with_settings(SettingsMap::new().with(Field::LabelFontFamily, "Roboto")),
        Preset::new("b", "b").with_settings(
            SettingsMap::new()
                .with(Field::LabelFontFamily, "Roboto")
                .with(Field::ButtonFontFamily, "Roboto")
                .with(Field::ButtonFontWeight, "700"),
        ),
    ];
    let request = resolve(&presets);

    let weights: Vec<FontWeight> = request.weights("Roboto").unwrap().iter().copied().collect();
    assert_eq!(
        weights,
        vec![
            FontWeight::Normal,
            FontWeight::Medium,
            FontWeight::SemiBold,
            FontWeight::Bold
        ]
    );
    assert_eq!(request.pairs().count(), 4);
}

#[test]
fn test_border_settings_example() {
    let raw = RawPreset::new("Test", "lpfs-test")
        .set("input_border_radius", 8)
        .set("input_border_color", "#3498db");
    let report = Validator::new().validate(&[raw]);
    assert!(report.is_clean());

    let output = Compiler::new().header(false).compile(&report.presets);
    let overrides: Vec<&str> = output
        .css
        .lines()
        .filter(|line| line.ends_with(" !important; }") && line.contains(": "))
        .collect();

    assert_eq!(
        overrides,
        vec![
            ".lpfs-test input, .lpfs-test textarea, .lpfs-test select { border-radius: 8px !important; }",
            ".lpfs-test input, .lpfs-test textarea, .lpfs-test select { border-color: #3498db !important; }",
        ]
    );
}

#[test]
fn test_template_compiles_with_fonts() {
    let template = formstyler::find_template("ivy_league").unwrap();
    let (preset, _) = template.instantiate("ivy").unwrap();
    let output = Compiler::new().compile(&[preset]);

    assert!(output.css.contains(".ivy label { font-family: \"Playfair Display\", sans-serif !important; }"));
    assert_eq!(
        output.fonts.families().collect::<Vec<_>>(),
        vec!["Playfair Display", "Roboto"]
    );
    assert!(output.skipped.is_empty());
}

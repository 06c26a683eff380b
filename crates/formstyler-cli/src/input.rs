//! Presets file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use formstyler::{CompilerOptions, RawPreset, Report, Validator};
use serde::Deserialize;

/// A presets file: either a bare list of presets or a document with an
/// `options` section.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PresetsFile {
    List(Vec<RawPreset>),
    Document {
        #[serde(default)]
        options: CompilerOptions,
        presets: Vec<RawPreset>,
    },
}

/// Validated presets plus the options the file asked for.
#[derive(Debug)]
pub struct Loaded {
    pub options: CompilerOptions,
    pub report: Report,
}

/// Reads, parses and validates a presets file.
///
/// `.json` files are parsed as JSON; anything else as YAML.
pub fn load_presets(path: &Path) -> Result<Loaded> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_presets(&text, is_json(path))
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_presets(text: &str, json: bool) -> Result<Loaded> {
    let file: PresetsFile = if json {
        serde_json::from_str(text)?
    } else {
        serde_yaml::from_str(text)?
    };

    let (options, raws) = match file {
        PresetsFile::Document { options, presets } => (options, presets),
        PresetsFile::List(presets) => (CompilerOptions::default(), presets),
    };

    Ok(Loaded {
        options,
        report: Validator::new().validate(&raws),
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

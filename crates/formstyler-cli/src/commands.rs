//! Subcommand implementations.
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use console::style;
use formstyler::{builtin_templates, find_template, Compiler, StylesheetCache};

use crate::input::load_presets;

/// Compiles a presets file. Writes to `output` when given and returns a
/// summary line; otherwise returns the CSS.
pub fn compile(
    presets: &Path,
    output: Option<&Path>,
    no_header: bool,
    no_important: bool,
) -> Result<String> {
    let loaded = load_presets(presets)?;

    let mut compiler = Compiler::with_options(loaded.options);
    if no_header {
        compiler = compiler.header(false);
    }
    if no_important {
        compiler = compiler.important(false);
    }

    // The cache logs every skipped preset and field on compile.
    let cache = StylesheetCache::new(compiler);
    let compiled = cache.get_or_compile(&loaded.report.presets);

    match output {
        Some(path) => {
            fs::write(path, &compiled.css)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(format!(
                "{} {} ({} presets, {} bytes, {} skipped)",
                style("wrote").green().bold(),
                path.display(),
                loaded.report.presets.len(),
                compiled.css.len(),
                loaded.report.rejections.len() + compiled.skipped.len()
            ))
        }
        None => Ok(compiled.css.clone()),
    }
}

/// Returns the web-font URL for a presets file, or an empty string when no
/// fonts are needed.
pub fn fonts(presets: &Path) -> Result<String> {
    let loaded = load_presets(presets)?;
    let request = formstyler::resolve(&loaded.report.presets);
    Ok(request.google_fonts_url().unwrap_or_default())
}

/// Lists built-in templates, or renders one as YAML.
pub fn templates(show: Option<&str>) -> Result<String> {
    if let Some(key) = show {
        let template = find_template(key).ok_or_else(|| anyhow!("no template named '{}'", key))?;
        return Ok(serde_yaml::to_string(template)?);
    }

    let templates = builtin_templates()?;
    let width = templates.iter().map(|t| t.key.len()).max().unwrap_or(0);
    let lines: Vec<String> = templates
        .iter()
        .map(|t| {
            format!(
                "{}  {}",
                style(format!("{:<width$}", t.key, width = width)).cyan(),
                t.description
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

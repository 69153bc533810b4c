//! End-to-end conversion entry points.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::assemble::assemble;
use crate::backend::DocumentBackend;
use crate::docx::DocxBackend;
use crate::error::ConvertError;
use crate::manager::StyleManager;
use crate::parse::{parse, parse_plain};
use crate::styles::StyleOverride;
use crate::templates::apply_template;
use crate::types::Block;

/// How the input text should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Recognize heading and code-fence markup.
    #[default]
    Markdown,
    /// Treat every non-blank line as a plain paragraph.
    PlainText,
}

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Built-in template slug to apply before any overrides.
    pub template: Option<String>,
    /// JSON map of style-name to override fragment.
    pub custom_styles: Option<String>,
    pub format: InputFormat,
}

/// Build the style table for a conversion: defaults, then the template,
/// then per-style overrides on top.
pub fn build_style_manager(
    template: Option<&str>,
    custom_styles: Option<&str>,
) -> Result<StyleManager, ConvertError> {
    let mut manager = StyleManager::new();

    if let Some(name) = template {
        apply_template(&mut manager, name);
    }

    let overrides = custom_styles.filter(|s| !s.trim().is_empty());
    if let Some(json) = overrides {
        let overrides: BTreeMap<String, StyleOverride> =
            serde_json::from_str(json).map_err(ConvertError::ConfigParse)?;
        for (name, fragment) in overrides {
            manager.update_style(&name, fragment.font, fragment.paragraph);
        }
    }

    Ok(manager)
}

fn parse_input(input: &str, format: InputFormat) -> Vec<Block> {
    match format {
        InputFormat::Markdown => parse(input),
        InputFormat::PlainText => parse_plain(input),
    }
}

/// Parse and render `input` into a ready-to-save backend.
fn assemble_document(input: &str, options: &ConvertOptions) -> Result<DocxBackend, ConvertError> {
    if input.is_empty() {
        return Err(ConvertError::MissingInput);
    }

    let styles = build_style_manager(options.template.as_deref(), options.custom_styles.as_deref())?;
    let blocks = parse_input(input, options.format);

    let mut backend = DocxBackend::new();
    assemble(&blocks, &styles, &mut backend)?;
    Ok(backend)
}

/// Convert `input` and write the document to `path`.
pub fn convert_to_path(
    input: &str,
    path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let mut backend = assemble_document(input, options)?;
    backend.save_to_path(path)?;
    info!(path = %path.display(), "document written");
    Ok(())
}

/// Convert `input` and return the document bytes.
pub fn convert_to_bytes(input: &str, options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    let mut backend = assemble_document(input, options)?;

    let temp = tempfile::Builder::new().suffix(".docx").tempfile()?;
    backend.save_to_path(temp.path())?;
    let bytes = fs::read(temp.path())?;

    info!(bytes = bytes.len(), "document rendered to memory");
    Ok(bytes)
}

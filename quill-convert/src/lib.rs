//! Markdown and plain text to styled DOCX conversion.
//!
//! The pipeline has three stages: [`parse`] turns input text into a flat
//! list of [`Block`]s, a [`StyleManager`] resolves style names to font
//! and paragraph settings, and [`assemble::assemble`] renders the blocks
//! through a [`DocumentBackend`]. The [`convert_to_path`] and
//! [`convert_to_bytes`] entry points wire the stages together.
//!
//! ```
//! use quill_convert::{convert_to_bytes, ConvertOptions};
//!
//! let options = ConvertOptions {
//!     template: Some("academic-paper".to_string()),
//!     ..ConvertOptions::default()
//! };
//! let bytes = convert_to_bytes("# Hello\n\nFirst paragraph.", &options)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), quill_convert::ConvertError>(())
//! ```

pub mod assemble;
pub mod backend;
pub mod convert;
pub mod docx;
pub mod error;
pub mod manager;
pub mod parse;
pub mod styles;
pub mod templates;
pub mod types;
pub mod units;

pub use error::*;
pub use styles::*;
pub use types::*;

pub use backend::DocumentBackend;
pub use convert::{
    build_style_manager, convert_to_bytes, convert_to_path, ConvertOptions, InputFormat,
};
pub use docx::DocxBackend;
pub use manager::{StyleConfig, StyleManager};
pub use parse::{parse, parse_plain};
pub use templates::{apply_template, template, StyleTemplate, TEMPLATES};

use std::path::Path;

use crate::error::BackendError;
use crate::styles::{HeaderFooterStyle, PageStyle, StyleEntry};

/// Sink for assembled document content.
///
/// The assembler drives one of these: page setup first, then body content
/// in document order, then header and footer banners. Implementations
/// buffer everything until [`save_to_path`](DocumentBackend::save_to_path).
pub trait DocumentBackend {
    /// Record the page geometry for the document.
    fn set_page(&mut self, page: &PageStyle) -> Result<(), BackendError>;

    /// Append one styled block of body text. Embedded newlines become
    /// soft line breaks within the paragraph.
    fn append_text(&mut self, text: &str, style: &StyleEntry) -> Result<(), BackendError>;

    /// Append an empty paragraph.
    fn append_spacer(&mut self) -> Result<(), BackendError>;

    /// Record the page header banner.
    fn set_header(&mut self, header: &HeaderFooterStyle) -> Result<(), BackendError>;

    /// Record the page footer banner.
    fn set_footer(&mut self, footer: &HeaderFooterStyle) -> Result<(), BackendError>;

    /// Write the finished document to `path`.
    fn save_to_path(&mut self, path: &Path) -> Result<(), BackendError>;
}

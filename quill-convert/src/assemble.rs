use tracing::debug;

use crate::backend::DocumentBackend;
use crate::error::BackendError;
use crate::manager::StyleManager;
use crate::types::Block;

/// Render parsed blocks into a backend using the given style table.
///
/// Page geometry goes in first, then every block in document order, then
/// the header and footer banners when they are enabled and non-empty.
pub fn assemble<B: DocumentBackend>(
    blocks: &[Block],
    styles: &StyleManager,
    backend: &mut B,
) -> Result<(), BackendError> {
    backend.set_page(styles.page_style())?;

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let style = styles.get_style(heading_style_name(*level));
                backend.append_text(text, style)?;
            }
            Block::Paragraph { text } => {
                backend.append_text(text, styles.get_style("normal"))?;
            }
            Block::CodeBlock { content, .. } => {
                backend.append_text(content, styles.get_style("code"))?;
            }
            Block::Spacer => backend.append_spacer()?,
        }
    }

    let header = styles.header_style();
    if header.enabled && !header.content.is_empty() {
        backend.set_header(header)?;
    }
    let footer = styles.footer_style();
    if footer.enabled && !footer.content.is_empty() {
        backend.set_footer(footer)?;
    }

    debug!(blocks = blocks.len(), "assembled document");
    Ok(())
}

/// Level 1 headings render as the document title; deeper levels use the
/// matching heading style.
fn heading_style_name(level: u8) -> &'static str {
    match level {
        1 => "title",
        2 => "heading2",
        _ => "heading3",
    }
}

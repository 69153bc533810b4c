//! DOCX rendering on top of `docx-rs`.
//!
//! All measurements go in as twips (1/20 pt) except run sizes, which
//! `docx-rs` takes in half-points.

use std::fs::File;
use std::mem;
use std::path::Path;

use docx_rs::{
    AlignmentType, BreakType, Docx, Footer, Header, LineSpacing, LineSpacingType, PageMargin,
    Paragraph, Run, RunFonts, SpecialIndentType,
};
use tracing::debug;

use crate::backend::DocumentBackend;
use crate::error::BackendError;
use crate::styles::{
    Alignment, FontStyle, HeaderFooterStyle, Orientation, PageStyle, ParagraphStyle, StyleEntry,
};
use crate::units::{mm_to_twip, pt_to_half_points, pt_to_twip, spacing_to_line_units};

/// [`DocumentBackend`] that renders to a `.docx` file.
pub struct DocxBackend {
    docx: Docx,
    page: Option<PageStyle>,
    header: Option<HeaderFooterStyle>,
    footer: Option<HeaderFooterStyle>,
}

impl DocxBackend {
    pub fn new() -> Self {
        Self {
            docx: Docx::new(),
            page: None,
            header: None,
            footer: None,
        }
    }

    fn append_paragraph(&mut self, paragraph: Paragraph) {
        let docx = mem::replace(&mut self.docx, Docx::new());
        self.docx = docx.add_paragraph(paragraph);
    }
}

impl Default for DocxBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBackend for DocxBackend {
    fn set_page(&mut self, page: &PageStyle) -> Result<(), BackendError> {
        self.page = Some(page.clone());
        Ok(())
    }

    fn append_text(&mut self, text: &str, style: &StyleEntry) -> Result<(), BackendError> {
        self.append_paragraph(styled_paragraph(text, style));
        Ok(())
    }

    fn append_spacer(&mut self) -> Result<(), BackendError> {
        self.append_paragraph(Paragraph::new());
        Ok(())
    }

    fn set_header(&mut self, header: &HeaderFooterStyle) -> Result<(), BackendError> {
        self.header = Some(header.clone());
        Ok(())
    }

    fn set_footer(&mut self, footer: &HeaderFooterStyle) -> Result<(), BackendError> {
        self.footer = Some(footer.clone());
        Ok(())
    }

    fn save_to_path(&mut self, path: &Path) -> Result<(), BackendError> {
        let mut docx = mem::replace(&mut self.docx, Docx::new());

        if let Some(page) = self.page.take() {
            let (width, height) = page_dimensions(&page);
            docx = docx.page_size(width, height).page_margin(
                PageMargin::new()
                    .top(mm_to_twip(page.margin_top))
                    .bottom(mm_to_twip(page.margin_bottom))
                    .left(mm_to_twip(page.margin_left))
                    .right(mm_to_twip(page.margin_right)),
            );
        }
        if let Some(header) = self.header.take() {
            docx = docx.header(Header::new().add_paragraph(banner_paragraph(&header)));
        }
        if let Some(footer) = self.footer.take() {
            docx = docx.footer(Footer::new().add_paragraph(banner_paragraph(&footer)));
        }

        debug!(path = %path.display(), "writing docx");
        let mut file = File::create(path)?;
        docx.build()
            .pack(&mut file)
            .map_err(|e| BackendError::Docx(e.to_string()))?;
        Ok(())
    }
}

/// Effective page size in twips, with width and height swapped for
/// landscape documents.
fn page_dimensions(page: &PageStyle) -> (u32, u32) {
    let width = mm_to_twip(page.width).max(0) as u32;
    let height = mm_to_twip(page.height).max(0) as u32;
    match page.orientation {
        Orientation::Portrait => (width, height),
        Orientation::Landscape => (height, width),
    }
}

fn styled_paragraph(text: &str, style: &StyleEntry) -> Paragraph {
    let mut paragraph = Paragraph::new()
        .align(alignment_type(style.paragraph.alignment))
        .line_spacing(line_spacing(&style.paragraph));

    let first_line = (style.paragraph.indent_first_line != 0.0)
        .then(|| SpecialIndentType::FirstLine(pt_to_twip(style.paragraph.indent_first_line)));
    let left = (style.paragraph.indent_left != 0.0)
        .then(|| pt_to_twip(style.paragraph.indent_left));
    let right = (style.paragraph.indent_right != 0.0)
        .then(|| pt_to_twip(style.paragraph.indent_right));
    if first_line.is_some() || left.is_some() || right.is_some() {
        paragraph = paragraph.indent(left, first_line, right, None);
    }

    paragraph.add_run(styled_run(text, &style.font))
}

fn line_spacing(paragraph: &ParagraphStyle) -> LineSpacing {
    LineSpacing::new()
        .line_rule(LineSpacingType::Auto)
        .line(spacing_to_line_units(paragraph.line_spacing))
        .before(pt_to_twip(paragraph.space_before).max(0) as u32)
        .after(pt_to_twip(paragraph.space_after).max(0) as u32)
}

fn styled_run(text: &str, font: &FontStyle) -> Run {
    let mut run = Run::new()
        .size(pt_to_half_points(font.size))
        .fonts(
            RunFonts::new()
                .ascii(&font.family)
                .hi_ansi(&font.family)
                .east_asia(&font.family),
        );
    if font.bold {
        run = run.bold();
    }
    if font.italic {
        run = run.italic();
    }
    if let Some((r, g, b)) = font.rgb() {
        run = run.color(format!("{r:02X}{g:02X}{b:02X}"));
    }

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

/// Banner alignment: justification makes no sense for a one-line banner,
/// so it clamps to centered.
fn banner_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Right => AlignmentType::Right,
        Alignment::Center | Alignment::Justify => AlignmentType::Center,
    }
}

fn banner_paragraph(banner: &HeaderFooterStyle) -> Paragraph {
    Paragraph::new()
        .align(banner_alignment(banner.alignment))
        .add_run(styled_run(&banner.content, &banner.font))
}

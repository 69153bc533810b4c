//! Built-in style templates.
//!
//! A template is a bundle of style updates plus an optional page setup,
//! applied on top of whatever the manager currently holds. Templates are
//! addressed by slug; unknown slugs apply nothing.

use crate::manager::StyleManager;
use crate::styles::{Alignment, FontStyle, PageStyle, ParagraphStyle, StyleEntry};

/// Slugs and one-line descriptions of the built-in templates, in display
/// order.
pub const TEMPLATES: [(&str, &str); 3] = [
    (
        "academic-paper",
        "Song-family serif text with centered title and first-line indents",
    ),
    (
        "business-report",
        "YaHei sans text with tighter line spacing for report layouts",
    ),
    (
        "technical-doc",
        "Arial text with Consolas code blocks and narrow margins",
    ),
];

/// A resolved template: the style entries it sets and the page setup it
/// carries, if any.
pub struct StyleTemplate {
    styles: Vec<(&'static str, StyleEntry)>,
    page: Option<PageStyle>,
}

/// Resolve a template slug. Returns `None` for unknown slugs.
pub fn template(name: &str) -> Option<StyleTemplate> {
    match name {
        "academic-paper" => Some(academic_paper()),
        "business-report" => Some(business_report()),
        "technical-doc" => Some(technical_doc()),
        _ => None,
    }
}

/// Apply a template by slug. Unknown slugs leave the manager untouched.
pub fn apply_template(manager: &mut StyleManager, name: &str) {
    let Some(template) = template(name) else {
        return;
    };
    for (style_name, entry) in template.styles {
        manager.update_style(style_name, Some(entry.font), Some(entry.paragraph));
    }
    if let Some(page) = template.page {
        manager.set_page_style(page);
    }
}

fn academic_paper() -> StyleTemplate {
    StyleTemplate {
        styles: vec![
            (
                "title",
                StyleEntry {
                    font: FontStyle {
                        family: "宋体".to_string(),
                        size: 16.0,
                        bold: true,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        alignment: Alignment::Center,
                        space_after: 18.0,
                        ..ParagraphStyle::default()
                    },
                },
            ),
            (
                "heading1",
                StyleEntry {
                    font: FontStyle {
                        family: "宋体".to_string(),
                        size: 14.0,
                        bold: true,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        space_before: 12.0,
                        space_after: 6.0,
                        ..ParagraphStyle::default()
                    },
                },
            ),
            (
                "normal",
                StyleEntry {
                    font: FontStyle {
                        family: "宋体".to_string(),
                        size: 12.0,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        indent_first_line: 24.0,
                        line_spacing: 1.5,
                        ..ParagraphStyle::default()
                    },
                },
            ),
        ],
        page: Some(PageStyle {
            margin_top: 30.0,
            margin_bottom: 25.0,
            margin_left: 30.0,
            margin_right: 25.0,
            ..PageStyle::default()
        }),
    }
}

fn business_report() -> StyleTemplate {
    StyleTemplate {
        styles: vec![
            (
                "title",
                StyleEntry {
                    font: FontStyle {
                        family: "微软雅黑".to_string(),
                        size: 18.0,
                        bold: true,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        alignment: Alignment::Center,
                        space_after: 15.0,
                        ..ParagraphStyle::default()
                    },
                },
            ),
            (
                "heading1",
                StyleEntry {
                    font: FontStyle {
                        family: "微软雅黑".to_string(),
                        size: 14.0,
                        bold: true,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        space_before: 10.0,
                        space_after: 5.0,
                        ..ParagraphStyle::default()
                    },
                },
            ),
            (
                "normal",
                StyleEntry {
                    font: FontStyle {
                        family: "微软雅黑".to_string(),
                        size: 11.0,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        line_spacing: 1.3,
                        ..ParagraphStyle::default()
                    },
                },
            ),
        ],
        page: Some(PageStyle::default()),
    }
}

fn technical_doc() -> StyleTemplate {
    StyleTemplate {
        styles: vec![
            (
                "title",
                StyleEntry {
                    font: FontStyle {
                        family: "Arial".to_string(),
                        size: 16.0,
                        bold: true,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        alignment: Alignment::Left,
                        space_after: 12.0,
                        ..ParagraphStyle::default()
                    },
                },
            ),
            (
                "heading1",
                StyleEntry {
                    font: FontStyle {
                        family: "Arial".to_string(),
                        size: 14.0,
                        bold: true,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        space_before: 8.0,
                        space_after: 4.0,
                        ..ParagraphStyle::default()
                    },
                },
            ),
            (
                "normal",
                StyleEntry {
                    font: FontStyle {
                        family: "Arial".to_string(),
                        size: 10.0,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        line_spacing: 1.2,
                        ..ParagraphStyle::default()
                    },
                },
            ),
            (
                "code",
                StyleEntry {
                    font: FontStyle {
                        family: "Consolas".to_string(),
                        size: 9.0,
                        ..FontStyle::default()
                    },
                    paragraph: ParagraphStyle {
                        indent_left: 15.0,
                        ..ParagraphStyle::default()
                    },
                },
            ),
        ],
        page: Some(PageStyle {
            margin_top: 20.0,
            margin_bottom: 20.0,
            margin_left: 20.0,
            margin_right: 20.0,
            ..PageStyle::default()
        }),
    }
}

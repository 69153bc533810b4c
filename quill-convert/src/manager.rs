use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigImportError;
use crate::styles::{
    Alignment, FontStyle, HeaderFooterStyle, PageStyle, ParagraphStyle, StyleEntry, TableStyle,
};

/// Serialized form of a complete style configuration.
///
/// The same schema serves export and import. Sections left out of an
/// imported document deserialize as `None` and keep their current value;
/// unknown keys anywhere are a schema error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub styles: BTreeMap<String, StyleEntry>,
    pub page_style: Option<PageStyle>,
    pub header_style: Option<HeaderFooterStyle>,
    pub footer_style: Option<HeaderFooterStyle>,
    pub table_style: Option<TableStyle>,
}

/// Resolves style names to concrete font and paragraph settings.
///
/// A manager starts from the built-in style table and is then shaped by
/// template application, individual updates, or a full config import.
/// Lookup never fails: unknown names resolve to "normal".
#[derive(Debug, Clone)]
pub struct StyleManager {
    styles: BTreeMap<String, StyleEntry>,
    page_style: PageStyle,
    header_style: HeaderFooterStyle,
    footer_style: HeaderFooterStyle,
    table_style: TableStyle,
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleManager {
    /// Create a manager holding the built-in default style table.
    pub fn new() -> Self {
        Self {
            styles: default_styles(),
            page_style: PageStyle::default(),
            header_style: HeaderFooterStyle::default(),
            footer_style: HeaderFooterStyle::default(),
            table_style: TableStyle::default(),
        }
    }

    /// Look up a style by name, falling back to "normal" for unknown names.
    pub fn get_style(&self, name: &str) -> &StyleEntry {
        // "normal" is seeded in `new()` and nothing ever removes entries.
        self.styles
            .get(name)
            .or_else(|| self.styles.get("normal"))
            .expect("style table always has a normal entry")
    }

    /// Update a named style.
    ///
    /// A `Some` half replaces that entire sub-object; a `None` half leaves
    /// the existing one untouched. Unknown names are first seeded with a
    /// default entry, so a font-only update on a new name gets default
    /// paragraph settings.
    pub fn update_style(
        &mut self,
        name: &str,
        font: Option<FontStyle>,
        paragraph: Option<ParagraphStyle>,
    ) {
        let entry = self.styles.entry(name.to_string()).or_default();
        if let Some(font) = font {
            entry.font = font;
        }
        if let Some(paragraph) = paragraph {
            entry.paragraph = paragraph;
        }
    }

    /// Replace the page geometry.
    pub fn set_page_style(&mut self, page: PageStyle) {
        self.page_style = page;
    }

    /// Replace header and/or footer configuration. `None` keeps the
    /// existing value.
    pub fn set_header_footer(
        &mut self,
        header: Option<HeaderFooterStyle>,
        footer: Option<HeaderFooterStyle>,
    ) {
        if let Some(header) = header {
            self.header_style = header;
        }
        if let Some(footer) = footer {
            self.footer_style = footer;
        }
    }

    /// Replace the table defaults.
    pub fn set_table_style(&mut self, table: TableStyle) {
        self.table_style = table;
    }

    pub fn page_style(&self) -> &PageStyle {
        &self.page_style
    }

    pub fn header_style(&self) -> &HeaderFooterStyle {
        &self.header_style
    }

    pub fn footer_style(&self) -> &HeaderFooterStyle {
        &self.footer_style
    }

    pub fn table_style(&self) -> &TableStyle {
        &self.table_style
    }

    /// Export the full configuration as pretty-printed JSON.
    ///
    /// Key order is stable (styles sort by name), so exporting, importing
    /// and exporting again yields byte-identical output.
    pub fn export_config(&self) -> String {
        let config = StyleConfig {
            styles: self.styles.clone(),
            page_style: Some(self.page_style.clone()),
            header_style: Some(self.header_style.clone()),
            footer_style: Some(self.footer_style.clone()),
            table_style: Some(self.table_style.clone()),
        };
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string_pretty(&config).expect("style config serializes to JSON")
    }

    /// Import a configuration snapshot produced by [`export_config`] (or
    /// hand-written to the same schema).
    ///
    /// The whole document is parsed and validated up front; on error the
    /// manager is left exactly as it was. Named styles merge into the
    /// current table; the page, header, footer and table sections replace
    /// the current values only when present.
    pub fn import_config(&mut self, json: &str) -> Result<(), ConfigImportError> {
        let config: StyleConfig = serde_json::from_str(json)?;

        for (name, entry) in config.styles {
            self.styles.insert(name, entry);
        }
        if let Some(page) = config.page_style {
            self.page_style = page;
        }
        if let Some(header) = config.header_style {
            self.header_style = header;
        }
        if let Some(footer) = config.footer_style {
            self.footer_style = footer;
        }
        if let Some(table) = config.table_style {
            self.table_style = table;
        }

        Ok(())
    }
}

/// The built-in style table: title, three heading levels, body text and
/// code blocks.
fn default_styles() -> BTreeMap<String, StyleEntry> {
    let mut styles = BTreeMap::new();

    styles.insert(
        "title".to_string(),
        StyleEntry {
            font: FontStyle {
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
    );
    styles.insert(
        "heading1".to_string(),
        StyleEntry {
            font: FontStyle {
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
    );
    styles.insert(
        "heading2".to_string(),
        StyleEntry {
            font: FontStyle {
                size: 13.0,
                bold: true,
                ..FontStyle::default()
            },
            paragraph: ParagraphStyle {
                space_before: 10.0,
                space_after: 5.0,
                ..ParagraphStyle::default()
            },
        },
    );
    styles.insert(
        "heading3".to_string(),
        StyleEntry {
            font: FontStyle {
                size: 12.0,
                bold: true,
                ..FontStyle::default()
            },
            paragraph: ParagraphStyle {
                space_before: 8.0,
                space_after: 4.0,
                ..ParagraphStyle::default()
            },
        },
    );
    styles.insert(
        "normal".to_string(),
        StyleEntry {
            font: FontStyle::default(),
            paragraph: ParagraphStyle {
                indent_first_line: 24.0,
                line_spacing: 1.5,
                ..ParagraphStyle::default()
            },
        },
    );
    styles.insert(
        "code".to_string(),
        StyleEntry {
            font: FontStyle {
                family: "Consolas".to_string(),
                size: 10.0,
                ..FontStyle::default()
            },
            paragraph: ParagraphStyle {
                indent_left: 15.0,
                space_before: 6.0,
                space_after: 6.0,
                ..ParagraphStyle::default()
            },
        },
    );

    styles
}

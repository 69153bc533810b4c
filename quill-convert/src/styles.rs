use serde::{Deserialize, Serialize};

/// Character-level formatting for a run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontStyle {
    /// Font family name (e.g. "宋体", "Consolas").
    pub family: String,
    /// Font size in points.
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    /// Text color as a `#RRGGBB` hex string. Invalid values are skipped
    /// at render time, never rejected.
    pub color: String,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: "宋体".to_string(),
            size: 12.0,
            bold: false,
            italic: false,
            color: "#000000".to_string(),
        }
    }
}

impl FontStyle {
    /// Parse the `color` field as an RGB triple.
    ///
    /// Returns `None` unless the value is `#` followed by at least six
    /// hex digits.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some((r, g, b))
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Paragraph-level formatting: alignment, spacing and indentation.
///
/// Spacing and indent values are in points; `line_spacing` is a multiple
/// of the single-line height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParagraphStyle {
    pub alignment: Alignment,
    pub line_spacing: f64,
    pub space_before: f64,
    pub space_after: f64,
    pub indent_first_line: f64,
    pub indent_left: f64,
    pub indent_right: f64,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            line_spacing: 1.5,
            space_before: 0.0,
            space_after: 0.0,
            indent_first_line: 0.0,
            indent_left: 0.0,
            indent_right: 0.0,
        }
    }
}

/// Page orientation. Landscape swaps the rendered width and height; the
/// stored dimensions themselves stay portrait-ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page geometry in millimeters. Defaults to A4 with 25mm margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageStyle {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub orientation: Orientation,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_top: 25.0,
            margin_bottom: 25.0,
            margin_left: 25.0,
            margin_right: 25.0,
            orientation: Orientation::Portrait,
        }
    }
}

/// Header or footer configuration.
///
/// Disabled and empty by default; a banner renders only when `enabled`
/// is set and `content` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderFooterStyle {
    pub enabled: bool,
    pub content: String,
    pub font: FontStyle,
    /// Alignment within the banner area; `justify` renders as center.
    pub alignment: Alignment,
    /// Distance from the page edge in points. Carried through config
    /// round-trips but not pushed to the backend.
    pub distance_from_edge: f64,
}

impl Default for HeaderFooterStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            content: String::new(),
            font: FontStyle {
                size: 10.0,
                ..FontStyle::default()
            },
            alignment: Alignment::Center,
            distance_from_edge: 12.0,
        }
    }
}

/// Table formatting defaults.
///
/// The block parser never produces tables; these values exist so a full
/// config survives export and import unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableStyle {
    pub border_width: f64,
    pub border_color: String,
    pub cell_padding: f64,
    pub header_background: String,
    pub alternate_row_color: String,
    pub font: FontStyle,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            border_color: "#000000".to_string(),
            cell_padding: 5.0,
            header_background: "#f0f0f0".to_string(),
            alternate_row_color: "#f9f9f9".to_string(),
            font: FontStyle::default(),
        }
    }
}

/// A named style: the font and paragraph settings resolved together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleEntry {
    pub font: FontStyle,
    pub paragraph: ParagraphStyle,
}

/// A partial style update as found in custom override JSON.
///
/// A present half replaces the entry's whole counterpart, completed with
/// type defaults; an absent half leaves the existing value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverride {
    pub font: Option<FontStyle>,
    pub paragraph: Option<ParagraphStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn font_defaults() {
        let font = FontStyle::default();
        assert_eq!(font.family, "宋体");
        assert_eq!(font.size, 12.0);
        assert!(!font.bold);
        assert!(!font.italic);
        assert_eq!(font.color, "#000000");
    }

    #[test]
    fn rgb_parses_valid_colors() {
        let font = FontStyle {
            color: "#1a2B3c".to_string(),
            ..FontStyle::default()
        };
        assert_eq!(font.rgb(), Some((0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn rgb_rejects_invalid_colors() {
        for color in ["red", "000000", "#12", "#12345", "#gghhii", ""] {
            let font = FontStyle {
                color: color.to_string(),
                ..FontStyle::default()
            };
            assert_eq!(font.rgb(), None, "color {color:?} should not parse");
        }
    }

    #[test]
    fn rgb_ignores_trailing_characters() {
        let font = FontStyle {
            color: "#112233ff".to_string(),
            ..FontStyle::default()
        };
        assert_eq!(font.rgb(), Some((0x11, 0x22, 0x33)));
    }

    #[test]
    fn partial_font_json_fills_defaults() {
        let font: FontStyle = serde_json::from_str(r#"{ "size": 99 }"#).unwrap();
        assert_eq!(font.size, 99.0);
        assert_eq!(font.family, "宋体");
        assert_eq!(font.color, "#000000");
    }

    #[test]
    fn unknown_font_field_is_rejected() {
        let result = serde_json::from_str::<FontStyle>(r#"{ "weight": 700 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn header_footer_default_font_is_smaller() {
        let style = HeaderFooterStyle::default();
        assert!(!style.enabled);
        assert_eq!(style.font.size, 10.0);
        assert_eq!(style.alignment, Alignment::Center);
        assert_eq!(style.distance_from_edge, 12.0);
    }

    #[test]
    fn header_footer_font_fragment_uses_font_defaults() {
        // An explicit partial font object fills from FontStyle's own
        // defaults (size 12), not from the banner default of 10.
        let style: HeaderFooterStyle =
            serde_json::from_str(r#"{ "enabled": true, "font": { "bold": true } }"#).unwrap();
        assert!(style.font.bold);
        assert_eq!(style.font.size, 12.0);
    }

    #[test]
    fn alignment_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Alignment::Justify).unwrap(), r#""justify""#);
        let parsed: Alignment = serde_json::from_str(r#""center""#).unwrap();
        assert_eq!(parsed, Alignment::Center);
    }

    #[test]
    fn page_defaults_are_a4_portrait() {
        let page = PageStyle::default();
        assert_eq!(page.width, 210.0);
        assert_eq!(page.height, 297.0);
        assert_eq!(page.margin_top, 25.0);
        assert_eq!(page.orientation, Orientation::Portrait);
    }

    #[test]
    fn style_override_halves_are_independent() {
        let parsed: StyleOverride =
            serde_json::from_str(r#"{ "font": { "size": 16 } }"#).unwrap();
        assert_eq!(parsed.font.as_ref().map(|f| f.size), Some(16.0));
        assert!(parsed.paragraph.is_none());
    }
}

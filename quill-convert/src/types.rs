use serde::{Deserialize, Serialize};

/// A parsed block in the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Block {
    /// Heading line. Level 1 is the document title; levels 2 and 3 are
    /// section headings. Deeper headings never reach this variant, the
    /// parser demotes them to paragraphs.
    Heading { level: u8, text: String },
    /// A single line of body text, carried verbatim.
    Paragraph { text: String },
    /// Fenced code block. `language` is the fence info string (may be
    /// empty); `content` holds the fenced lines joined with `\n`.
    CodeBlock { language: String, content: String },
    /// A blank source line, kept for vertical spacing.
    Spacer,
}

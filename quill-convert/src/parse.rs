use crate::types::Block;

/// Parse markdown-ish source into an ordered block sequence.
///
/// This function is total: every input string produces a block list, it
/// never fails and never panics. Only line-level structure is recognized
/// (headings, fenced code, blank lines); inline markdown such as emphasis
/// or links travels into blocks verbatim.
pub fn parse(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut code_buffer: Vec<&str> = Vec::new();
    let mut code_language = String::new();
    let mut in_code_block = false;

    for line in input.lines() {
        // Fence lines are checked before anything else, so a fence inside
        // a code block always closes it. Detection works on the trimmed
        // line; an indented fence still toggles.
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            if in_code_block {
                flush_code(&mut blocks, &mut code_buffer, &mut code_language);
                in_code_block = false;
            } else {
                in_code_block = true;
                code_language = trimmed[3..].trim().to_string();
            }
            continue;
        }

        if in_code_block {
            code_buffer.push(line);
            continue;
        }

        // Headings are detected on the raw line: an indented `# x` is a
        // plain paragraph.
        if line.starts_with('#') {
            blocks.push(parse_heading(line));
        } else if !trimmed.is_empty() {
            blocks.push(Block::Paragraph {
                text: line.to_string(),
            });
        } else {
            blocks.push(Block::Spacer);
        }
    }

    // A fence left open at end of input still yields its buffered content.
    if in_code_block {
        flush_code(&mut blocks, &mut code_buffer, &mut code_language);
    }

    blocks
}

/// Parse plain text: every non-blank line becomes a body paragraph and
/// every blank line a spacer. No heading or fence recognition.
pub fn parse_plain(input: &str) -> Vec<Block> {
    input
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                Block::Spacer
            } else {
                Block::Paragraph {
                    text: line.to_string(),
                }
            }
        })
        .collect()
}

/// Emit the buffered code lines as a `CodeBlock`, if there are any.
///
/// A fence pair with nothing between produces no block at all, but a
/// single buffered blank line still counts as (empty) content.
fn flush_code(blocks: &mut Vec<Block>, buffer: &mut Vec<&str>, language: &mut String) {
    if !buffer.is_empty() {
        blocks.push(Block::CodeBlock {
            language: std::mem::take(language),
            content: buffer.join("\n"),
        });
        buffer.clear();
    }
    language.clear();
}

/// Classify a line starting with `#`.
///
/// The heading level is the count of leading `#` characters and the text
/// is the remainder with surrounding whitespace stripped. Levels past 3
/// demote to a plain paragraph of the stripped text.
fn parse_heading(line: &str) -> Block {
    let level = line.chars().take_while(|&c| c == '#').count();
    let text = line.trim_start_matches('#').trim().to_string();

    if level <= 3 {
        Block::Heading {
            level: level as u8,
            text,
        }
    } else {
        Block::Paragraph { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn heading(level: u8, text: &str) -> Block {
        Block::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    fn code(language: &str, content: &str) -> Block {
        Block::CodeBlock {
            language: language.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse(""), Vec::<Block>::new());
    }

    #[test]
    fn parse_single_paragraph() {
        assert_eq!(parse("Hello world"), vec![paragraph("Hello world")]);
    }

    #[test]
    fn parse_heading_levels() {
        assert_eq!(parse("# Title"), vec![heading(1, "Title")]);
        assert_eq!(parse("## Section"), vec![heading(2, "Section")]);
        assert_eq!(parse("### Sub"), vec![heading(3, "Sub")]);
    }

    #[test]
    fn parse_heading_without_space() {
        assert_eq!(parse("#Tight"), vec![heading(1, "Tight")]);
    }

    #[test]
    fn parse_deep_heading_demotes_to_paragraph() {
        assert_eq!(parse("#### Appendix"), vec![paragraph("Appendix")]);
        assert_eq!(parse("####### Deep"), vec![paragraph("Deep")]);
    }

    #[test]
    fn parse_indented_heading_is_paragraph() {
        // Heading detection is on the raw line, so indentation opts out.
        assert_eq!(parse("  # Not a heading"), vec![paragraph("  # Not a heading")]);
    }

    #[test]
    fn parse_blank_lines_become_spacers() {
        assert_eq!(
            parse("One\n\nTwo"),
            vec![paragraph("One"), Block::Spacer, paragraph("Two")]
        );
        assert_eq!(parse("   \t "), vec![Block::Spacer]);
    }

    #[test]
    fn parse_trailing_newline_adds_nothing() {
        assert_eq!(parse("Only line\n"), vec![paragraph("Only line")]);
    }

    #[test]
    fn parse_code_block_with_language() {
        let blocks = parse("```python\nprint(1)\nprint(2)\n```\n");
        assert_eq!(blocks, vec![code("python", "print(1)\nprint(2)")]);
    }

    #[test]
    fn parse_code_block_keeps_hashes_and_blanks_verbatim() {
        let blocks = parse("```sh\n# comment\n\necho hi\n```\n");
        assert_eq!(blocks, vec![code("sh", "# comment\n\necho hi")]);
    }

    #[test]
    fn parse_indented_fence_still_toggles() {
        let blocks = parse("   ```rust\nlet x = 1;\n   ```\n");
        assert_eq!(blocks, vec![code("rust", "let x = 1;")]);
    }

    #[test]
    fn parse_closing_fence_info_string_is_ignored() {
        let blocks = parse("```rust\nlet x = 1;\n```js\nafter\n");
        assert_eq!(blocks, vec![code("rust", "let x = 1;"), paragraph("after")]);
    }

    #[test]
    fn parse_fence_language_is_trimmed() {
        let blocks = parse("```  toml  \nkey = 1\n```\n");
        assert_eq!(blocks, vec![code("toml", "key = 1")]);
    }

    #[test]
    fn parse_empty_fence_pair_emits_nothing() {
        assert_eq!(parse("```\n```\n"), Vec::<Block>::new());
    }

    #[test]
    fn parse_fenced_blank_line_is_empty_code() {
        // One buffered blank line is still content, unlike no lines at all.
        assert_eq!(parse("```\n\n```\n"), vec![code("", "")]);
    }

    #[test]
    fn parse_unterminated_fence_flushes_at_eof() {
        let blocks = parse("```js\nconsole.log(1)");
        assert_eq!(blocks, vec![code("js", "console.log(1)")]);
    }

    #[test]
    fn parse_unterminated_fence_without_content_emits_nothing() {
        assert_eq!(parse("```js\n"), Vec::<Block>::new());
    }

    #[test]
    fn parse_mixed_document() {
        let input = "# Title\n\nHello world\n```python\nprint(1)\n```\n";
        assert_eq!(
            parse(input),
            vec![
                heading(1, "Title"),
                Block::Spacer,
                paragraph("Hello world"),
                code("python", "print(1)"),
            ]
        );
    }

    #[test]
    fn parse_crlf_input() {
        let blocks = parse("# Title\r\n\r\nBody\r\n");
        assert_eq!(blocks, vec![heading(1, "Title"), Block::Spacer, paragraph("Body")]);
    }

    #[test]
    fn parse_plain_ignores_markup() {
        let blocks = parse_plain("# not a heading\n\n```\nstill text\n");
        assert_eq!(
            blocks,
            vec![
                paragraph("# not a heading"),
                Block::Spacer,
                paragraph("```"),
                paragraph("still text"),
            ]
        );
    }

    #[test]
    fn parse_plain_empty_input() {
        assert_eq!(parse_plain(""), Vec::<Block>::new());
    }
}

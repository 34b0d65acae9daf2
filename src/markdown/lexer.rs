//! Single-pass tokenizer for the markdown dialect.
//!
//! Classifies input into block and inline nodes in one scan over the
//! original text. Because no rule ever re-reads the output of another rule,
//! the ordering hazards of chained find-and-replace passes (bold markers
//! re-matched as italics, list wrapping capturing earlier output) cannot
//! occur here.

use super::renderer::RenderOptions;

/// Block-level node produced by the line scanner.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Block {
    /// One line of inline content.
    Line(Vec<Inline>),
    /// A run of explicit line breaks.
    Breaks(usize),
    /// Consecutive list items grouped into a single container.
    List(Vec<Vec<Inline>>),
}

/// Inline span within a line or list item.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Em(Vec<Inline>),
    Link { label: Vec<Inline>, url: String },
}

/// Per-line classification before grouping.
enum LineKind<'a> {
    /// List item with its marker already stripped.
    Item(&'a str),
    /// Empty line; contributes only to break counting.
    Blank,
    /// Plain text line.
    Text(&'a str),
}

/// Parses raw text into block nodes.
///
/// Lines are classified first (list item, blank, text), then grouped:
/// consecutive item lines merge into one list, text lines become inline
/// runs, and each newline boundary between non-item lines becomes one
/// break. Newlines touching a list-item line are absorbed by the list
/// structure so containers never carry stray breaks.
///
/// # Arguments
///
/// * `text`: Raw markdown-like input
/// * `options`: Capability set controlling which rules apply
///
/// # Returns
///
/// Block nodes in input order
pub(super) fn parse(text: &str, options: &RenderOptions) -> Vec<Block> {
    let lines: Vec<LineKind<'_>> = text.split('\n').map(|l| classify(l, options)).collect();
    let mut blocks: Vec<Block> = Vec::new();

    for i in 0..lines.len() {
        match &lines[i] {
            LineKind::Item(content) => {
                let item = parse_inline(content, options);
                let continues = i > 0 && matches!(&lines[i - 1], LineKind::Item(_));
                match blocks.last_mut() {
                    Some(Block::List(items)) if continues => items.push(item),
                    _ => blocks.push(Block::List(vec![item])),
                }
            }
            LineKind::Blank => {}
            LineKind::Text(content) => blocks.push(Block::Line(parse_inline(content, options))),
        }

        // One break per newline boundary, except boundaries touching a list
        // item line.
        if i + 1 < lines.len()
            && !matches!(&lines[i], LineKind::Item(_))
            && !matches!(&lines[i + 1], LineKind::Item(_))
        {
            match blocks.last_mut() {
                Some(Block::Breaks(count)) => *count += 1,
                _ => blocks.push(Block::Breaks(1)),
            }
        }
    }

    blocks
}

/// Classifies a single line.
///
/// Bullet markers (`- ` or `* `) always produce items; a decimal prefix
/// (`N. `) produces an item only when numbered items are enabled, and the
/// number itself is discarded.
fn classify<'a>(line: &'a str, options: &RenderOptions) -> LineKind<'a> {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::Item(rest);
    }

    if options.numbered_items
        && let Some(rest) = strip_numbered_prefix(line)
    {
        return LineKind::Item(rest);
    }

    if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(line)
    }
}

/// Strips a `N. ` prefix, returning the remaining content.
fn strip_numbered_prefix(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Parses inline content into spans.
///
/// Scans left to right. Double-asterisk markers are checked before single
/// ones, so bold always wins over italic and `**a** and **b**` yields two
/// separate bold spans. Unclosed markers and malformed link syntax fall
/// back to literal text; the scan never fails.
///
/// Bare `mailto:` URIs need no rule of their own: literal text passes
/// through untouched, which is exactly the passthrough the answer surface
/// expects.
pub(super) fn parse_inline(text: &str, options: &RenderOptions) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if rest.starts_with("**") {
            if let Some(end) = rest[2..].find("**") {
                flush(&mut literal, &mut nodes);
                let inner = &rest[2..2 + end];
                nodes.push(Inline::Strong(parse_inline(inner, options)));
                i += end + 4;
                continue;
            }
            // No closing marker: keep the asterisks as plain text.
            literal.push_str("**");
            i += 2;
            continue;
        }

        if options.italics && rest.starts_with('*') {
            if let Some(end) = rest[1..].find('*') {
                flush(&mut literal, &mut nodes);
                let inner = &rest[1..1 + end];
                nodes.push(Inline::Em(parse_inline(inner, options)));
                i += end + 2;
                continue;
            }
            literal.push('*');
            i += 1;
            continue;
        }

        if options.links
            && rest.starts_with('[')
            && let Some((label, url, consumed)) = scan_link(rest)
        {
            flush(&mut literal, &mut nodes);
            nodes.push(Inline::Link {
                label: parse_inline(label, options),
                url: url.to_string(),
            });
            i += consumed;
            continue;
        }

        match rest.chars().next() {
            Some(ch) => {
                literal.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    flush(&mut literal, &mut nodes);
    nodes
}

/// Scans a `[label](url)` token at the start of `rest`.
///
/// # Returns
///
/// Label text, URL text, and the number of bytes consumed, or None when
/// the syntax is incomplete (missing delimiter, empty label or URL).
fn scan_link(rest: &str) -> Option<(&str, &str, usize)> {
    let close = rest.find("](")?;
    let label = &rest[1..close];
    let url_start = close + 2;
    let url_len = rest[url_start..].find(')')?;
    let url = &rest[url_start..url_start + url_len];

    if label.is_empty() || label.contains(']') || url.is_empty() {
        return None;
    }

    Some((label, url, url_start + url_len + 1))
}

fn flush(literal: &mut String, nodes: &mut Vec<Inline>) {
    if !literal.is_empty() {
        nodes.push(Inline::Text(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rules() -> RenderOptions {
        RenderOptions {
            italics: true,
            numbered_items: true,
            links: true,
            collapse_breaks: true,
        }
    }

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn test_plain_text_single_node() {
        // Arrange & Act
        let nodes = parse_inline("hello world", &all_rules());

        // Assert
        assert_eq!(nodes, vec![text("hello world")]);
    }

    #[test]
    fn test_bold_non_greedy() {
        // Arrange & Act
        let nodes = parse_inline("**a** x **b**", &all_rules());

        // Assert: two separate bold spans, never one spanning both
        assert_eq!(
            nodes,
            vec![
                Inline::Strong(vec![text("a")]),
                text(" x "),
                Inline::Strong(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn test_unclosed_bold_is_literal() {
        // Arrange & Act
        let nodes = parse_inline("**a", &all_rules());

        // Assert
        assert_eq!(nodes, vec![text("**a")]);
    }

    #[test]
    fn test_italic_inside_bold() {
        // Arrange & Act
        let nodes = parse_inline("**a *b* c**", &all_rules());

        // Assert: bold claimed first, italic parsed within
        assert_eq!(
            nodes,
            vec![Inline::Strong(vec![
                text("a "),
                Inline::Em(vec![text("b")]),
                text(" c"),
            ])]
        );
    }

    #[test]
    fn test_italic_disabled_stays_literal() {
        // Arrange
        let options = RenderOptions {
            italics: false,
            ..all_rules()
        };

        // Act
        let nodes = parse_inline("*a*", &options);

        // Assert
        assert_eq!(nodes, vec![text("*a*")]);
    }

    #[test]
    fn test_link_token() {
        // Arrange & Act
        let nodes = parse_inline("see [Example](https://x.test) now", &all_rules());

        // Assert
        assert_eq!(
            nodes,
            vec![
                text("see "),
                Inline::Link {
                    label: vec![text("Example")],
                    url: "https://x.test".to_string(),
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_malformed_link_is_literal() {
        // Arrange & Act: missing closing parenthesis
        let nodes = parse_inline("[Example](https://x.test", &all_rules());

        // Assert
        assert_eq!(nodes, vec![text("[Example](https://x.test")]);
    }

    #[test]
    fn test_links_disabled_stays_literal() {
        // Arrange
        let options = RenderOptions {
            links: false,
            ..all_rules()
        };

        // Act
        let nodes = parse_inline("[a](b)", &options);

        // Assert
        assert_eq!(nodes, vec![text("[a](b)")]);
    }

    #[test]
    fn test_bullet_lines_group_into_one_list() {
        // Arrange & Act
        let blocks = parse("- one\n- two", &all_rules());

        // Assert
        assert_eq!(
            blocks,
            vec![Block::List(vec![vec![text("one")], vec![text("two")]])]
        );
    }

    #[test]
    fn test_asterisk_bullet_marker() {
        // Arrange & Act
        let blocks = parse("* one", &all_rules());

        // Assert
        assert_eq!(blocks, vec![Block::List(vec![vec![text("one")]])]);
    }

    #[test]
    fn test_interrupted_lists_split() {
        // Arrange & Act
        let blocks = parse("- one\nplain\n- two", &all_rules());

        // Assert: two separate containers around the text line
        assert_eq!(
            blocks,
            vec![
                Block::List(vec![vec![text("one")]]),
                Block::Line(vec![text("plain")]),
                Block::List(vec![vec![text("two")]]),
            ]
        );
    }

    #[test]
    fn test_numbered_prefix_discarded() {
        // Arrange & Act
        let blocks = parse("1. first\n2. second", &all_rules());

        // Assert
        assert_eq!(
            blocks,
            vec![Block::List(vec![vec![text("first")], vec![text("second")]])]
        );
    }

    #[test]
    fn test_numbered_disabled_is_text() {
        // Arrange
        let options = RenderOptions {
            numbered_items: false,
            ..all_rules()
        };

        // Act
        let blocks = parse("1. first", &options);

        // Assert
        assert_eq!(blocks, vec![Block::Line(vec![text("1. first")])]);
    }

    #[test]
    fn test_newline_counting() {
        // Arrange & Act
        let blocks = parse("a\n\nb", &all_rules());

        // Assert: blank line yields two breaks
        assert_eq!(
            blocks,
            vec![
                Block::Line(vec![text("a")]),
                Block::Breaks(2),
                Block::Line(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn test_newlines_around_lists_absorbed() {
        // Arrange & Act
        let blocks = parse("intro\n- one\n- two\noutro", &all_rules());

        // Assert: no break nodes touch the list
        assert_eq!(
            blocks,
            vec![
                Block::Line(vec![text("intro")]),
                Block::List(vec![vec![text("one")], vec![text("two")]]),
                Block::Line(vec![text("outro")]),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        // Arrange & Act
        let blocks = parse("", &all_rules());

        // Assert
        assert!(blocks.is_empty());
    }
}

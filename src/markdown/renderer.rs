//! HTML serialization for the markdown dialect.

use super::lexer::{self, Block, Inline};

/// Trailing indicator appended inside converted links.
const LINK_ICON: &str = "<i class=\"ph ph-arrow-square-out link-icon\"></i>";

/// Capability set for the renderer.
///
/// The backend feeds two display surfaces with different dialects: the
/// analysis cards use italics and numbered items, the Q&A answers use links
/// and break collapsing. Each call site opts into exactly the rules it
/// needs through one of the presets instead of getting a divergent
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Convert `*text*` to emphasis spans.
    pub italics: bool,
    /// Convert `N. ` line prefixes to list items.
    pub numbered_items: bool,
    /// Convert `[label](url)` to anchors opening in a new context.
    pub links: bool,
    /// Normalize runs of two or more breaks to exactly two.
    pub collapse_breaks: bool,
}

impl RenderOptions {
    /// Rule set for analysis fragments (summary, skill gaps, roadmap).
    pub fn analysis() -> Self {
        Self {
            italics: true,
            numbered_items: true,
            links: false,
            collapse_breaks: false,
        }
    }

    /// Rule set for Q&A answer fragments.
    pub fn answer() -> Self {
        Self {
            italics: false,
            numbered_items: false,
            links: true,
            collapse_breaks: true,
        }
    }
}

/// Renders the constrained markdown dialect to HTML fragments.
///
/// Rendering is a pure function of the input text: no state is kept
/// between calls and the same input always produces the same fragment, so
/// a renderer can be shared freely across call sites. Any input is
/// accepted; unbalanced or malformed markers degrade to literal text
/// rather than failing.
///
/// All HTML-significant characters in literal text and attribute values
/// are escaped during serialization, so markup embedded in AI-generated
/// text renders inert.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Creates a renderer with an explicit capability set.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a renderer with the analysis rule set.
    pub fn analysis() -> Self {
        Self::new(RenderOptions::analysis())
    }

    /// Creates a renderer with the Q&A answer rule set.
    pub fn answer() -> Self {
        Self::new(RenderOptions::answer())
    }

    /// Renders raw text to an HTML fragment.
    ///
    /// # Arguments
    ///
    /// * `text`: Raw markdown-like input, possibly empty or token-free
    ///
    /// # Returns
    ///
    /// HTML fragment ready for insertion into a trusted container
    pub fn render(&self, text: &str) -> String {
        let blocks = lexer::parse(text, &self.options);
        let mut out = String::with_capacity(text.len() + text.len() / 2);

        for block in &blocks {
            match block {
                Block::Line(inlines) => write_inlines(&mut out, inlines),
                Block::Breaks(count) => {
                    let count = if self.options.collapse_breaks && *count > 2 {
                        2
                    } else {
                        *count
                    };
                    for _ in 0..count {
                        out.push_str("<br>");
                    }
                }
                Block::List(items) => {
                    out.push_str("<ul>");
                    for item in items {
                        out.push_str("<li>");
                        write_inlines(&mut out, item);
                        out.push_str("</li>");
                    }
                    out.push_str("</ul>");
                }
            }
        }

        out
    }
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape(text)),
            Inline::Strong(inner) => {
                out.push_str("<strong>");
                write_inlines(out, inner);
                out.push_str("</strong>");
            }
            Inline::Em(inner) => {
                out.push_str("<em>");
                write_inlines(out, inner);
                out.push_str("</em>");
            }
            Inline::Link { label, url } => {
                out.push_str("<a href=\"");
                out.push_str(&escape(url));
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"external-link\">");
                write_inlines(out, label);
                out.push(' ');
                out.push_str(LINK_ICON);
                out.push_str("</a>");
            }
        }
    }
}

/// Escapes HTML special characters in literal text segments.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

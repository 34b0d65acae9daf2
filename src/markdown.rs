//! Markdown-subset rendering for backend analysis text.
//!
//! The backend returns free-form AI text using a constrained markdown
//! dialect (bold, bullets, numbered items, links, line breaks). This module
//! converts that text into HTML fragments: a tokenizer scans the input once
//! into structured nodes, and a serializer emits HTML with escaping applied
//! exactly once, to literal spans only.

mod lexer;
mod renderer;

pub use renderer::{MarkdownRenderer, RenderOptions};

//! Q&A transcript page generation

use maud::{Markup, PreEscaped, html};

use crate::api::QaExchange;
use crate::components::layout::page_wrapper;
use crate::components::nav::{Tab, tabs};
use crate::markdown::MarkdownRenderer;

/// Generates the Q&A transcript page
///
/// Renders exchanges newest first. Questions are plain text (escaped by
/// Maud); answers are markdown-like backend text rendered with the answer
/// rule set and inserted as pre-built fragments.
///
/// # Arguments
///
/// * `exchanges`: Recorded exchanges, newest first
///
/// # Returns
///
/// Rendered HTML markup
pub fn generate(exchanges: &[QaExchange]) -> Markup {
    let renderer = MarkdownRenderer::answer();

    page_wrapper(
        "Q&A",
        &["assets/qa.css"],
        html! {
            header class="report-header" {
                h1 { "Resume Q&A" }
            }
            (tabs(Tab::Qa))
            main {
                @if exchanges.is_empty() {
                    p class="empty-state" {
                        "No questions asked yet. Run with --ask or --interactive to start."
                    }
                } @else {
                    div class="qa-history" {
                        @for exchange in exchanges {
                            div class="qa-entry" {
                                div class="qa-question" {
                                    i class="ph ph-user-circle" {}
                                    strong { "Q: " }
                                    span { (exchange.question) }
                                }
                                div class="qa-answer" {
                                    i class="ph ph-robot" {}
                                    strong { "A: " }
                                    span { (PreEscaped(renderer.render(&exchange.answer))) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

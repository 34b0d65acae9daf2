//! Page footer component

use maud::{Markup, html};

/// Renders the shared page footer
pub fn footer() -> Markup {
    html! {
        footer {
            p {
                "Generated by "
                span class="footer-name" { "cvlens" }
            }
        }
    }
}

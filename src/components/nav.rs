//! Report tab navigation component

use maud::{Markup, html};

/// Report pages reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Analysis,
    Jobs,
    Qa,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Analysis => "Analysis",
            Tab::Jobs => "Jobs",
            Tab::Qa => "Q&A",
        }
    }

    fn href(self) -> &'static str {
        match self {
            Tab::Analysis => "index.html",
            Tab::Jobs => "jobs.html",
            Tab::Qa => "qa.html",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tab::Analysis => "ph ph-read-cv-logo",
            Tab::Jobs => "ph ph-briefcase",
            Tab::Qa => "ph ph-chats-circle",
        }
    }
}

/// Renders tab navigation across the report pages
///
/// Displays one entry per page with the active tab highlighted. All pages
/// live in the same output directory, so links are plain file names.
///
/// # Arguments
///
/// * `active`: Tab of the page being rendered
///
/// # Returns
///
/// Tab bar markup with links and active marker
pub fn tabs(active: Tab) -> Markup {
    const ALL: [Tab; 3] = [Tab::Analysis, Tab::Jobs, Tab::Qa];

    html! {
        nav class="tab-bar" {
            @for tab in ALL {
                @if tab == active {
                    span class="tab tab-active" {
                        i class=(tab.icon()) {}
                        " " (tab.label())
                    }
                } @else {
                    a class="tab" href=(tab.href()) {
                        i class=(tab.icon()) {}
                        " " (tab.label())
                    }
                }
            }
        }
    }
}

//! Notice components for transient, dismissible-style messages
//!
//! The report surfaces backend failures and empty results as inline
//! notices instead of aborting page generation, mirroring toast-style
//! feedback in an interactive UI.

use maud::{Markup, html};

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Info => "notice notice-info",
            Severity::Warning => "notice notice-warning",
            Severity::Danger => "notice notice-danger",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Severity::Info => "ph ph-info",
            Severity::Warning => "ph ph-warning",
            Severity::Danger => "ph ph-warning-octagon",
        }
    }
}

/// Renders an inline notice with severity styling
///
/// # Arguments
///
/// * `severity`: Visual severity level
/// * `message`: Plain text message (escaped by Maud)
///
/// # Returns
///
/// Notice markup
pub fn notice(severity: Severity, message: &str) -> Markup {
    html! {
        div class=(severity.class()) {
            i class=(severity.icon()) {}
            span { (message) }
        }
    }
}

/// Renders an informational notice with pre-built inline markup
///
/// Used where parts of the message carry emphasis (e.g. result counts).
pub fn notice_markup(severity: Severity, message: Markup) -> Markup {
    html! {
        div class=(severity.class()) {
            i class=(severity.icon()) {}
            span { (message) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_escapes_message() {
        // Arrange & Act
        let html = notice(Severity::Danger, "Error <detail> & more").into_string();

        // Assert
        assert!(html.contains("notice-danger"));
        assert!(html.contains("Error &lt;detail&gt; &amp; more"));
        assert!(!html.contains("<detail>"));
    }

    #[test]
    fn test_severity_classes_differ() {
        // Arrange & Act
        let info = notice(Severity::Info, "i").into_string();
        let warning = notice(Severity::Warning, "w").into_string();

        // Assert
        assert!(info.contains("notice-info"));
        assert!(warning.contains("notice-warning"));
    }
}

//! Terminal busy indicator for in-flight backend requests.

use std::io::{self, Write};

/// Scoped busy indicator shown while a request is in flight.
///
/// Prints the message when created and clears the line when dropped, so
/// the indicator disappears on every exit path: success, handled error,
/// or unwind. Callers never clear it manually.
pub struct StatusLine {
    active: bool,
}

impl StatusLine {
    /// Shows a busy message on stderr.
    ///
    /// # Arguments
    ///
    /// * `message`: Short progress text, e.g. "Analyzing resume..."
    pub fn show(message: &str) -> Self {
        let mut stderr = io::stderr();
        // Write failures on a progress line are not worth surfacing.
        let _ = write!(stderr, "{message}");
        let _ = stderr.flush();
        Self { active: true }
    }

    /// Clears the indicator early, before the guard drops.
    pub fn finish(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if self.active {
            self.active = false;
            let mut stderr = io::stderr();
            let _ = write!(stderr, "\r\x1b[2K");
            let _ = stderr.flush();
        }
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        self.clear();
    }
}

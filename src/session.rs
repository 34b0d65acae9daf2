//! Explicit session state for an analysis run.
//!
//! The analyzed resume is carried as a value with a defined lifecycle:
//! set once the upload succeeds, consulted by job search and Q&A, cleared
//! on reset. Actions that need an analysis fail with a clear message
//! instead of reading ambient state.

use anyhow::{Result, bail};

use crate::api::{QaExchange, ResumeAnalysis};

/// The analyzed resume held by a session.
#[derive(Debug, Clone)]
pub struct AnalyzedResume {
    /// Original file name, used as the report display name.
    pub filename: String,
    /// Analysis text fields returned by the backend.
    pub analysis: ResumeAnalysis,
    /// Optional overall score, fetched separately.
    pub score: Option<String>,
}

/// Session value for one report run.
///
/// Collects the analysis result and the Q&A transcript. Exchanges are
/// stored newest first, matching the display order of the Q&A page.
#[derive(Debug, Default)]
pub struct Session {
    resume: Option<AnalyzedResume>,
    exchanges: Vec<QaExchange>,
}

impl Session {
    /// Creates an empty session with no analyzed resume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the analysis result of a successful upload.
    pub fn set_analysis(&mut self, filename: String, analysis: ResumeAnalysis) {
        self.resume = Some(AnalyzedResume {
            filename,
            analysis,
            score: None,
        });
    }

    /// Attaches a resume score to the current analysis, if any.
    pub fn set_score(&mut self, score: String) {
        if let Some(resume) = &mut self.resume {
            resume.score = Some(score);
        }
    }

    /// Returns the analyzed resume, or an error telling the user to
    /// upload one first.
    ///
    /// # Errors
    ///
    /// Returns error when no resume has been analyzed in this session.
    pub fn require_analysis(&self) -> Result<&AnalyzedResume> {
        match &self.resume {
            Some(resume) => Ok(resume),
            None => bail!("Upload and analyze a resume first"),
        }
    }

    /// Records a completed Q&A exchange, newest first.
    pub fn record_exchange(&mut self, exchange: QaExchange) {
        self.exchanges.insert(0, exchange);
    }

    /// Returns recorded exchanges, newest first.
    pub fn exchanges(&self) -> &[QaExchange] {
        &self.exchanges
    }

    /// Resets the session to its initial empty state.
    pub fn clear(&mut self) {
        self.resume = None;
        self.exchanges.clear();
    }
}

//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for cvlens.
#[derive(Debug, Clone, Parser)]
#[command(name = "cvlens", version, about, long_about = None)]
pub struct Config {
    /// Resume PDF to analyze
    pub resume: PathBuf,

    /// Output directory for the report
    #[arg(short, long, default_value = "report")]
    pub output: PathBuf,

    /// Base URL of the analysis backend
    #[arg(long, default_value = "http://localhost:8000")]
    pub backend: String,

    /// Display name for the report header (defaults to the file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Also fetch the backend's overall resume score
    #[arg(long)]
    pub score: bool,

    /// Ask a question about the resume (repeatable)
    #[arg(long, value_name = "QUESTION")]
    pub ask: Vec<String>,

    /// Keep asking questions interactively after the report is built
    #[arg(short, long)]
    pub interactive: bool,

    /// Open the generated report in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns error if the resume path does not exist or is not a PDF.
    pub fn validate(&self) -> Result<()> {
        if !self.resume.exists() {
            bail!("Resume file does not exist: {}", self.resume.display());
        }

        let is_pdf = self
            .resume
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            bail!("Please provide a PDF file, got: {}", self.resume.display());
        }

        Ok(())
    }

    /// Returns the display name from configuration or the resume file name.
    ///
    /// # Errors
    ///
    /// Returns error if the resume path has no file name component or
    /// contains invalid UTF8.
    pub fn display_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        self.resume
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| {
                format!(
                    "Cannot extract display name from path: {}",
                    self.resume.display()
                )
            })
            .map(String::from)
    }
}

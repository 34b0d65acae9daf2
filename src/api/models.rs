//! Wire types for backend requests and responses.

use serde::{Deserialize, Serialize};

/// Free-text analysis fields produced for an uploaded resume.
///
/// Every field is markdown-like prose except `job_keywords`, which is a
/// comma-separated keyword string fed to the job search.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeAnalysis {
    pub summary: String,
    pub skill_gaps: String,
    pub career_roadmap: String,
    pub job_keywords: String,
}

/// Successful response from `POST /upload-resume`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub analysis: ResumeAnalysis,
}

/// Response from `GET /resume-score`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeScore {
    pub resume_score: String,
}

/// A single job posting returned by the recommendation search.
///
/// Fields the upstream scraper could not determine arrive as empty
/// strings, so everything defaults rather than failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time_posted: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub salary_range: String,
}

/// Response from `POST /get-job-recommendations`.
///
/// An empty posting list is a valid, non-error response.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecommendations {
    pub keywords: String,
    #[serde(rename = "linkedin_jobs", default)]
    pub jobs: Vec<JobPosting>,
    pub total_found: usize,
}

/// Response from `POST /ask-question`: the echoed question and a
/// markdown-like answer.
#[derive(Debug, Clone, Deserialize)]
pub struct QaExchange {
    pub question: String,
    pub answer: String,
}

/// Body for `POST /get-job-recommendations`.
#[derive(Debug, Serialize)]
pub(super) struct JobRequest<'a> {
    pub keywords: &'a str,
}

/// Body for `POST /ask-question`.
#[derive(Debug, Serialize)]
pub(super) struct QaRequest<'a> {
    pub question: &'a str,
}

/// Error payload the backend attaches to non-success statuses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub detail: String,
}

//! Backend HTTP client.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::models::{
    ErrorBody, JobRecommendations, JobRequest, QaExchange, QaRequest, ResumeScore, UploadResponse,
};

/// Errors from a single backend call.
///
/// Transport failures and backend-reported failures are handled
/// identically by callers: the action is over, the message is shown, and
/// the user may re-trigger it. No call is ever retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    /// Builds a backend error from a non-success status and its body.
    ///
    /// Uses the payload's `detail` message when present, otherwise a
    /// generic fallback naming the status.
    fn from_status(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(error) => ApiError::Backend(error.detail),
            Err(_) => ApiError::Backend(format!("The backend returned an error (status {status})")),
        }
    }
}

/// Client for the resume-analysis backend.
///
/// Holds a connection pool, so one client is built per run and shared by
/// every call. Requests carry no client-side timeout beyond the
/// transport's defaults, and overlapping requests are independent: each
/// completes (or fails) on its own with no ordering guarantee between
/// them.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uploads a resume PDF for analysis.
    ///
    /// # Arguments
    ///
    /// * `filename`: Original file name, forwarded for server-side checks
    /// * `bytes`: Raw PDF content
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a backend-reported failure
    /// (for example a rejected file type).
    pub async fn upload_resume(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        debug!(filename, size = bytes.len(), "uploading resume");

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint("/upload-resume"))
            .multipart(form)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Fetches the backend's overall score for the analyzed resume.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or when no resume has been
    /// uploaded in this backend session.
    pub async fn resume_score(&self) -> Result<ResumeScore, ApiError> {
        debug!("fetching resume score");

        let response = self
            .http
            .get(self.endpoint("/resume-score"))
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Fetches job recommendations for a keyword string.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a backend-reported failure;
    /// an empty result list is a success.
    pub async fn job_recommendations(
        &self,
        keywords: &str,
    ) -> Result<JobRecommendations, ApiError> {
        debug!(keywords, "fetching job recommendations");

        let response = self
            .http
            .post(self.endpoint("/get-job-recommendations"))
            .json(&JobRequest { keywords })
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Asks a free-text question about the uploaded resume.
    ///
    /// The returned answer is markdown-like text for the answer renderer.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a backend-reported failure.
    pub async fn ask_question(&self, question: &str) -> Result<QaExchange, ApiError> {
        debug!(question, "asking question");

        let response = self
            .http
            .post(self.endpoint("/ask-question"))
            .json(&QaRequest { question })
            .send()
            .await?;

        Self::parse(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a response to the expected payload or an [`ApiError`].
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }
}

//! HTTP client for the resume-analysis backend.
//!
//! All backend traffic goes through [`BackendClient`]; no other module
//! performs HTTP calls. Payload shapes follow the backend's JSON contract
//! exactly.

mod client;
mod models;

pub use client::{ApiError, BackendClient};
pub use models::{
    JobPosting, JobRecommendations, QaExchange, ResumeAnalysis, ResumeScore, UploadResponse,
};

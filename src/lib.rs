//! Career insight report generator backed by a resume-analysis service.

mod api;
mod assets;
mod config;
pub mod components;
mod markdown;
pub mod pages;
mod session;
mod status;

pub use api::{
    ApiError, BackendClient, JobPosting, JobRecommendations, QaExchange, ResumeAnalysis,
    ResumeScore, UploadResponse,
};
pub use assets::write_css_assets;
pub use config::Config;
pub use markdown::{MarkdownRenderer, RenderOptions};
pub use session::{AnalyzedResume, Session};
pub use status::StatusLine;

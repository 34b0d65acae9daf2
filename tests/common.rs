//! Shared test fixtures for integration tests.
//!
//! Provides backend response payloads in the exact JSON shape the live
//! service returns, so tests exercise the same deserialization path as a
//! real run.

use cvlens::{JobRecommendations, QaExchange, UploadResponse};

/// Builds an upload response with markdown-like analysis text.
pub fn sample_upload() -> UploadResponse {
    serde_json::from_str(
        r#"{
            "message": "Resume uploaded and analyzed successfully",
            "filename": "jo_doe_cv.pdf",
            "analysis": {
                "summary": "**Strong** candidate.\n- Good X\n- Good Y",
                "skill_gaps": "Missing:\n- Kubernetes\n- Terraform",
                "career_roadmap": "1. Learn Rust\n2. Contribute to open source",
                "job_keywords": "backend engineer, rust, distributed systems"
            }
        }"#,
    )
    .expect("Should deserialize upload fixture")
}

/// Builds a job search response with two postings.
pub fn sample_jobs() -> JobRecommendations {
    serde_json::from_str(
        r#"{
            "keywords": "backend engineer, rust",
            "linkedin_jobs": [
                {
                    "job_title": "Senior Backend Engineer",
                    "company_name": "Acme",
                    "job_url": "https://jobs.test/acme/1",
                    "location": "Berlin",
                    "time_posted": "2 days ago",
                    "employment_type": "Full-time",
                    "salary_range": ""
                },
                {
                    "job_title": "Rust Developer",
                    "company_name": "Initech",
                    "job_url": "https://jobs.test/initech/7",
                    "location": "Remote",
                    "time_posted": "",
                    "employment_type": "",
                    "salary_range": "90-120k"
                }
            ],
            "total_found": 57
        }"#,
    )
    .expect("Should deserialize jobs fixture")
}

/// Builds a Q&A exchange with a markdown-like answer.
pub fn sample_exchange() -> QaExchange {
    serde_json::from_str(
        r#"{
            "question": "Which role fits best?",
            "answer": "**Backend roles**: start with [this posting](https://jobs.test/acme/1).\n- Solid Rust match\n- Growth path"
        }"#,
    )
    .expect("Should deserialize exchange fixture")
}

//! Job recommendations page generation

use maud::{Markup, html};

use crate::api::{JobPosting, JobRecommendations};
use crate::components::alerts::{Severity, notice, notice_markup};
use crate::components::layout::page_wrapper;
use crate::components::nav::{Tab, tabs};

/// Generates the job recommendations page
///
/// Shows a result count notice followed by one card per posting. An empty
/// posting list is a valid response and renders as a warning notice with
/// a suggestion, not as a failure.
///
/// # Arguments
///
/// * `recommendations`: Job search response for the session's keywords
///
/// # Returns
///
/// Rendered HTML markup
pub fn generate(recommendations: &JobRecommendations) -> Markup {
    page_body(html! {
        @if recommendations.jobs.is_empty() {
            (notice(
                Severity::Warning,
                "No jobs found. Try adjusting your resume or skills.",
            ))
        } @else {
            (notice_markup(Severity::Info, html! {
                "Found " strong { (recommendations.total_found) } " jobs matching your profile. "
                "Showing top " (recommendations.jobs.len()) " results."
            }))
            div class="job-list" {
                @for job in &recommendations.jobs {
                    (job_card(job))
                }
            }
        }
    })
}

/// Generates the job page variant for a failed fetch
///
/// The failure is terminal for the job search only; the rest of the
/// report remains usable, so the page carries a notice instead of being
/// omitted.
///
/// # Arguments
///
/// * `message`: Error description from the backend or transport
///
/// # Returns
///
/// Rendered HTML markup
pub fn generate_unavailable(message: &str) -> Markup {
    page_body(html! {
        (notice(Severity::Danger, &format!("Error fetching jobs: {message}")))
    })
}

fn page_body(content: Markup) -> Markup {
    page_wrapper(
        "Jobs",
        &["assets/jobs.css"],
        html! {
            header class="report-header" {
                h1 { "Job Recommendations" }
            }
            (tabs(Tab::Jobs))
            main {
                (content)
            }
        },
    )
}

fn job_card(job: &JobPosting) -> Markup {
    html! {
        div class="job-card" {
            h3 class="job-title" { (non_empty(&job.job_title)) }
            div class="job-company" { (non_empty(&job.company_name)) }
            div class="job-meta" {
                span class="job-location" {
                    i class="ph ph-map-pin" {}
                    " " (non_empty(&job.location))
                }
                @if !job.employment_type.is_empty() {
                    span class="job-type" { (job.employment_type) }
                }
                @if !job.time_posted.is_empty() {
                    span class="job-posted" { (job.time_posted) }
                }
                @if !job.salary_range.is_empty() {
                    span class="job-salary" { (job.salary_range) }
                }
            }
            @if !job.job_url.is_empty() {
                a class="job-link" href=(job.job_url) target="_blank" rel="noopener noreferrer" {
                    "View job "
                    i class="ph ph-arrow-square-out" {}
                }
            }
        }
    }
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

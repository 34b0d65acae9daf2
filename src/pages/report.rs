//! Analysis report page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::{Tab, tabs};
use crate::markdown::MarkdownRenderer;
use crate::session::AnalyzedResume;

/// Generates the analysis report page
///
/// Renders the backend's summary, skill gap, and career roadmap text into
/// HTML fragments with the analysis rule set and lays them out as cards.
/// The optional resume score gets its own card when present.
///
/// # Arguments
///
/// * `display_name`: Candidate or file name for the page header
/// * `resume`: Analyzed resume from the current session
///
/// # Returns
///
/// Rendered HTML markup
pub fn generate(display_name: &str, resume: &AnalyzedResume) -> Markup {
    let renderer = MarkdownRenderer::analysis();

    let summary = renderer.render(&resume.analysis.summary);
    let gaps = renderer.render(&resume.analysis.skill_gaps);
    let roadmap = renderer.render(&resume.analysis.career_roadmap);
    let score = resume.score.as_deref().map(|text| renderer.render(text));

    page_wrapper(
        "Analysis",
        &["assets/report.css"],
        html! {
            header class="report-header" {
                h1 class="candidate-name" { (display_name) }
                div class="resume-file" {
                    i class="ph ph-file-pdf" {}
                    span { (resume.filename) }
                }
            }
            (tabs(Tab::Analysis))
            main {
                (analysis_card("Summary", "ph ph-article", &summary))
                (analysis_card("Skill Gaps", "ph ph-puzzle-piece", &gaps))
                (analysis_card("Career Roadmap", "ph ph-signpost", &roadmap))
                @if let Some(score_html) = &score {
                    (analysis_card("Resume Score", "ph ph-gauge", score_html))
                }
            }
        },
    )
}

/// Renders one titled analysis card around a pre-rendered fragment.
fn analysis_card(title: &str, icon: &str, fragment: &str) -> Markup {
    html! {
        section class="analysis-card" {
            div class="card-header" {
                i class=(icon) {}
                h2 { (title) }
            }
            div class="card-content" {
                (PreEscaped(fragment))
            }
        }
    }
}

//! End-to-end report generation tests.
//!
//! Drives the same path a real run takes after the backend responds:
//! session population, page generation, and asset writing into a fresh
//! output directory.

mod common;

use cvlens::{Session, pages, write_css_assets};
use std::fs;

#[test]
fn test_full_report_generation_workflow() {
    // Arrange: backend responses already deserialized
    let temp_dir = tempfile::tempdir().expect("Should create temp directory");
    let output = temp_dir.path();

    let upload = common::sample_upload();
    let jobs = common::sample_jobs();

    let mut session = Session::new();
    session.set_analysis(upload.filename, upload.analysis);
    session.record_exchange(common::sample_exchange());

    // Act: generate every page and the shared assets
    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).expect("Should create assets directory");
    write_css_assets(&assets_dir).expect("Should write CSS assets");

    let resume = session.require_analysis().expect("Analysis should be set");
    let report = pages::report::generate("Jo Doe", resume);
    let jobs_page = pages::jobs::generate(&jobs);
    let qa_page = pages::qa::generate(session.exchanges());

    fs::write(output.join("index.html"), report.into_string()).expect("Should write report");
    fs::write(output.join("jobs.html"), jobs_page.into_string()).expect("Should write jobs");
    fs::write(output.join("qa.html"), qa_page.into_string()).expect("Should write qa");

    // Assert: all pages and assets exist
    for name in ["index.html", "jobs.html", "qa.html"] {
        assert!(output.join(name).exists(), "{name} should be created");
    }
    assert!(assets_dir.join("report.css").exists(), "Assets should be bundled");

    // Assert: every page links the other tabs
    let report = fs::read_to_string(output.join("index.html")).expect("Should read report");
    assert!(report.contains("href=\"jobs.html\""));
    assert!(report.contains("href=\"qa.html\""));
}

#[test]
fn test_uploaded_summary_renders_bold_and_list() {
    // Arrange: summary is "**Strong** candidate.\n- Good X\n- Good Y"
    let upload = common::sample_upload();
    let mut session = Session::new();
    session.set_analysis(upload.filename, upload.analysis);

    // Act
    let resume = session.require_analysis().expect("Analysis should be set");
    let html = pages::report::generate("Jo Doe", resume).into_string();

    // Assert: exactly one bold span around "Strong"
    assert!(html.contains("<strong>Strong</strong> candidate."));
    assert_eq!(
        html.matches("<strong>Strong</strong>").count(),
        1,
        "Summary should carry a single bold span"
    );

    // Assert: one list container with both items
    assert!(
        html.contains("<ul><li>Good X</li><li>Good Y</li></ul>"),
        "Bullets should collapse into one container: {html}"
    );
}

#[test]
fn test_qa_page_reflects_each_recorded_exchange() {
    // Arrange
    let mut session = Session::new();
    let upload = common::sample_upload();
    session.set_analysis(upload.filename, upload.analysis);

    // Act: page regenerated after each exchange, as the question loop does
    let before = pages::qa::generate(session.exchanges()).into_string();
    session.record_exchange(common::sample_exchange());
    let after = pages::qa::generate(session.exchanges()).into_string();

    // Assert
    assert!(before.contains("No questions asked yet"));
    assert!(after.contains("Which role fits best?"));
    assert!(
        after.contains("<strong>Backend roles</strong>"),
        "Answer markdown should be rendered"
    );
    assert!(
        after.contains("href=\"https://jobs.test/acme/1\""),
        "Answer links should be converted"
    );
}

#[test]
fn test_jobs_page_reports_counts_and_links() {
    // Arrange
    let jobs = common::sample_jobs();

    // Act
    let html = pages::jobs::generate(&jobs).into_string();

    // Assert
    assert!(html.contains("<strong>57</strong>"), "Should show total found");
    assert!(html.contains("Senior Backend Engineer"));
    assert!(html.contains("Rust Developer"));
    assert!(html.contains("href=\"https://jobs.test/initech/7\""));
}

use anyhow::{Context, Result};
use cvlens::{BackendClient, Config, Session, StatusLine, pages, write_css_assets};
use maud::Markup;
use std::fs;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = BackendClient::new(config.backend.clone());
    let mut session = Session::new();

    // Upload and analyze. Without an analysis nothing downstream can run,
    // so this is the one failure that ends the run.
    let file_name = config
        .resume
        .file_name()
        .and_then(|n| n.to_str())
        .context("Resume path has no valid file name")?
        .to_string();
    let bytes = tokio::fs::read(&config.resume)
        .await
        .with_context(|| format!("Failed to read {}", config.resume.display()))?;

    let upload = {
        let busy = StatusLine::show("Analyzing your resume...");
        let result = client.upload_resume(&file_name, bytes).await;
        busy.finish();
        result.context("Error uploading resume")?
    };
    println!("Resume \"{}\" analyzed successfully", upload.filename);
    session.set_analysis(upload.filename, upload.analysis);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    // Job search and optional score are independent requests; neither
    // blocks the other and each failure is terminal for its own section
    // only.
    let keywords = session.require_analysis()?.analysis.job_keywords.clone();
    let jobs_page = if config.score {
        let busy = StatusLine::show("Fetching job recommendations and resume score...");
        let (jobs, score) = tokio::join!(
            client.job_recommendations(&keywords),
            client.resume_score()
        );
        busy.finish();

        match score {
            Ok(score) => session.set_score(score.resume_score),
            Err(error) => warn!("Error fetching resume score: {error}"),
        }
        jobs
    } else {
        let busy = StatusLine::show("Fetching job recommendations...");
        let jobs = client.job_recommendations(&keywords).await;
        busy.finish();
        jobs
    };

    let jobs_markup = match &jobs_page {
        Ok(recommendations) => {
            println!(
                "Found {} jobs matching your profile",
                recommendations.total_found
            );
            pages::jobs::generate(recommendations)
        }
        Err(error) => {
            warn!("Error fetching jobs: {error}");
            pages::jobs::generate_unavailable(&error.to_string())
        }
    };
    write_page(&config.output, "jobs.html", jobs_markup)?;

    let display_name = config.display_name()?;
    write_page(
        &config.output,
        "index.html",
        pages::report::generate(&display_name, session.require_analysis()?),
    )?;
    write_page(&config.output, "qa.html", pages::qa::generate(session.exchanges()))?;

    for question in &config.ask {
        ask_question(&client, &mut session, question).await;
        write_page(&config.output, "qa.html", pages::qa::generate(session.exchanges()))?;
    }

    if config.interactive {
        run_question_loop(&config, &client, &mut session).await?;
    }

    let index_path = config.output.join("index.html");
    println!("Generated report: {}", index_path.display());

    if config.open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}

/// Reads questions from stdin until a blank line or end of input.
///
/// Each answered question rewrites the Q&A page immediately, so the
/// report stays current while the loop runs. A failed question is
/// reported and the loop continues.
async fn run_question_loop(
    config: &Config,
    client: &BackendClient,
    session: &mut Session,
) -> Result<()> {
    println!("Ask questions about the resume (blank line to finish):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("Failed to read question")? else {
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        ask_question(client, session, question).await;
        write_page(&config.output, "qa.html", pages::qa::generate(session.exchanges()))?;
    }

    Ok(())
}

/// Sends one question to the backend and records the exchange.
///
/// Failures are terminal for this question only: the error is surfaced
/// and the session is left unchanged.
async fn ask_question(client: &BackendClient, session: &mut Session, question: &str) {
    let busy = StatusLine::show("Processing your question...");
    let result = client.ask_question(question).await;
    busy.finish();

    match result {
        Ok(exchange) => {
            println!("Answered: {}", exchange.question);
            session.record_exchange(exchange);
        }
        Err(error) => warn!("Error processing question: {error}"),
    }
}

/// Writes a rendered page into the output directory.
fn write_page(output: &Path, name: &str, markup: Markup) -> Result<()> {
    let path = output.join(name);
    fs::write(&path, markup.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))?;
    Ok(())
}

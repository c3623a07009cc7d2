//! CLI command implementations.
//!
//! The binary is a thin orchestration layer over the library: it loads
//! settings, builds one pipeline per invocation and prints the envelopes.
//! A transcript file (or stdin) stands in for the external fetch layer.

use std::io::Read;
use std::path::{Path, PathBuf};

use console::style;
use tracing::info;

use crate::config::Settings;
use crate::llm::{
    build_context, prompts, validate_config, ArticleLength, GenerationPipeline,
};
use crate::types::{Result, TubeError, VideoMetadata};

/// Read the transcript from a file, or from stdin when the path is `-`.
fn read_transcript(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Pre-flight credential check for the configured provider. No network I/O.
pub fn check(settings: &Settings) -> Result<()> {
    let provider = settings.llm.provider;
    let result = validate_config(provider.as_str(), settings.llm.api_key.as_deref());

    if result.valid {
        println!(
            "{} provider {} is configured and ready",
            style("✓").green().bold(),
            style(provider).cyan()
        );
        Ok(())
    } else {
        let message = result.error.unwrap_or_else(|| "invalid configuration".into());
        println!("{} {}", style("✗").red().bold(), message);
        Err(TubeError::Config(message))
    }
}

/// Run the full sequential analysis: summary, topics, article.
pub async fn analyze(
    settings: &Settings,
    transcript_path: &PathBuf,
    title: Option<&str>,
    length: ArticleLength,
) -> Result<()> {
    let transcript = read_transcript(transcript_path)?;

    let config = settings.llm.to_generation_config();
    let pipeline = GenerationPipeline::from_config(&config)?;
    info!(
        provider = pipeline.backend_name(),
        model = pipeline.model(),
        "starting analysis"
    );

    println!(
        "{}",
        style(format!(
            "Analyzing with {} ({})...",
            pipeline.backend_name(),
            pipeline.model()
        ))
        .dim()
    );

    let analysis = pipeline.run_analysis(&transcript, title, length).await?;

    println!("\n{}", style("Summary").yellow().bold());
    println!("{}\n", analysis.summary);
    println!("{}", style("Topics").yellow().bold());
    println!("{}\n", analysis.topics);
    println!("{}", style("Article").yellow().bold());
    println!("{}", analysis.article);

    Ok(())
}

/// Answer one follow-up question against the transcript's built context.
pub async fn chat(
    settings: &Settings,
    transcript_path: &PathBuf,
    title: Option<&str>,
    question: &str,
    with_summary: bool,
) -> Result<()> {
    let transcript = read_transcript(transcript_path)?;

    let mut metadata = VideoMetadata::from_transcript(transcript);
    metadata.title = title.map(str::to_string);

    let config = settings.llm.to_generation_config();
    let pipeline = GenerationPipeline::from_config(&config)?;

    // Optionally generate a summary first so the context carries one, as it
    // would after a completed analysis.
    let summary = if with_summary {
        let result = pipeline
            .generate_summary(&metadata.transcript, prompts::SUMMARY_PROMPT_TEMPLATE)
            .await;
        result.payload().map(str::to_string)
    } else {
        None
    };

    let context = build_context(&metadata, summary.as_deref());
    let answer = pipeline.generate_chat_answer(&context, question).await;

    match answer.into_result() {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", style("✗").red().bold(), e);
            Err(e)
        }
    }
}

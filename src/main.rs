use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tubetalk::config::{ConfigLoader, Settings};
use tubetalk::llm::{ArticleLength, Provider};
use tubetalk::types::Result;

#[derive(Parser)]
#[command(name = "tubetalk")]
#[command(
    version,
    about = "LLM generation pipeline for YouTube video analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "LLM provider (openai, ollama, groq, huggingface)")]
    provider: Option<Provider>,

    #[arg(long, help = "Model to use (provider default when omitted)")]
    model: Option<String>,

    #[arg(long, env = "TUBETALK_API_KEY", help = "API key for hosted providers")]
    api_key: Option<String>,

    #[arg(long, help = "Sampling temperature (0.0-1.0)")]
    temperature: Option<f32>,

    #[arg(long, help = "Maximum tokens to generate")]
    max_tokens: Option<u32>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configured provider without any network call
    Check,

    /// Generate summary, topics and article from a transcript
    Analyze {
        #[arg(
            long,
            short,
            default_value = "-",
            help = "Transcript file ('-' for stdin)"
        )]
        transcript: PathBuf,
        #[arg(long, help = "Title the generated article accordingly")]
        title: Option<String>,
        #[arg(long, default_value = "medium", help = "Article length: short, medium, long")]
        length: ArticleLength,
    },

    /// Ask a question about a transcript
    Chat {
        #[arg(help = "The question to ask")]
        question: String,
        #[arg(
            long,
            short,
            default_value = "-",
            help = "Transcript file ('-' for stdin)"
        )]
        transcript: PathBuf,
        #[arg(long, help = "Video title to include in the context")]
        title: Option<String>,
        #[arg(long, help = "Generate a summary first and include it in the context")]
        with_summary: bool,
    },
}

/// Merge command-line overrides into the loaded settings.
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(provider) = cli.provider {
        settings.llm.provider = provider;
    }
    if let Some(model) = &cli.model {
        settings.llm.model = Some(model.clone());
    }
    if let Some(api_key) = &cli.api_key {
        settings.llm.api_key = Some(api_key.clone());
    }
    if let Some(temperature) = cli.temperature {
        settings.llm.temperature = temperature;
    }
    if let Some(max_tokens) = cli.max_tokens {
        settings.llm.max_tokens = max_tokens;
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = ConfigLoader::load()?;
    apply_overrides(&mut settings, &cli);
    settings.validate()?;

    match &cli.command {
        Commands::Check => tubetalk::cli::check(&settings),
        Commands::Analyze {
            transcript,
            title,
            length,
        } => tubetalk::cli::analyze(&settings, transcript, title.as_deref(), *length).await,
        Commands::Chat {
            question,
            transcript,
            title,
            with_summary,
        } => {
            tubetalk::cli::chat(
                &settings,
                transcript,
                title.as_deref(),
                question,
                *with_summary,
            )
            .await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", console::style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

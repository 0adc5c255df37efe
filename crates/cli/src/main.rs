//! # dinkbot-cli
//!
//! Command-line interface for the pickleball FAQ coach: a one-shot `ask`
//! command and an interactive `chat` loop. Without an OpenRouter credential
//! both run in KB-only mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dinkbot::{providers::ai::openrouter::OpenRouterProvider, CoachClient, CoachClientBuilder};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// OpenRouter API key; leave unset to answer from the knowledge base only
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OpenRouter API root
    #[arg(long, env = "OPENROUTER_API_BASE", default_value = "https://openrouter.ai/api/v1")]
    api_base: String,

    /// Model identifier to request
    #[arg(long, env = "OPENROUTER_MODEL", default_value = "openrouter/auto")]
    model: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        question: String,
    },
    /// Start an interactive chat session
    Chat,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let coach = build_client(&cli)?;

    match &cli.command {
        Commands::Ask { question } => {
            println!("{}", coach.answer(question).await);
        }
        Commands::Chat => {
            chat_loop(&coach).await?;
        }
    }

    Ok(())
}

/// Builds a `CoachClient` from the CLI options.
fn build_client(cli: &Cli) -> Result<CoachClient> {
    let mut builder = CoachClientBuilder::new();

    match cli.api_key.as_deref().filter(|key| !key.is_empty()) {
        Some(key) => {
            let provider = OpenRouterProvider::new(
                cli.api_base.clone(),
                key.to_string(),
                cli.model.clone(),
            )?;
            builder = builder.ai_provider(Box::new(provider));
        }
        None => {
            eprintln!("OPENROUTER_API_KEY is not set; answering from the knowledge base only.");
        }
    }

    Ok(builder.build())
}

/// Reads questions from stdin until EOF or an empty line.
async fn chat_loop(coach: &CoachClient) -> Result<()> {
    println!("Ask a pickleball question (empty line to quit).");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        println!("{}\n", coach.answer(question).await);
    }

    Ok(())
}

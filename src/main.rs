use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use skycast_cli::{
    Assistant, Conversation, QuickAnswerProvider, Reply, display_banner,
    handle_input_with_history, print_help, print_reply, print_suggestions, print_transcript,
};
use skycast_core::{ChatProvider, WeatherReading, detect_activity, load_reading};
use skycast_openai::OpenAiClient;

#[derive(Parser)]
#[command(name = "skycast")]
#[command(about = "Weather-aware activity assistant", long_about = None)]
struct Cli {
    /// JSON file with the current weather reading
    #[arg(short, long)]
    reading: PathBuf,

    /// Ask a single question and exit
    #[arg(short, long)]
    ask: Option<String>,

    /// Who answers questions the activity rules don't cover
    #[arg(long, value_enum, default_value_t = ProviderChoice::Auto)]
    provider: ProviderChoice,

    /// Seconds to wait for the chat provider before falling back
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print replies as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProviderChoice {
    /// OpenAI when OPENAI_API_KEY is set, otherwise none
    Auto,
    Openai,
    /// Local keyword answers, no network
    Quick,
    /// Local briefing only
    #[value(name = "none")]
    Off,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let reading = load_reading(&cli.reading)
        .await
        .with_context(|| format!("failed to load weather reading from {}", cli.reading.display()))?;

    let assistant = match build_provider(cli.provider)? {
        Some(provider) => {
            info!(provider = provider.model_id(), "chat provider enabled");
            Assistant::with_provider(provider)
        }
        None => Assistant::offline(),
    }
    .with_timeout(Duration::from_secs(cli.timeout));

    // Handle a single question
    if let Some(question) = cli.ask {
        let reply = assistant.respond(&question, &reading).await;
        emit(&reply, cli.json)?;
        return Ok(());
    }

    // Interactive mode
    run_interactive(&assistant, &reading, cli.json).await
}

fn build_provider(choice: ProviderChoice) -> Result<Option<Arc<dyn ChatProvider>>> {
    let provider: Option<Arc<dyn ChatProvider>> = match choice {
        ProviderChoice::Auto => match OpenAiClient::from_env() {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                debug!(error = %e, "OpenAI not configured, answering locally");
                None
            }
        },
        ProviderChoice::Openai => Some(Arc::new(
            OpenAiClient::from_env().context("OpenAI provider requested")?,
        )),
        ProviderChoice::Quick => Some(Arc::new(QuickAnswerProvider::new())),
        ProviderChoice::Off => None,
    };

    Ok(provider)
}

async fn run_interactive(
    assistant: &Assistant,
    reading: &WeatherReading,
    json: bool,
) -> Result<()> {
    display_banner(reading);

    let mut conversation = Conversation::welcome(&reading.city);
    if let Some(greeting) = conversation.greeting() {
        println!("{} {}", "🤖".blue(), greeting.text);
        println!();
    }
    print_suggestions();

    let mut history = Vec::new();

    loop {
        let input = handle_input_with_history(&mut history).await?;

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();

        // Handle special commands
        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "👋 Goodbye!".green());
            break;
        }

        if input_lower == "help" {
            print_help();
            if conversation.is_fresh() {
                print_suggestions();
            }
            continue;
        }

        if input_lower == "history" {
            print_transcript(&conversation);
            continue;
        }

        conversation.push_user(input.as_str());

        if assistant.has_provider() && detect_activity(&input).is_none() {
            println!("{} Thinking...", "🤖".blue());
        }

        let reply = assistant.respond(&input, reading).await;
        emit(&reply, json)?;
        conversation.push_reply(&reply);
    }

    Ok(())
}

fn emit(reply: &Reply, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reply)?);
    } else {
        print_reply(reply);
    }
    Ok(())
}

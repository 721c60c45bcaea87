//! Command-line emoji search
//!
//! Usage:
//!   emoji-search happy birthday party
//!   emoji-search --json rainy monday
//!
//! Required environment variables:
//! - OPENAI_API_KEY
//!
//! Optional:
//! - OPENAI_API_BASE (defaults to https://api.openai.com/v1)
//! - OPENAI_MODEL (defaults to gpt-4o-mini)
//! - PREFERRED_LANGUAGE (defaults to en; supported: en, es, zh)

use anyhow::{Context, Result};
use emoji_search::{config::Config, search};

fn print_usage() {
    eprintln!("Usage: emoji-search [--json] <description of the emoji>");
    eprintln!();
    eprintln!("Example: emoji-search celebrating a new job");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emoji_search=info".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }
    let as_json = args.iter().any(|arg| arg == "--json");
    let query = args
        .iter()
        .filter(|arg| arg.as_str() != "--json")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    if query.trim().is_empty() {
        print_usage();
        return Ok(());
    }

    let config = Config::from_env()?;
    let client = reqwest::Client::new();

    let results = search(&client, &query, &config)
        .await
        .context("Failed to search emojis")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{} - {}", result, result.description);
        }
    }

    Ok(())
}

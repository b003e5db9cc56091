//! # Codepal Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Codepal CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the `serve` or `chat` handler
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! codepal --help
//!
//! # Serve the HTTP API with request logging
//! codepal -v serve --port 5000
//!
//! # Chat in the terminal
//! codepal chat --simple
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use codepal::{chat, server};
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "codepal",
    about = "🤖 Codepal: a rule-based programming helper chatbot",
    long_about = "Answers programming questions, reviews code snippets, suggests learning paths,\n\
                  and does small talk, either over a JSON HTTP API or in the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Serve the chatbot over HTTP.
    #[command(alias = "s")]
    Serve(server::ServeArgs),
    /// Chat with the bot in the terminal.
    #[command(alias = "c")]
    Chat(chat::ChatArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Serve(args) => server::handle_serve(args).await,
        Commands::Chat(args) => chat::handle_chat(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

//! # Codepal Chat Server
//!
//! File: cli/src/server/mod.rs
//!
//! ## Overview
//!
//! Serves a chatbot over a small JSON API. Two route sets exist, one per
//! chatbot variant:
//! - full (default): chat, history, problem solving, code analysis, learning
//!   resources, code examples, stats
//! - simple (`--simple`): chat, help, jokes, math, dictionary, history
//!
//! ## Architecture
//!
//! - `config.rs`: `serve` arguments and configuration merging
//! - `state.rs`: shared state and the session log
//! - `envelope.rs`: JSON error envelopes and request-body decoding
//! - `handlers/`: one handler module per variant
//! - `routes.rs`: router assembly, middleware, port binding, shutdown
//!
//! ## Examples
//!
//! ```bash
//! codepal serve --port 5000
//! curl -s -X POST localhost:5000/api/chat -d '{"message": "Help with TypeError"}'
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

pub mod config;
pub mod envelope;
pub mod handlers;
pub mod routes;
pub mod state;

/// # Handle Serve Command (`handle_serve`)
///
/// Entry point of `codepal serve`: merges configuration, then runs the server
/// until shutdown.
///
/// ## Errors
///
/// Propagates configuration and server startup failures.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_and_merge_config(&args)?;
    info!("Effective server config: {:?}", config);

    routes::run_server(config).await
}

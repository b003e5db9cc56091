//! # Codepal HTTP Server Logic
//!
//! File: cli/src/server/routes.rs
//!
//! ## Overview
//!
//! Builds the axum router for the configured chatbot variant and runs it:
//! port selection with fallback, middleware, and graceful shutdown.
//!
//! ## Architecture
//!
//! Middleware, outermost first:
//! 1. `TraceLayer`: request/response spans at INFO
//! 2. `CorsLayer`: permissive when enabled, a no-op otherwise
//! 3. `CatchPanicLayer`: a panicking handler becomes a 500 envelope
//!
//! Unmatched paths hit the `not_found` fallback and get a 404 envelope; a
//! known path called with the wrong method gets a 405 envelope.
//!
use super::config::{ServerConfig, Variant};
use super::envelope::ApiError;
use super::handlers::{full, method_not_allowed, not_found, simple};
use super::state::{AppState, SharedState};
use crate::core::error::Result;
use crate::responder::canned::ReplyPicker;
use crate::responder::chatbot::{BotIdentity, Chatbot, SimpleChatbot};
use anyhow::Context;
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// Consecutive ports tried before giving up.
pub const MAX_PORT_ATTEMPTS: u16 = 10;

/// # Run Server (`run_server`)
///
/// Binds the first free port at or above `config.port`, prints the startup
/// banner, and serves until Ctrl+C or SIGTERM.
///
/// ## Errors
///
/// Returns an error if no port could be bound or the server fails.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let listener = bind_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read the bound address")?;

    let app = create_app(&config);

    println!("\n=================================================================");
    println!("🤖 Chatbot:           {} ({:?})", config.name, config.variant);
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    match config.seed {
        Some(seed) => println!("🎲 Reply seed:        {}", seed),
        None => println!("🎲 Reply seed:        random"),
    }
    println!("=================================================================\n");

    info!("Starting {:?} chatbot server on {}", config.variant, addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Bind Available Port (`bind_available_port`)
///
/// Tries `start_port`, then the following ports, up to `max_attempts` in total.
/// The bound listener is returned so the port cannot be taken in between.
pub async fn bind_available_port(
    host: IpAddr,
    start_port: u16,
    max_attempts: u16,
) -> Result<TcpListener> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                match current_port.checked_add(1) {
                    Some(next) => current_port = next,
                    None => break,
                }
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        host,
        start_port,
        max_attempts
    )
}

/// Builds the complete application for `config`: routes, state, middleware.
pub fn create_app(config: &ServerConfig) -> Router {
    let identity = BotIdentity::named(config.name.clone());
    let picker = ReplyPicker::from_seed(config.seed);

    let router = match config.variant {
        Variant::Full => full_router(AppState::shared(
            Chatbot::new(identity, picker),
            config.history_limit,
        )),
        Variant::Simple => simple_router(AppState::shared(
            SimpleChatbot::new(identity, picker),
            config.history_limit,
        )),
    };

    with_middleware(router, config.enable_cors)
}

pub fn full_router(state: SharedState<Chatbot>) -> Router {
    Router::new()
        .route("/api/health", get(full::health))
        .route("/api/chat", post(full::chat))
        .route("/api/history", get(full::history))
        .route("/api/clear", post(full::clear))
        .route("/api/suggestions", get(full::suggestions))
        .route("/api/chatbot-info", get(full::chatbot_info))
        .route("/api/solve-problem", post(full::solve_problem))
        .route("/api/analyze-code", post(full::analyze_code))
        .route("/api/learning-resources", get(full::learning_resources))
        .route("/api/learning-path", post(full::learning_path))
        .route("/api/code-example", post(full::code_example))
        .route("/api/stats", get(full::stats))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

pub fn simple_router(state: SharedState<SimpleChatbot>) -> Router {
    Router::new()
        .route("/api/chat", post(simple::chat))
        .route("/api/help", get(simple::help))
        .route("/api/joke", get(simple::joke))
        .route("/api/math", post(simple::math))
        .route("/api/dictionary", post(simple::dictionary))
        .route("/api/history", get(simple::history))
        .route("/api/clear", post(simple::clear))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

/// Wraps `router` in tracing, CORS, and panic recovery.
pub fn with_middleware(router: Router, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router.layer(
        ServiceBuilder::new()
            .layer(trace_layer)
            .layer(cors_layer)
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);
    ApiError::Internal.into_response()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_bind_available_port_start_is_free() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let listener = bind_available_port(host, 0, 1).await?;
        assert_eq!(listener.local_addr()?.ip(), host);
        Ok(())
    }

    #[tokio::test]
    async fn test_bind_available_port_start_occupied() -> Result<()> {
        let host: IpAddr = Ipv4Addr::LOCALHOST.into();
        let occupied = TcpListener::bind(SocketAddr::new(host, 0)).await?;
        let start_port = occupied.local_addr()?.port();

        match bind_available_port(host, start_port, 5).await {
            Ok(listener) => {
                let port = listener.local_addr()?.port();
                assert!(port > start_port);
                assert!(port < start_port.saturating_add(5));
            }
            // Every following port may be taken on a busy machine.
            Err(e) => assert!(e.to_string().contains("Could not find an available port")),
        }
        Ok(())
    }

    #[test]
    fn test_create_app_builds_both_variants() {
        let full = create_app(&ServerConfig::default());
        let simple = create_app(&ServerConfig {
            variant: Variant::Simple,
            enable_cors: false,
            ..ServerConfig::default()
        });
        assert_ne!(format!("{:?}", full), "");
        assert_ne!(format!("{:?}", simple), "");
    }

    #[test]
    fn test_panics_become_internal_errors() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

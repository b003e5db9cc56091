//! # Shared Server State
//!
//! File: cli/src/server/state.rs
//!
//! ## Overview
//!
//! Everything a request handler may touch lives in one `AppState`, shared
//! behind an `Arc`. The chatbot carries its own atomic counters; the session
//! log is the only mutex-guarded collection.
//!
//! The session log is append-only between clears. Reads return the most
//! recent entries in chronological order together with the total count.
//!
use chrono::Local;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Default number of exchanges returned by `GET /api/history`.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// One user message and the reply it received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exchange {
    pub user: String,
    pub bot: String,
    pub timestamp: String,
}

/// ISO-8601 local time with microseconds, as used in every response envelope.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Mutex<Vec<Exchange>>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, user: impl Into<String>, bot: impl Into<String>) {
        let exchange = Exchange {
            user: user.into(),
            bot: bot.into(),
            timestamp: timestamp(),
        };
        let mut entries = self.entries.lock();
        entries.push(exchange);
        debug!("Session log now holds {} exchange(s)", entries.len());
    }

    /// # Recent Exchanges (`recent`)
    ///
    /// ## Returns
    ///
    /// * `(Vec<Exchange>, usize)`: The last `min(total, limit)` exchanges, oldest
    ///   first, and the total number of exchanges logged. A limit of zero
    ///   returns no entries.
    pub fn recent(&self, limit: usize) -> (Vec<Exchange>, usize) {
        let entries = self.entries.lock();
        let total = entries.len();
        let start = total.saturating_sub(limit);
        (entries[start..].to_vec(), total)
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// State shared by every handler of one chatbot variant.
#[derive(Debug)]
pub struct AppState<B> {
    pub bot: B,
    pub log: SessionLog,
    pub history_limit: usize,
}

pub type SharedState<B> = Arc<AppState<B>>;

impl<B> AppState<B> {
    pub fn new(bot: B, history_limit: usize) -> Self {
        Self {
            bot,
            log: SessionLog::new(),
            history_limit,
        }
    }

    pub fn shared(bot: B, history_limit: usize) -> SharedState<B> {
        Arc::new(Self::new(bot, history_limit))
    }
}

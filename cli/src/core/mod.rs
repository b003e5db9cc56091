//! # Codepal Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the responder
//! engine, the HTTP server, and the command-line entry point.
//!
//! ## Architecture
//!
//! - `config`: Locating and parsing the optional TOML configuration file
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CodepalError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;

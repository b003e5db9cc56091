//! # Codepal Library
//!
//! File: cli/src/lib.rs
//!
//! The responder engine, its HTTP server, and shared infrastructure. The
//! `codepal` binary in `main.rs` is a thin command-line layer over this crate.
//!
pub mod chat;
pub mod core;
pub mod responder;
pub mod server;

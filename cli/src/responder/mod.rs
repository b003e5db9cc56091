//! # Codepal Responder Engine
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! Turns free text into replies. Nothing here does I/O: every module works on
//! static tables and the text it is given, so it can be driven from the HTTP
//! server, the interactive `chat` command, or tests alike.
//!
//! ## Architecture
//!
//! - `lexicon`: static tables (domains, resources, paths, dictionary, ...)
//! - `intent`: ordered trigger tables and the classifier
//! - `canned`: randomized canned replies and the seedable picker
//! - `problem`: problem solving, tips, and code examples
//! - `analyzer`: heuristic code review
//! - `learning`: learning resources and paths
//! - `math`: one-operator arithmetic
//! - `dictionary`: word definitions
//! - `chatbot`: the full and simple dispatchers
//!
pub mod analyzer;
pub mod canned;
pub mod chatbot;
pub mod dictionary;
pub mod intent;
pub mod learning;
pub mod lexicon;
pub mod math;
pub mod problem;

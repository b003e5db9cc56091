//! # Codepal Server Configuration
//!
//! File: cli/src/server/config.rs
//!
//! ## Overview
//!
//! Defines the `serve` command-line arguments and merges them with the
//! optional configuration file into the effective `ServerConfig`.
//!
//! ## Architecture
//!
//! Merge rules:
//! - A command-line value wins when it differs from its clap default.
//! - Otherwise the file value is used, if present.
//! - `--no-cors` and `--simple` always win when given.
//! - `history_limit` and `name` only come from the file.
//!
//! An invalid `host` string in the file falls back to the default with a
//! warning rather than failing startup.
//!
//! ## Examples
//!
//! ```bash
//! # Defaults: full chatbot on 127.0.0.1:5000 with CORS
//! codepal serve
//!
//! # Simple chatbot on every interface with deterministic replies
//! codepal serve --simple --host 0.0.0.0 --seed 42
//! ```
//!
use crate::core::config::{self, FileConfig};
use crate::core::error::{CodepalError, Result};
use crate::responder::chatbot::DEFAULT_NAME;
use crate::server::state::DEFAULT_HISTORY_LIMIT;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

pub const DEFAULT_PORT: u16 = 5000;

/// # Serve Arguments (`ServeArgs`)
///
/// Command-line arguments of `codepal serve`.
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on. The next free port is used if it is taken.
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Disable permissive CORS headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Serve the simple chatbot (math, jokes, dictionary) instead of the full one.
    #[arg(long)]
    pub simple: bool,

    /// Seed for reply selection. Omit for random replies.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file to use instead of the default lookup.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

/// Which chatbot and route set the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Full,
    Simple,
}

impl FromStr for Variant {
    type Err = CodepalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "full" => Ok(Variant::Full),
            "simple" => Ok(Variant::Simple),
            other => Err(CodepalError::UnknownVariant(other.to_string())),
        }
    }
}

/// The effective server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    pub variant: Variant,
    pub seed: Option<u64>,
    pub history_limit: usize,
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            enable_cors: true,
            variant: Variant::Full,
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    fn from_args(args: &ServeArgs) -> Self {
        Self {
            port: args.port,
            host: args.host,
            enable_cors: !args.no_cors,
            variant: if args.simple {
                Variant::Simple
            } else {
                Variant::Full
            },
            seed: args.seed,
            ..Self::default()
        }
    }

    /// Applies `file` underneath `args` following the merge rules above.
    pub fn merge(args: &ServeArgs, file: FileConfig) -> Result<Self> {
        let cli_defaults = ServeArgs::parse_from([""]);
        let mut config = Self::from_args(args);

        if args.port == cli_defaults.port {
            if let Some(port) = file.port {
                config.port = port;
            }
        }
        if args.host == cli_defaults.host {
            if let Some(host) = &file.host {
                match host.parse() {
                    Ok(ip) => config.host = ip,
                    Err(e) => warn!(
                        "Invalid host IP '{}' in config file ({}), using default {}",
                        host, e, config.host
                    ),
                }
            }
        }
        if !args.no_cors {
            if let Some(enable_cors) = file.enable_cors {
                config.enable_cors = enable_cors;
            }
        }
        if !args.simple {
            if let Some(variant) = &file.variant {
                config.variant = variant.parse()?;
            }
        }
        if args.seed.is_none() {
            config.seed = file.seed;
        }
        if let Some(limit) = file.history_limit {
            config.history_limit = limit;
        }
        if let Some(name) = file.name {
            config.name = name;
        }

        Ok(config)
    }
}

/// # Load and Merge Configuration (`load_and_merge_config`)
///
/// ## Errors
///
/// Fails when an explicit `--config` file is missing, or a found file cannot
/// be parsed or names an unknown variant.
pub fn load_and_merge_config(args: &ServeArgs) -> Result<ServerConfig> {
    let file = config::load_config(args.config.as_deref())?;
    let merged = ServerConfig::merge(args, file)?;
    debug!("Merged server config: {:?}", merged);
    Ok(merged)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> ServeArgs {
        ServeArgs::parse_from(std::iter::once("serve").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::merge(&args(&[]), FileConfig::default()).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn test_file_fills_default_arguments() {
        let file = FileConfig {
            port: Some(9090),
            host: Some("0.0.0.0".into()),
            enable_cors: Some(false),
            variant: Some("simple".into()),
            seed: Some(3),
            history_limit: Some(5),
            name: Some("Rusty".into()),
        };
        let config = ServerConfig::merge(&args(&[]), file).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert!(!config.enable_cors);
        assert_eq!(config.variant, Variant::Simple);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.name, "Rusty");
    }

    #[test]
    fn test_explicit_arguments_override_file() {
        let file = FileConfig {
            port: Some(9090),
            host: Some("10.0.0.1".into()),
            enable_cors: Some(true),
            seed: Some(3),
            ..FileConfig::default()
        };
        let config = ServerConfig::merge(
            &args(&["--port", "6000", "--host", "0.0.0.0", "--no-cors", "--seed", "9"]),
            file,
        )
        .unwrap();
        assert_eq!(config.port, 6000);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert!(!config.enable_cors);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_invalid_host_falls_back() {
        let file = FileConfig {
            host: Some("not-an-ip".into()),
            ..FileConfig::default()
        };
        let config = ServerConfig::merge(&args(&[]), file).unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("full".parse::<Variant>(), Ok(Variant::Full));
        assert_eq!(
            "fancy".parse::<Variant>(),
            Err(CodepalError::UnknownVariant("fancy".into()))
        );
    }

    #[test]
    fn test_load_and_merge_from_explicit_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("codepal.toml");
        fs::write(&path, "port = 7070\nvariant = \"simple\"\n")?;

        let path_arg = path.to_string_lossy().to_string();
        let config = load_and_merge_config(&args(&["--config", &path_arg]))?;
        assert_eq!(config.port, 7070);
        assert_eq!(config.variant, Variant::Simple);
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("codepal.toml");
        fs::write(&path, "directory = \"www\"\n")?;

        let path_arg = path.to_string_lossy().to_string();
        assert!(load_and_merge_config(&args(&["--config", &path_arg])).is_err());
        Ok(())
    }
}

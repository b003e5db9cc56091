//! # Codepal Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module locates and parses the optional Codepal configuration file.
//! Every key is optional; anything left out falls back to the built-in
//! defaults or to the command-line arguments (see `server::config` for the
//! merge rules).
//!
//! ## Architecture
//!
//! Configuration sources (first one found wins):
//! 1. An explicit path passed with `--config <PATH>`
//! 2. Project-specific `.codepal.toml` in the current directory
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/codepal/config.toml` on Linux)
//!
//! An explicit path that does not exist is an error. Missing implicit files
//! are not.
//!
//! ## Examples
//!
//! ```toml
//! # .codepal.toml
//! port = 5000
//! host = "0.0.0.0"
//! enable_cors = true
//! variant = "full"      # or "simple"
//! seed = 42             # deterministic reply selection
//! history_limit = 50    # default for GET /api/history
//! name = "Codepal"
//! ```
//!
use crate::core::error::{CodepalError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The expected name for the project-level configuration file.
pub const PROJECT_CONFIG_FILENAME: &str = ".codepal.toml";

/// # Configuration File Contents (`FileConfig`)
///
/// Settings read from a TOML configuration file. All fields are optional so
/// users only need to write the settings they want to change.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub port: Option<u16>,
    /// Read as a string so an invalid address can fall back to the default.
    pub host: Option<String>,
    pub enable_cors: Option<bool>,
    pub variant: Option<String>,
    pub seed: Option<u64>,
    pub history_limit: Option<usize>,
    pub name: Option<String>,
}

/// # Load Configuration (`load_config`)
///
/// Finds and parses the first available configuration file.
///
/// ## Arguments
///
/// * `explicit`: A path given on the command line, if any.
///
/// ## Returns
///
/// * `Result<FileConfig>`: The parsed settings, or `FileConfig::default()` when
///   no file was found.
///
/// ## Errors
///
/// Returns an error if the explicit path is missing, or a found file cannot be
/// read, parsed, or validated.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(CodepalError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                ))
                .into());
            }
            Some(path.to_path_buf())
        }
        None => find_config_path()?,
    };

    let config = match path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults.");
            FileConfig::default()
        }
    };

    validate_config(&config).context("Configuration validation failed")?;
    debug!("Loaded file configuration: {:?}", config);
    Ok(config)
}

/// Looks for `.codepal.toml` in the working directory, then the user config dir.
fn find_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = current_dir.join(PROJECT_CONFIG_FILENAME);
    if project_config.is_file() {
        return Ok(Some(project_config));
    }

    match ProjectDirs::from("dev", "Codepal", "codepal") {
        Some(proj_dirs) => {
            let user_config = proj_dirs.config_dir().join("config.toml");
            if user_config.is_file() {
                Ok(Some(user_config))
            } else {
                debug!(
                    "User configuration file not found at {}",
                    user_config.display()
                );
                Ok(None)
            }
        }
        None => {
            warn!("Could not determine user config directory.");
            Ok(None)
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn validate_config(config: &FileConfig) -> Result<()> {
    if let Some(variant) = &config.variant {
        if variant != "full" && variant != "simple" {
            return Err(CodepalError::UnknownVariant(variant.clone()).into());
        }
    }
    if let Some(name) = &config.name {
        if name.trim().is_empty() {
            return Err(CodepalError::Config("'name' must not be blank".into()).into());
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_from_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(
            &path,
            r#"
            port = 9090
            host = "0.0.0.0"
            enable_cors = false
            variant = "simple"
            seed = 7
            history_limit = 10
            "#,
        )?;

        let config = load_config(Some(&path))?;
        assert_eq!(config.port, Some(9090));
        assert_eq!(config.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.enable_cors, Some(false));
        assert_eq!(config.variant.as_deref(), Some("simple"));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.history_limit, Some(10));
        assert_eq!(config.name, None);
        Ok(())
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let result = load_config(Some(Path::new("/path/that/does/not/exist.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "colour = \"blue\"\n")?;
        assert!(load_config(Some(&path)).is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_variant_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("variant.toml");
        fs::write(&path, "variant = \"tiny\"\n")?;
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown chatbot variant 'tiny'"));
        Ok(())
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.libris/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LibrisConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub openlibrary: OpenLibraryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_query: Option<String>,
    pub result_limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OpenLibraryConfig {
    pub base_url: Option<String>,
    pub covers_base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_QUERY: &str = "Kotlin";
pub const DEFAULT_RESULT_LIMIT: u32 = 25;
pub const DEFAULT_OPENLIBRARY_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_query: String,
    pub result_limit: u32,
    pub openlibrary_base_url: String,
    pub covers_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.libris/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".libris").join("config.toml"))
}

/// Load config from `~/.libris/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LibrisConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LibrisConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LibrisConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LibrisConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LibrisConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Libris Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_query = "Kotlin"           # Search run on startup
# result_limit = 25                  # Max books per search

# [openlibrary]
# base_url = "https://openlibrary.org"
# covers_base_url = "https://covers.openlibrary.org"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_query` is from the `--query` flag (None = not specified).
pub fn resolve(config: &LibrisConfig, cli_query: Option<&str>) -> ResolvedConfig {
    // Startup query: CLI → env → config → default
    let default_query = cli_query
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LIBRIS_DEFAULT_QUERY").ok())
        .or_else(|| config.general.default_query.clone())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    // Catalog base URL: env → config → default
    let openlibrary_base_url = std::env::var("OPENLIBRARY_BASE_URL")
        .ok()
        .or_else(|| config.openlibrary.base_url.clone())
        .unwrap_or_else(|| DEFAULT_OPENLIBRARY_BASE_URL.to_string());

    // Covers base URL: env → config → default
    let covers_base_url = std::env::var("OPENLIBRARY_COVERS_BASE_URL")
        .ok()
        .or_else(|| config.openlibrary.covers_base_url.clone())
        .unwrap_or_else(|| DEFAULT_COVERS_BASE_URL.to_string());

    ResolvedConfig {
        default_query,
        result_limit: config.general.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT),
        openlibrary_base_url,
        covers_base_url,
    }
}

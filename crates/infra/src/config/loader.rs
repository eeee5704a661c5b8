//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file, with any `AGENDA_*`
//!    variables applied on top
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the calendar timezone is validated before the
//! configuration is returned.
//!
//! ## Environment Variables
//! - `AGENDA_DB_PATH`: Database file path (required)
//! - `AGENDA_DB_POOL_SIZE`: Connection pool size (required)
//! - `AGENDA_TIMEZONE`: IANA display timezone (default `Asia/Jakarta`)
//! - `AGENDA_LOG_LEVEL`: Default log level (default `info`)
//! - `AGENDA_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./agenda.json` or `./agenda.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use agenda_core::CalendarZone;
use agenda_domain::{AgendaError, Config, Result};

/// Load configuration with automatic fallback strategy
///
/// Uses environment variables when both required ones are set. Otherwise
/// loads a config file and applies any `AGENDA_*` variables on top of it.
///
/// # Errors
/// Returns `AgendaError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The timezone is not a known IANA zone
pub fn load() -> Result<Config> {
    if has_required_env() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    tracing::debug!("Required environment variables not set, trying file");
    let config = load_from_file(None)?;
    validate(apply_env_overrides(config)?)
}

/// [`load`], but start from built-in defaults when no config file exists
///
/// `AGENDA_*` variables still apply on top of the defaults, and a source
/// that exists but is invalid is still an error.
pub fn load_or_default() -> Result<Config> {
    if has_required_env() || probe_config_paths().is_some() {
        return load();
    }

    tracing::warn!("No configuration file found, using defaults");
    validate(apply_env_overrides(Config::default())?)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `AgendaError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    env_var("AGENDA_DB_PATH")?;
    env_var("AGENDA_DB_POOL_SIZE")?;
    validate(apply_env_overrides(Config::default())?)
}

/// Overwrite `config` with every `AGENDA_*` variable that is set
fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Ok(path) = std::env::var("AGENDA_DB_PATH") {
        config.database.path = path;
    }
    if let Ok(size) = std::env::var("AGENDA_DB_POOL_SIZE") {
        config.database.pool_size = size
            .parse::<u32>()
            .map_err(|e| AgendaError::Config(format!("Invalid pool size: {e}")))?;
    }
    if let Ok(timezone) = std::env::var("AGENDA_TIMEZONE") {
        config.calendar.timezone = timezone;
    }
    if let Ok(level) = std::env::var("AGENDA_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("AGENDA_LOG_JSON", config.logging.json);
    Ok(config)
}

fn has_required_env() -> bool {
    std::env::var_os("AGENDA_DB_PATH").is_some()
        && std::env::var_os("AGENDA_DB_POOL_SIZE").is_some()
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AgendaError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AgendaError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AgendaError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AgendaError::Config(format!("Failed to read config file: {e}")))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AgendaError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validate(config: Config) -> Result<Config> {
    CalendarZone::parse(&config.calendar.timezone)?;
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "agenda.json",
        "agenda.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| AgendaError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

//! Gateway config loader (strict parsing, then environment overrides).

pub mod schema;

use std::fs;
use std::path::Path;

use steamstatus_core::error::{Result, SteamStatusError};

pub use schema::{FetchSection, Fallbacks, GatewayConfig, ProfileSection, ServerSection};

/// Config file read when `STEAMSTATUS_CONFIG` is unset.
pub const DEFAULT_PATH: &str = "steamstatus.yaml";

/// Read + parse + validate a config file.
pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SteamStatusError::BadConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Parse + validate YAML.
pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse YAML without validating (overrides may still fill in required values).
pub fn parse_str(s: &str) -> Result<GatewayConfig> {
    serde_yaml::from_str(s).map_err(|e| SteamStatusError::BadConfig(format!("invalid yaml: {e}")))
}

/// Startup loader: the file at `path` if it exists (built-in defaults otherwise),
/// then environment overrides from `env`, then validation.
pub fn load(path: &str, env: impl Fn(&str) -> Option<String>) -> Result<GatewayConfig> {
    let mut cfg = if Path::new(path).exists() {
        let s = fs::read_to_string(path)
            .map_err(|e| SteamStatusError::BadConfig(format!("read config failed: {e}")))?;
        parse_str(&s)?
    } else {
        tracing::info!(path, "config file not found, using defaults");
        GatewayConfig::default()
    };

    cfg.apply_env(env)?;
    cfg.validate()?;
    Ok(cfg)
}

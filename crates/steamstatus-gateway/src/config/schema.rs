use std::net::SocketAddr;

use serde::Deserialize;
use steamstatus_core::error::{Result, SteamStatusError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub profile: ProfileSection,

    #[serde(default)]
    pub fetch: FetchSection,

    #[serde(default)]
    pub fallbacks: Fallbacks,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            profile: ProfileSection::default(),
            fetch: FetchSection::default(),
            fallbacks: Fallbacks::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SteamStatusError::BadConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.profile.validate()?;
        self.fetch.validate()?;
        self.fallbacks.validate()?;

        Ok(())
    }

    /// Apply `PORT`, `STEAM_VANITY`, `GAMES_FALLBACK` and `PERFECT_GAMES_FALLBACK`.
    pub fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = env("PORT") {
            let port: u16 = parse_env("PORT", &port)?;
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.listen = addr.to_string();
        }
        if let Some(vanity) = env("STEAM_VANITY") {
            self.profile.vanity = vanity.trim().to_string();
        }
        if let Some(v) = env("GAMES_FALLBACK") {
            self.fallbacks.games = parse_env("GAMES_FALLBACK", &v)?;
        }
        if let Some(v) = env("PERFECT_GAMES_FALLBACK") {
            self.fallbacks.perfect_games = parse_env("PERFECT_GAMES_FALLBACK", &v)?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| SteamStatusError::BadConfig(format!("{key}={raw:?} is invalid: {e}")))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SteamStatusError::BadConfig(format!(
                "server.listen must be a valid socket address ({:?}): {e}",
                self.listen
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.socket_addr().map(|_| ())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSection {
    /// Path segment after `/id/` in the profile URL.
    #[serde(default)]
    pub vanity: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            vanity: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl ProfileSection {
    pub fn validate(&self) -> Result<()> {
        if self.vanity.is_empty() {
            return Err(SteamStatusError::BadConfig(
                "profile.vanity must be set (or STEAM_VANITY)".into(),
            ));
        }
        if self
            .vanity
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(SteamStatusError::BadConfig(format!(
                "profile.vanity must be a single path segment, got {:?}",
                self.vanity
            )));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(SteamStatusError::BadConfig(
                "profile.base_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }

    fn root(&self) -> String {
        format!("{}/id/{}", self.base_url.trim_end_matches('/'), self.vanity)
    }

    pub fn profile_url(&self) -> String {
        format!("{}/", self.root())
    }

    pub fn games_url(&self) -> String {
        format!("{}/games/?tab=all", self.root())
    }

    /// Footer identity, e.g. `steamcommunity.com/id/gaben`.
    pub fn source_label(&self) -> String {
        let root = self.root();
        root.split_once("://")
            .map(|(_, rest)| rest.to_string())
            .unwrap_or(root)
    }
}

fn default_base_url() -> String {
    "https://steamcommunity.com".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchSection {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
        }
    }
}

impl FetchSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=60000).contains(&self.timeout_ms) {
            return Err(SteamStatusError::BadConfig(
                "fetch.timeout_ms must be between 1000 and 60000".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SteamStatusError::BadConfig(
                "fetch.user_agent must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_timeout_ms() -> u64 {
    10000
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; steamstatus/0.1; +https://steamcommunity.com)".into()
}
fn default_accept_language() -> String {
    "en-US,en;q=0.9".into()
}

/// Values substituted when a count extracts as 0.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fallbacks {
    #[serde(default = "default_games_fallback")]
    pub games: u64,

    #[serde(default = "default_perfect_games_fallback")]
    pub perfect_games: u64,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            games: default_games_fallback(),
            perfect_games: default_perfect_games_fallback(),
        }
    }
}

impl Fallbacks {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(SteamStatusError::BadConfig(
                "fallbacks.games must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_games_fallback() -> u64 {
    274
}
fn default_perfect_games_fallback() -> u64 {
    132
}

//! Shared error type across steamstatus crates.

use thiserror::Error;

/// Stable error codes (used as log fields and in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Upstream answered with a non-success status.
    FetchFailed,
    /// Request never produced a usable response (DNS, connect, timeout, decode).
    Transport,
    /// Configuration could not be parsed or failed validation.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::FetchFailed => "FETCH_FAILED",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SteamStatusError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum SteamStatusError {
    #[error("Fetch failed {status} for {url}")]
    Fetch { status: u16, url: String },
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SteamStatusError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SteamStatusError::Fetch { .. } => ErrorCode::FetchFailed,
            SteamStatusError::Transport { .. } => ErrorCode::Transport,
            SteamStatusError::BadConfig(_) => ErrorCode::BadConfig,
            SteamStatusError::Internal(_) => ErrorCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_message_names_status_and_url() {
        let e = SteamStatusError::Fetch {
            status: 404,
            url: "https://steamcommunity.com/id/nobody/".into(),
        };
        assert_eq!(
            e.to_string(),
            "Fetch failed 404 for https://steamcommunity.com/id/nobody/"
        );
        assert_eq!(e.code().as_str(), "FETCH_FAILED");
    }
}

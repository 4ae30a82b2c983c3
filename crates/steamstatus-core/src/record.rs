//! Flat statistics record produced once per request.

use chrono::{DateTime, Utc};

/// Placeholder nickname when the profile page carries no persona name.
pub const UNKNOWN_NICKNAME: &str = "Unknown";

/// Everything one rendering pass needs.
///
/// Built fresh per request, never mutated, consumed by the renderer and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRecord {
    pub nickname: String,
    pub level: u64,
    pub games: u64,
    pub perfect_games: u64,
    pub achievements: u64,
    pub badges: u64,
    pub awards: u64,
    pub generated_at: DateTime<Utc>,
}

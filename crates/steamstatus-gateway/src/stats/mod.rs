//! Stats aggregation: two page fetches, seven extractions, two fallbacks.

use std::sync::Arc;

use chrono::Utc;

use steamstatus_core::error::Result;
use steamstatus_core::extract;
use steamstatus_core::StatsRecord;

use crate::config::{Fallbacks, GatewayConfig};
use crate::fetch::PageFetcher;

/// Builds one [`StatsRecord`] per call. Holds no per-request state.
#[derive(Clone)]
pub struct StatsAggregator {
    fetcher: Arc<dyn PageFetcher>,
    profile_url: String,
    games_url: String,
    fallbacks: Fallbacks,
}

impl StatsAggregator {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        profile_url: String,
        games_url: String,
        fallbacks: Fallbacks,
    ) -> Self {
        Self {
            fetcher,
            profile_url,
            games_url,
            fallbacks,
        }
    }

    pub fn from_config(fetcher: Arc<dyn PageFetcher>, cfg: &GatewayConfig) -> Self {
        Self::new(
            fetcher,
            cfg.profile.profile_url(),
            cfg.profile.games_url(),
            cfg.fallbacks,
        )
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    pub fn games_url(&self) -> &str {
        &self.games_url
    }

    /// Profile page first, then the games page. The first fetch error aborts.
    #[tracing::instrument(level = "debug", skip(self), fields(profile = %self.profile_url))]
    pub async fn collect(&self) -> Result<StatsRecord> {
        let profile = self.fetcher.fetch_text(&self.profile_url).await?;
        let nickname = extract::extract_nickname(&profile);
        let level = extract::extract_level(&profile);
        let badges = extract::extract_badges(&profile);
        let awards = extract::extract_awards(&profile);
        let achievements = extract::extract_achievements(&profile);

        let games_page = self.fetcher.fetch_text(&self.games_url).await?;
        let games = extract::extract_games(&games_page);
        let perfect_games = extract::extract_perfect_games(&games_page);

        // A real 0 cannot be told apart from a miss here; both get the fallback.
        let games = if games == 0 {
            tracing::debug!(fallback = self.fallbacks.games, "games extracted as 0, using fallback");
            self.fallbacks.games
        } else {
            games
        };
        let perfect_games = if perfect_games == 0 {
            tracing::debug!(
                fallback = self.fallbacks.perfect_games,
                "perfect games extracted as 0, using fallback"
            );
            self.fallbacks.perfect_games
        } else {
            perfect_games
        };

        Ok(StatsRecord {
            nickname,
            level,
            games,
            perfect_games,
            achievements,
            badges,
            awards,
            generated_at: Utc::now(),
        })
    }
}

//! Shared application state for the steamstatus gateway.
//!
//! Everything in here is immutable after startup; requests share it through an
//! `Arc` and never write to it.

use std::sync::Arc;

use steamstatus_core::error::Result;
use steamstatus_core::render::SvgRenderer;

use crate::config::GatewayConfig;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::stats::StatsAggregator;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    aggregator: StatsAggregator,
    renderer: SvgRenderer,
}

impl AppState {
    /// Build application state with the real HTTP fetcher.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&cfg.fetch)?;
        Ok(Self::with_fetcher(cfg, Arc::new(fetcher)))
    }

    /// Build application state around any fetcher (tests use in-memory pages).
    pub fn with_fetcher(cfg: GatewayConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        let aggregator = StatsAggregator::from_config(fetcher, &cfg);
        let renderer = SvgRenderer::new(cfg.profile.source_label());

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                aggregator,
                renderer,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn aggregator(&self) -> &StatsAggregator {
        &self.inner.aggregator
    }

    pub fn renderer(&self) -> &SvgRenderer {
        &self.inner.renderer
    }
}

//! Shared application state for the infoprobe server.
//!
//! Cheap to clone; axum hands a copy to every handler.

use std::sync::Arc;
use std::time::{Duration, Instant};

use infoprobe_core::error::Result;

use crate::config::AppConfig;
use crate::obs::metrics::ProbeMetrics;
use crate::stats::{StatsSource, SysinfoSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    stats: Arc<dyn StatsSource>,
}

struct AppStateInner {
    cfg: AppConfig,
    metrics: ProbeMetrics,
    started_at: Instant,
}

impl AppState {
    /// Build state backed by the real OS stats source.
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let stats = SysinfoSource::new()?;
        Ok(Self::with_stats(cfg, Arc::new(stats)))
    }

    /// Build state with an explicit stats source.
    pub fn with_stats(cfg: AppConfig, stats: Arc<dyn StatsSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ProbeMetrics::default(),
                started_at: Instant::now(),
            }),
            stats,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ProbeMetrics {
        &self.inner.metrics
    }

    pub fn stats(&self) -> Arc<dyn StatsSource> {
        Arc::clone(&self.stats)
    }

    /// Time since the state was built, i.e. since process start.
    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}

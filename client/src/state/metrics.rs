//! Aggregate metrics query for the metrics page.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use leptos::prelude::*;

use super::query::{QuerySlot, spawn_into};
use crate::config::ApiConfig;
use crate::net::api::fetch_metrics;
use crate::net::types::DashboardMetrics;

/// Query state for `/api/metrics`.
pub type MetricsSlot = QuerySlot<DashboardMetrics>;

/// Reads `/api/metrics` into one slot, on mount and on demand.
#[derive(Clone)]
pub struct MetricsClient {
    config: ApiConfig,
    slot: RwSignal<MetricsSlot>,
}

impl MetricsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, slot: RwSignal::new(MetricsSlot::pending()) }
    }

    /// The slot this client writes to.
    pub fn slot(&self) -> RwSignal<MetricsSlot> {
        self.slot
    }

    /// Issue the metrics request.
    pub fn fetch(&self) {
        let config = self.config.clone();
        spawn_into(self.slot, "dashboard metrics".to_owned(), async move { fetch_metrics(&config).await });
    }

    /// Manually re-run the fetch, independent of any fetch already in flight.
    pub fn refresh(&self) {
        self.fetch();
    }
}

//! Prompt list queries for the dashboard panels.
//!
//! DESIGN
//! ======
//! Each panel owns its own slot and fetches on mount, so there is no shared
//! cache: opening the dashboard always re-issues every list request.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

use leptos::prelude::*;

use super::query::{QuerySlot, spawn_into};
use crate::config::ApiConfig;
use crate::net::api::{PromptQuery, fetch_prompts};
use crate::net::types::{AttackType, PromptRecord};

/// Query state for one prompt list.
pub type PromptListSlot = QuerySlot<Vec<PromptRecord>>;

/// Issues the four prompt list reads, each into a caller-owned slot.
#[derive(Clone, Debug)]
pub struct PromptsClient {
    config: ApiConfig,
}

impl PromptsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// `GET /prompts`.
    pub fn fetch_all(&self, slot: RwSignal<PromptListSlot>) {
        self.fetch(slot, PromptQuery::All);
    }

    /// `GET /prompts/attacks`.
    pub fn fetch_attacks(&self, slot: RwSignal<PromptListSlot>) {
        self.fetch(slot, PromptQuery::Attacks);
    }

    /// `GET /prompts/clean`.
    pub fn fetch_clean(&self, slot: RwSignal<PromptListSlot>) {
        self.fetch(slot, PromptQuery::Clean);
    }

    /// `GET /prompts/type?type=<kind>`.
    pub fn fetch_by_type(&self, slot: RwSignal<PromptListSlot>, kind: AttackType) {
        self.fetch(slot, PromptQuery::ByType(kind));
    }

    fn fetch(&self, slot: RwSignal<PromptListSlot>, query: PromptQuery) {
        let config = self.config.clone();
        let label = query.describe();
        spawn_into(slot, label, async move { fetch_prompts(&config, &query).await });
    }
}

/// Build a client from the `ApiConfig` context.
pub fn use_prompts_client() -> PromptsClient {
    PromptsClient::new(use_context::<ApiConfig>().unwrap_or_default())
}

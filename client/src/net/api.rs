//! REST API helpers for communicating with the detection backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result`; nothing here panics. Non-2xx responses
//! have their body read as text so the backend's own explanation reaches the
//! UI. No retries are attempted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AttackType, DashboardMetrics, PromptRecord};
use crate::config::ApiConfig;

pub const CHAT_PROMPT_PATH: &str = "/chat/prompt";
pub const METRICS_PATH: &str = "/api/metrics";

/// One of the four read-only prompt list queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptQuery {
    All,
    Attacks,
    Clean,
    ByType(AttackType),
}

impl PromptQuery {
    /// Endpoint path, without the query string.
    pub fn path(&self) -> &'static str {
        match self {
            Self::All => "/prompts",
            Self::Attacks => "/prompts/attacks",
            Self::Clean => "/prompts/clean",
            Self::ByType(_) => "/prompts/type",
        }
    }

    /// Query-string parameters, if any.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ByType(kind) => vec![("type", kind.as_str().to_owned())],
            _ => Vec::new(),
        }
    }

    /// Short noun phrase used in log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::All => "all prompts".to_owned(),
            Self::Attacks => "attack prompts".to_owned(),
            Self::Clean => "clean prompts".to_owned(),
            Self::ByType(kind) => format!("{kind} attacks"),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        leptos::logging::warn!("API error ({}): {}", resp.status(), body);
        return Err(ApiError::status(resp.status(), resp.status_text(), body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Submit chat text via `POST /chat/prompt`.
///
/// The success body is returned untyped; its shape varies between an LLM
/// reply and a rejection verdict and is interpreted by
/// [`crate::util::reply::reply_text`].
///
/// # Errors
///
/// Returns an error if the request fails, the backend responds with a
/// non-2xx status, or the body is not JSON.
pub async fn submit_prompt(config: &ApiConfig, text: &str) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::PromptSubmission { text: text.to_owned() };
        let resp = gloo_net::http::Request::post(&config.endpoint(CHAT_PROMPT_PATH))
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        leptos::logging::log!("chat prompt response status: {}", resp.status());
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, text);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one of the prompt lists.
///
/// # Errors
///
/// Returns an error if the request fails, the backend responds with a
/// non-2xx status, or the body is not a list of prompt records.
pub async fn fetch_prompts(config: &ApiConfig, query: &PromptQuery) -> Result<Vec<PromptRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        leptos::logging::log!("fetching {}", query.describe());
        let resp = gloo_net::http::Request::get(&config.endpoint(query.path()))
            .query(query.params())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch aggregate metrics from `/api/metrics`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend responds with a
/// non-2xx status, or the body does not match [`DashboardMetrics`].
pub async fn fetch_metrics(config: &ApiConfig) -> Result<DashboardMetrics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        leptos::logging::log!("fetching dashboard metrics");
        let resp = gloo_net::http::Request::get(&config.endpoint(METRICS_PATH))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

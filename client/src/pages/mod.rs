//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` is the landing route; `dashboard` and `metrics` are read-only views
//! over the backend's stored prompts and aggregates.

pub mod chat;
pub mod dashboard;
pub mod metrics;

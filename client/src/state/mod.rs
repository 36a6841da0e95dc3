//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `query` holds the generic read lifecycle shared by the dashboard panels;
//! `prompts` and `metrics` bind it to endpoints. `chat` owns the transcript.

pub mod chat;
pub mod metrics;
pub mod prompts;
pub mod query;

//! Networking modules for the detection backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP exchanges, `error` classifies their failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

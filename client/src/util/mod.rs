//! Pure helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches signals or the network, so every module is covered by
//! native unit tests.

pub mod markdown;
pub mod reply;
pub mod stats;

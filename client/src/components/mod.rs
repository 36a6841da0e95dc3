//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chat components read and write the `ChatState` context. Dashboard panels
//! each own a private query slot and fetch on mount; none of them share data.

pub mod attack_rows;
pub mod attack_table;
pub mod attack_type_explorer;
pub mod attacks_panel;
pub mod chat_input;
pub mod chat_transcript;
pub mod clean_prompts_panel;
pub mod panel;
pub mod prompts_overview;
pub mod site_header;

//! Conversation transcript and draft input for the chat page.
//!
//! DESIGN
//! ======
//! `ChatState` is provided once as an `RwSignal` context and only changes
//! through `set_draft`, `begin_submit` and `complete_submit`. A submit is two
//! transitions: the user turn lands synchronously, the assistant turn lands
//! when the exchange settles. `complete_submit` always appends exactly one
//! turn, success or not, so every accepted submit yields one reply.
//!
//! Overlapping submits are not serialized; each reply is appended when its
//! own response arrives.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::util::reply::reply_text;

/// First assistant turn of every session.
pub const GREETING: &str = "Hello! How can I help you today?";

/// Who authored a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// CSS modifier / wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One message in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// Transcript, draft input, and the number of replies still outstanding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub turns: Vec<ChatTurn>,
    pub draft: String,
    /// Submits whose reply has not arrived yet. Display only; never blocks
    /// a new submit.
    pub pending: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { turns: vec![ChatTurn::assistant(GREETING)], draft: String::new(), pending: 0 }
    }
}

impl ChatState {
    /// Replace the draft input.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Accept `text` for sending: append the user turn and clear the draft.
    ///
    /// Returns the text to send, or `None` (with no state change) when it is
    /// blank.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.turns.push(ChatTurn::user(text));
        self.draft.clear();
        self.pending += 1;
        Some(text.to_owned())
    }

    /// Append the single assistant turn for a settled exchange.
    pub fn complete_submit(&mut self, result: Result<serde_json::Value, ApiError>) {
        let content = match result {
            Ok(body) => reply_text(&body),
            Err(e) => format!("Error: {e}"),
        };
        self.turns.push(ChatTurn::assistant(content));
        self.pending = self.pending.saturating_sub(1);
    }

    /// Whether at least one reply is still outstanding.
    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }
}

/// Submit `text` from the chat page: one user turn now, one assistant turn
/// once `POST /chat/prompt` settles. Blank text is ignored.
pub fn submit(chat: RwSignal<ChatState>, config: ApiConfig, text: String) {
    let Some(text) = chat.try_update(|c| c.begin_submit(&text)).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::submit_prompt(&config, &text).await;
        if let Err(e) = &result {
            leptos::logging::error!("error communicating with API: {e}");
        }
        chat.update(|c| c.complete_submit(result));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, text);
        chat.update(|c| c.complete_submit(Err(ApiError::Unavailable)));
    }
}

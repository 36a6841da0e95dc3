//! Failure taxonomy for backend requests.
//!
//! Every variant renders to a single human-readable line; the UI never shows
//! anything beyond that line, so callers convert with `to_string()` at the
//! point where the message lands in state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by a single backend exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("API returned {status}: {}", status_detail(.body, .status_text))]
    Status { status: u16, status_text: String, body: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Called while rendering on the server, where browser fetch is absent.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a non-2xx response.
    pub fn status(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Status { status, status_text: status_text.into(), body: body.into() }
    }
}

/// Prefer the response body; fall back to the status text when the body is
/// empty.
fn status_detail<'a>(body: &'a str, status_text: &'a str) -> &'a str {
    let trimmed = body.trim();
    if trimmed.is_empty() { status_text } else { trimmed }
}

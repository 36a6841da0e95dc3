//! Turn a `/chat/prompt` response body into one displayable assistant reply.
//!
//! The backend answers with either an LLM reply carrying its text under one of
//! several keys, or a rejection verdict with an optional analysis block. The
//! body is treated as untyped JSON and read by field presence, so an
//! unexpected shape degrades to [`FALLBACK_REPLY`] instead of an error.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use serde_json::Value;

/// Reply shown when the body carries no usable text.
pub const FALLBACK_REPLY: &str = "Sorry, I could not process your request.";

/// Reason shown for a rejection that did not say why.
pub const DEFAULT_REJECTION_REASON: &str = "Your message was flagged as potentially harmful";

/// Text keys checked in priority order for a non-rejected reply.
const REPLY_FIELDS: [&str; 3] = ["generated_text", "response", "message"];

/// Build the assistant reply for a response body. Never empty.
pub fn reply_text(payload: &Value) -> String {
    let raw = if payload.get("status").and_then(Value::as_str) == Some("rejected") {
        rejection_text(payload)
    } else {
        REPLY_FIELDS
            .iter()
            .find_map(|key| non_blank_str(payload, key))
            .unwrap_or_default()
            .to_owned()
    };

    let tidied = tidy(&raw);
    if tidied.is_empty() { FALLBACK_REPLY.to_owned() } else { tidied }
}

fn rejection_text(payload: &Value) -> String {
    let reason = non_blank_str(payload, "reason").unwrap_or(DEFAULT_REJECTION_REASON);
    let mut text = format!("⚠️ {reason}");

    let Some(analysis) = payload.get("analysis").filter(|a| a.is_object()) else {
        return text;
    };

    let attack_type = non_blank_str(analysis, "attackType")
        .or_else(|| non_blank_str(analysis, "attack_type"))
        .unwrap_or("unknown");
    let confidence = analysis
        .get("confidence")
        .and_then(Value::as_f64)
        .map_or_else(|| "unknown".to_owned(), |c| format!("{:.0}%", (c * 100.0).round()));
    text.push_str(&format!("\n\nAttack type: {attack_type}\nConfidence: {confidence}"));

    let matches: Vec<String> = analysis
        .get("matches")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|m| m.as_str().map_or_else(|| m.to_string(), str::to_owned))
                .collect()
        })
        .unwrap_or_default();
    if !matches.is_empty() {
        text.push_str("\n\nMatched patterns:\n- ");
        text.push_str(&matches.join("\n- "));
    }

    text
}

fn non_blank_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Drop ASCII control characters other than tab and newline, cap blank-line
/// runs at one empty line, and trim.
fn tidy(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut newline_run = 0usize;
    for ch in raw.chars() {
        if ch.is_ascii_control() && ch != '\t' && ch != '\n' {
            continue;
        }
        if ch == '\n' {
            newline_run += 1;
            if newline_run > 2 {
                continue;
            }
        } else {
            newline_run = 0;
        }
        out.push(ch);
    }
    out.trim().to_owned()
}

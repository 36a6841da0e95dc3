//! Wire DTOs for the detection backend's JSON API.
//!
//! DESIGN
//! ======
//! The backend stores prompt records as
//! `{_id, prompt, isAttack, attackType, confidence, matches, created_at}`.
//! Those names are canonical here. Older backend revisions used snake_case
//! and `id`/`timestamp` spellings; they are accepted as serde aliases so a
//! half-migrated backend still decodes, but serialization always emits the
//! canonical form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend-assigned category of a malicious prompt.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttackType {
    PromptInjection,
    Jailbreak,
    UnauthorizedAccess,
    DataExfiltration,
    Other,
    /// A label the client does not know (the placeholder detector emits
    /// `"TBD"`). Kept verbatim so one odd record does not fail a whole list.
    Unrecognized(String),
}

impl AttackType {
    /// The five categories the backend can be queried by.
    pub const KNOWN: [AttackType; 5] = [
        AttackType::PromptInjection,
        AttackType::Jailbreak,
        AttackType::UnauthorizedAccess,
        AttackType::DataExfiltration,
        AttackType::Other,
    ];

    /// Parse a wire label. Never fails; unknown labels become
    /// [`AttackType::Unrecognized`].
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "prompt_injection" => Self::PromptInjection,
            "jailbreak" => Self::Jailbreak,
            "unauthorized_access" => Self::UnauthorizedAccess,
            "data_exfiltration" => Self::DataExfiltration,
            "other" => Self::Other,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// Wire label, as sent in `/prompts/type?type=...`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PromptInjection => "prompt_injection",
            Self::Jailbreak => "jailbreak",
            Self::UnauthorizedAccess => "unauthorized_access",
            Self::DataExfiltration => "data_exfiltration",
            Self::Other => "other",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AttackType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttackType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// One submitted prompt and its classification, as persisted by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    /// Backend document identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// The prompt text as submitted.
    #[serde(default)]
    pub prompt: String,
    #[serde(rename = "isAttack", alias = "is_attack", default)]
    pub is_attack: bool,
    #[serde(rename = "attackType", alias = "attack_type", default, skip_serializing_if = "Option::is_none")]
    pub attack_type: Option<AttackType>,
    /// Classifier confidence in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Patterns that triggered the classification, in match order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<String>>,
    /// ISO-8601 creation timestamp.
    #[serde(rename = "created_at", alias = "timestamp", default)]
    pub created_at: String,
}

/// Aggregate metrics snapshot from `/api/metrics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_conversations: u64,
    pub total_messages: u64,
    /// Mean response time in seconds.
    pub average_response_time: f64,
    #[serde(default)]
    pub popular_topics: Vec<Topic>,
}

/// A conversation topic and how often it came up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    pub count: u64,
}

/// Request body for `POST /chat/prompt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PromptSubmission {
    pub text: String,
}

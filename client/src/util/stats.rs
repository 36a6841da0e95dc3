//! Derived dashboard figures and their display formatting.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::BTreeMap;

use crate::net::types::{PromptRecord, Topic};

/// Label used when a record carries no attack type.
pub const UNKNOWN_TYPE_LABEL: &str = "unknown";

/// Number of records flagged as attacks.
pub fn attack_count(records: &[PromptRecord]) -> usize {
    records.iter().filter(|r| r.is_attack).count()
}

/// Share of attacks in percent. Zero when there are no prompts at all.
#[allow(clippy::cast_precision_loss)]
pub fn attack_percentage(total: usize, attacks: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    attacks as f64 / total as f64 * 100.0
}

/// Count records per attack type label, ordered by label.
pub fn tally_by_type(records: &[PromptRecord]) -> BTreeMap<String, usize> {
    let mut tally = BTreeMap::new();
    for record in records {
        let label = record
            .attack_type
            .as_ref()
            .map_or(UNKNOWN_TYPE_LABEL, |t| t.as_str())
            .to_owned();
        *tally.entry(label).or_insert(0) += 1;
    }
    tally
}

/// Records ordered most recent first.
///
/// `created_at` is ISO-8601, so lexical order is chronological. Records with
/// equal timestamps keep their backend order.
pub fn sort_by_recency(records: &[PromptRecord]) -> Vec<PromptRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

/// Topics ranked by descending count, ties broken by name.
pub fn rank_topics(topics: &[Topic]) -> Vec<Topic> {
    let mut ranked = topics.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
    ranked
}

/// One-decimal percentage, e.g. `42.9%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Confidence in `[0, 1]` as a one-decimal percentage, or `N/A`.
pub fn format_confidence(confidence: Option<f64>) -> String {
    confidence.map_or_else(|| "N/A".to_owned(), |c| format_percent(c * 100.0))
}

/// Date portion of an ISO-8601 timestamp; the raw value if it has none.
pub fn format_date(created_at: &str) -> String {
    let trimmed = created_at.trim();
    if trimmed.is_empty() {
        return "N/A".to_owned();
    }
    trimmed
        .split_once(['T', ' '])
        .map_or(trimmed, |(date, _)| date)
        .to_owned()
}

/// Seconds with two decimals, e.g. `1.25s`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.2}s")
}

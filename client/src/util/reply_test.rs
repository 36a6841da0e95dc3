use super::*;
use serde_json::json;

// =============================================================
// Rejections
// =============================================================

#[test]
fn rejection_with_full_analysis() {
    let body = json!({
        "status": "rejected",
        "reason": "bad",
        "analysis": { "attackType": "jailbreak", "confidence": 0.87, "matches": ["x", "y"] }
    });
    let text = reply_text(&body);
    assert!(text.starts_with("⚠️ bad"));
    assert!(text.contains("Attack type: jailbreak"));
    assert!(text.contains("Confidence: 87%"));
    let x = text.find("- x").unwrap();
    let y = text.find("- y").unwrap();
    assert!(x < y);
}

#[test]
fn rejection_exact_layout() {
    let body = json!({
        "status": "rejected",
        "reason": "Potential attack detected",
        "analysis": { "attackType": "prompt_injection", "confidence": 0.5, "matches": ["ignore all"] }
    });
    assert_eq!(
        reply_text(&body),
        "⚠️ Potential attack detected\n\nAttack type: prompt_injection\nConfidence: 50%\n\nMatched patterns:\n- ignore all"
    );
}

#[test]
fn rejection_without_reason_uses_default() {
    let body = json!({ "status": "rejected" });
    assert_eq!(reply_text(&body), format!("⚠️ {DEFAULT_REJECTION_REASON}"));
}

#[test]
fn rejection_analysis_defaults_to_unknown() {
    let body = json!({ "status": "rejected", "reason": "r", "analysis": {} });
    assert_eq!(reply_text(&body), "⚠️ r\n\nAttack type: unknown\nConfidence: unknown");
}

#[test]
fn rejection_zero_confidence_is_reported() {
    let body = json!({ "status": "rejected", "reason": "r", "analysis": { "attackType": "other", "confidence": 0.0 } });
    assert!(reply_text(&body).contains("Confidence: 0%"));
}

#[test]
fn rejection_empty_matches_omit_listing() {
    let body = json!({ "status": "rejected", "reason": "r", "analysis": { "matches": [] } });
    assert!(!reply_text(&body).contains("Matched patterns"));
}

#[test]
fn rejection_accepts_snake_case_attack_type() {
    let body = json!({ "status": "rejected", "analysis": { "attack_type": "data_exfiltration" } });
    assert!(reply_text(&body).contains("Attack type: data_exfiltration"));
}

// =============================================================
// Normal replies
// =============================================================

#[test]
fn generated_text_wins_over_response() {
    assert_eq!(reply_text(&json!({ "generated_text": "A", "response": "B" })), "A");
}

#[test]
fn response_wins_over_message() {
    assert_eq!(reply_text(&json!({ "response": "B", "message": "C" })), "B");
}

#[test]
fn message_is_used_last() {
    assert_eq!(reply_text(&json!({ "message": "C" })), "C");
}

#[test]
fn blank_higher_priority_field_is_skipped() {
    assert_eq!(reply_text(&json!({ "generated_text": "  ", "message": "C" })), "C");
}

#[test]
fn success_status_is_treated_as_normal_reply() {
    assert_eq!(reply_text(&json!({ "status": "success", "response": "ok" })), "ok");
}

// =============================================================
// Fallbacks and tidying
// =============================================================

#[test]
fn empty_object_returns_fallback() {
    assert_eq!(reply_text(&json!({})), FALLBACK_REPLY);
}

#[test]
fn non_object_payload_returns_fallback() {
    assert_eq!(reply_text(&json!([1, 2, 3])), FALLBACK_REPLY);
    assert_eq!(reply_text(&json!(null)), FALLBACK_REPLY);
    assert_eq!(reply_text(&json!({ "response": 42 })), FALLBACK_REPLY);
}

#[test]
fn excess_blank_lines_are_collapsed() {
    let body = json!({ "response": "  first\n\n\n\n\nsecond  " });
    assert_eq!(reply_text(&body), "first\n\nsecond");
}

#[test]
fn control_characters_are_stripped_but_tabs_kept() {
    let body = json!({ "response": "a\u{0007}b\tc\r\nd" });
    assert_eq!(reply_text(&body), "ab\tc\nd");
}

#[test]
fn control_only_reply_returns_fallback() {
    assert_eq!(reply_text(&json!({ "response": "\u{0001}\u{0002}" })), FALLBACK_REPLY);
}

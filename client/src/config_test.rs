use super::*;

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().base_url, "http://localhost:5000");
}

#[test]
fn from_override_none_uses_default() {
    assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
}

#[test]
fn from_override_blank_uses_default() {
    assert_eq!(ApiConfig::from_override(Some("   ")), ApiConfig::default());
    assert_eq!(ApiConfig::from_override(Some("/")), ApiConfig::default());
}

#[test]
fn from_override_trims_trailing_slashes() {
    let cfg = ApiConfig::from_override(Some("https://guard.example.test/api//"));
    assert_eq!(cfg.base_url, "https://guard.example.test/api");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::from_override(Some("http://10.0.0.2:8000/"));
    assert_eq!(cfg.endpoint("/prompts/attacks"), "http://10.0.0.2:8000/prompts/attacks");
    assert_eq!(cfg.endpoint("api/metrics"), "http://10.0.0.2:8000/api/metrics");
}

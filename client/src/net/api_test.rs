use super::*;
use futures::FutureExt;

#[test]
fn prompt_query_paths_match_backend_routes() {
    assert_eq!(PromptQuery::All.path(), "/prompts");
    assert_eq!(PromptQuery::Attacks.path(), "/prompts/attacks");
    assert_eq!(PromptQuery::Clean.path(), "/prompts/clean");
    assert_eq!(PromptQuery::ByType(AttackType::Jailbreak).path(), "/prompts/type");
}

#[test]
fn only_by_type_query_carries_params() {
    assert!(PromptQuery::All.params().is_empty());
    assert!(PromptQuery::Attacks.params().is_empty());
    assert!(PromptQuery::Clean.params().is_empty());
    assert_eq!(
        PromptQuery::ByType(AttackType::UnauthorizedAccess).params(),
        vec![("type", "unauthorized_access".to_owned())]
    );
}

#[test]
fn by_type_query_passes_unrecognized_label_through() {
    let query = PromptQuery::ByType(AttackType::Unrecognized("social-engineering".to_owned()));
    assert_eq!(query.params(), vec![("type", "social-engineering".to_owned())]);
}

#[test]
fn describe_names_the_list() {
    assert_eq!(PromptQuery::Clean.describe(), "clean prompts");
    assert_eq!(PromptQuery::ByType(AttackType::Jailbreak).describe(), "jailbreak attacks");
}

#[test]
fn endpoint_constants_join_with_config() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.endpoint(CHAT_PROMPT_PATH), "http://localhost:5000/chat/prompt");
    assert_eq!(cfg.endpoint(METRICS_PATH), "http://localhost:5000/api/metrics");
}

#[test]
fn requests_are_unavailable_without_browser() {
    let cfg = ApiConfig::default();
    let result = fetch_prompts(&cfg, &PromptQuery::All).now_or_never();
    assert_eq!(result, Some(Err(ApiError::Unavailable)));
}

use super::*;
use crate::net::types::Topic;

#[test]
fn new_client_starts_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let client = MetricsClient::new(ApiConfig::default());
        assert!(client.slot().get_untracked().loading);
    });
}

#[test]
fn failed_refresh_discards_stale_metrics() {
    let owner = Owner::new();
    owner.with(|| {
        let client = MetricsClient::new(ApiConfig::default());
        let snapshot = DashboardMetrics {
            total_conversations: 3,
            total_messages: 10,
            average_response_time: 0.8,
            popular_topics: vec![Topic { topic: "refunds".to_owned(), count: 2 }],
        };
        client.slot().update(|s| s.succeed(snapshot));

        client.refresh();
        let state = client.slot().get_untracked();
        assert!(!state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error.as_deref(), Some("not available on server"));
    });
}

#[test]
fn refresh_runs_while_mount_fetch_is_in_flight() {
    let owner = Owner::new();
    owner.with(|| {
        let client = MetricsClient::new(ApiConfig::default());
        assert!(client.slot().get_untracked().loading);

        client.refresh();
        let state = client.slot().get_untracked();
        assert!(!state.loading);
        assert!(state.error.is_some());
    });
}

//! Metrics page: conversation aggregates with a manual refresh.

use leptos::prelude::*;

use crate::components::panel::render_slot;
use crate::components::site_header::SiteHeader;
use crate::config::ApiConfig;
use crate::state::metrics::MetricsClient;
use crate::util::stats::{format_seconds, rank_topics};

/// Cards for conversation/message counts and response time, plus a ranked
/// topic list. Refresh stays enabled while a fetch is in flight; the last
/// response to arrive is shown.
#[component]
pub fn MetricsPage() -> impl IntoView {
    let client = MetricsClient::new(use_context::<ApiConfig>().unwrap_or_default());
    let metrics = client.slot();

    let mount_client = client.clone();
    Effect::new(move || mount_client.fetch());

    let on_refresh = move |_| client.refresh();

    view! {
        <div class="metrics-page">
            <SiteHeader title="NobleGuard" nav=vec![("/", "Chat"), ("/dashboard", "Dashboard")]/>
            <main class="metrics-page__content">
                <div class="metrics-page__toolbar">
                    <h2>"Conversation Metrics"</h2>
                    <button class="btn metrics-page__refresh" on:click=on_refresh>
                        "Refresh"
                    </button>
                </div>
                {move || {
                    metrics.with(|slot| {
                        render_slot(
                            slot,
                            "Loading dashboard metrics...",
                            "No metrics available",
                            |m| {
                                let topics = rank_topics(&m.popular_topics);
                                view! {
                                    <div class="metrics-page__cards">
                                        <div class="metric-card">
                                            <h3>"Total Conversations"</h3>
                                            <p class="metric-card__value">{m.total_conversations}</p>
                                        </div>
                                        <div class="metric-card">
                                            <h3>"Total Messages"</h3>
                                            <p class="metric-card__value">{m.total_messages}</p>
                                        </div>
                                        <div class="metric-card">
                                            <h3>"Avg Response Time"</h3>
                                            <p class="metric-card__value">{format_seconds(m.average_response_time)}</p>
                                        </div>
                                    </div>
                                    <section class="panel metrics-page__topics">
                                        <h3>"Popular Topics"</h3>
                                        <ol>
                                            {topics
                                                .into_iter()
                                                .map(|t| view! { <li>{t.topic}" ("{t.count}")"</li> })
                                                .collect::<Vec<_>>()}
                                        </ol>
                                    </section>
                                }
                                    .into_any()
                            },
                        )
                    })
                }}
            </main>
        </div>
    }
}

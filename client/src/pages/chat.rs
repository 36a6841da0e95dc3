//! Chat page: transcript plus input form.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::chat_transcript::ChatTranscript;
use crate::components::site_header::SiteHeader;

/// Landing route. The transcript lives in context, so it survives navigating
/// to the dashboard and back within one page load.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <SiteHeader title="NobleGuard" nav=vec![("/dashboard", "Dashboard"), ("/metrics", "Metrics")]/>
            <main class="chat">
                <ChatTranscript/>
                <ChatInput/>
            </main>
        </div>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{chat::ChatPage, dashboard::DashboardPage, metrics::MetricsPage};
use crate::state::chat::ChatState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and the conversation state, then sets up
/// client-side routing. Dashboard query state is owned by each panel, so it
/// is not provided here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_build_env());
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/nobleguard.css"/>
        <Title text="NobleGuard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("metrics") view=MetricsPage/>
            </Routes>
        </Router>
    }
}

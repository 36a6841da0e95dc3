//! Dashboard page with the prompt and attack panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every panel issues its own request on mount. Two panels read
//! `/prompts/attacks` independently; that duplication is accepted in exchange
//! for panels that can be placed anywhere without shared plumbing.

use leptos::prelude::*;

use crate::components::attack_rows::AttackRows;
use crate::components::attack_type_explorer::AttackTypeExplorer;
use crate::components::attacks_panel::AttacksPanel;
use crate::components::clean_prompts_panel::CleanPromptsPanel;
use crate::components::prompts_overview::PromptsOverview;
use crate::components::site_header::SiteHeader;

/// Prompt statistics and attack details.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <SiteHeader title="NobleGuard" nav=vec![("/", "Chat"), ("/metrics", "Metrics")]/>
            <main class="dashboard-page__content">
                <div class="dashboard-page__row">
                    <PromptsOverview/>
                    <AttacksPanel/>
                    <CleanPromptsPanel/>
                </div>
                <div class="dashboard-page__row">
                    <AttackRows/>
                </div>
                <div class="dashboard-page__row">
                    <AttackTypeExplorer/>
                </div>
            </main>
            <footer class="dashboard-page__footer">
                <p>"© 2025 NobleGuard"</p>
            </footer>
        </div>
    }
}

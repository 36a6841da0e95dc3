//! Most recent attacks, one row each.

use leptos::prelude::*;

use super::attack_table::AttackTable;
use super::panel::render_slot;
use crate::state::prompts::{PromptListSlot, use_prompts_client};
use crate::util::stats::sort_by_recency;

/// Table of every attack record, newest first.
#[component]
pub fn AttackRows() -> impl IntoView {
    let client = use_prompts_client();
    let attacks = RwSignal::new(PromptListSlot::pending());

    Effect::new(move || client.fetch_attacks(attacks));

    view! {
        <section class="panel attack-rows">
            <h2>"Recent Attack Details"</h2>
            {move || {
                attacks.with(|slot| {
                    render_slot(slot, "Loading attack data...", "No attack data available", |records| {
                        if records.is_empty() {
                            return view! { <p class="panel__empty">"No attack data available"</p> }.into_any();
                        }
                        view! { <AttackTable records=sort_by_recency(records)/> }.into_any()
                    })
                })
            }}
        </section>
    }
}

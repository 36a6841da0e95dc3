//! Attack records filtered by one selected attack type.

use leptos::prelude::*;

use super::attack_table::AttackTable;
use super::panel::render_slot;
use crate::net::types::AttackType;
use crate::state::prompts::{PromptListSlot, use_prompts_client};
use crate::util::stats::sort_by_recency;

/// Type selector plus the matching records. Refetches on every selection.
#[component]
pub fn AttackTypeExplorer() -> impl IntoView {
    let client = use_prompts_client();
    let selected = RwSignal::new(AttackType::PromptInjection);
    let by_type = RwSignal::new(PromptListSlot::pending());

    Effect::new(move || {
        let kind = selected.get();
        client.fetch_by_type(by_type, kind);
    });

    view! {
        <section class="panel attack-explorer">
            <h2>"Attacks by Type"</h2>
            <select
                class="attack-explorer__select"
                prop:value=move || selected.with(|k| k.as_str().to_owned())
                on:change=move |ev| selected.set(AttackType::from_wire(&event_target_value(&ev)))
            >
                {AttackType::KNOWN
                    .into_iter()
                    .map(|kind| {
                        let value = kind.as_str().to_owned();
                        view! { <option value=value.clone()>{value.replace('_', " ")}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            {move || {
                by_type.with(|slot| {
                    render_slot(slot, "Loading attack data...", "No attacks of this type", |records| {
                        if records.is_empty() {
                            return view! { <p class="panel__empty">"No attacks of this type"</p> }.into_any();
                        }
                        view! { <AttackTable records=sort_by_recency(records)/> }.into_any()
                    })
                })
            }}
        </section>
    }
}

//! Attack count with a per-type breakdown.

use leptos::prelude::*;

use super::panel::render_slot;
use crate::state::prompts::{PromptListSlot, use_prompts_client};
use crate::util::stats::tally_by_type;

/// Number of attacks and how many fall under each attack type.
#[component]
pub fn AttacksPanel() -> impl IntoView {
    let client = use_prompts_client();
    let attacks = RwSignal::new(PromptListSlot::pending());

    Effect::new(move || client.fetch_attacks(attacks));

    view! {
        <section class="panel attacks-panel">
            <h2>"Attack Analysis"</h2>
            {move || {
                attacks.with(|slot| {
                    render_slot(slot, "Loading attack data...", "No attack data available", |records| {
                        if records.is_empty() {
                            return view! { <p class="panel__empty">"No attack data available"</p> }.into_any();
                        }
                        let tally = tally_by_type(records);
                        view! {
                            <div class="panel__stats">
                                <p><strong>"Number of Attacks: "</strong>{records.len()}</p>
                                <h3>"Attacks by Type:"</h3>
                                <ul class="attacks-panel__tally">
                                    {tally
                                        .into_iter()
                                        .map(|(label, count)| {
                                            view! { <li><strong>{label}": "</strong>{count}</li> }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                            .into_any()
                    })
                })
            }}
        </section>
    }
}

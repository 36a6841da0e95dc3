//! Totals and attack share across every stored prompt.

use leptos::prelude::*;

use super::panel::render_slot;
use crate::state::prompts::{PromptListSlot, use_prompts_client};
use crate::util::stats::{attack_count, attack_percentage, format_percent};

/// Total prompts, total attacks, and attack percentage from `/prompts`.
#[component]
pub fn PromptsOverview() -> impl IntoView {
    let client = use_prompts_client();
    let prompts = RwSignal::new(PromptListSlot::pending());

    Effect::new(move || client.fetch_all(prompts));

    view! {
        <section class="panel prompts-overview">
            <h2>"Prompts Overview"</h2>
            {move || {
                prompts.with(|slot| {
                    render_slot(slot, "Loading prompts data...", "No prompts data available", |records| {
                        let total = records.len();
                        let attacks = attack_count(records);
                        let share = format_percent(attack_percentage(total, attacks));
                        view! {
                            <div class="panel__stats">
                                <p><strong>"Total Prompts: "</strong>{total}</p>
                                <p><strong>"Total Attacks: "</strong>{attacks}</p>
                                <p><strong>"Attack Percentage: "</strong>{share}</p>
                            </div>
                        }
                            .into_any()
                    })
                })
            }}
        </section>
    }
}

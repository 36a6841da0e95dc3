//! Prompts the classifier let through.

use leptos::prelude::*;

use super::panel::render_slot;
use crate::state::prompts::{PromptListSlot, use_prompts_client};
use crate::util::stats::{format_date, sort_by_recency};

const RECENT_CLEAN_LIMIT: usize = 5;

/// Clean prompt count plus the latest few clean prompts.
#[component]
pub fn CleanPromptsPanel() -> impl IntoView {
    let client = use_prompts_client();
    let clean = RwSignal::new(PromptListSlot::pending());

    Effect::new(move || client.fetch_clean(clean));

    view! {
        <section class="panel clean-prompts">
            <h2>"Clean Prompts"</h2>
            {move || {
                clean.with(|slot| {
                    render_slot(slot, "Loading clean prompts...", "No clean prompts available", |records| {
                        let recent = sort_by_recency(records);
                        view! {
                            <div class="panel__stats">
                                <p><strong>"Clean Prompts: "</strong>{records.len()}</p>
                                <ul class="clean-prompts__recent">
                                    {recent
                                        .into_iter()
                                        .take(RECENT_CLEAN_LIMIT)
                                        .map(|record| {
                                            view! {
                                                <li>
                                                    <span class="clean-prompts__date">{format_date(&record.created_at)}</span>
                                                    " "
                                                    <span class="clean-prompts__text">{record.prompt}</span>
                                                </li>
                                            }
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

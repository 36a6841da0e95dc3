//! Single-line input form bound to the chat draft.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::chat::{ChatState, submit};

/// Draft input and send button. Enter submits.
#[component]
pub fn ChatInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = use_context::<ApiConfig>().unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = chat.with_untracked(|c| c.draft.clone());
        submit(chat, config.clone(), text);
    };

    view! {
        <form class="chat__input-row" on:submit=on_submit>
            <input
                class="chat__input"
                type="text"
                placeholder="Type a message..."
                prop:value=move || chat.with(|c| c.draft.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    chat.update(|c| c.set_draft(value));
                }
            />
            <button
                class="btn btn--primary chat__send"
                type="submit"
                disabled=move || chat.with(|c| c.draft.trim().is_empty())
            >
                "Send"
            </button>
        </form>
    }
}

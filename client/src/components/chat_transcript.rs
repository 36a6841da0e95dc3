//! Scrolling list of chat turns.
//!
//! Assistant turns are rendered as markdown (raw HTML escaped); user turns
//! are shown verbatim.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatState, ChatTurn};
use crate::util::markdown::render_markdown_html;

/// Transcript of the current conversation.
#[component]
pub fn ChatTranscript() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn in view.
    Effect::new(move || {
        let _ = chat.with(|c| (c.turns.len(), c.pending));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="chat__messages" node_ref=messages_ref>
            {move || {
                chat.with(|c| {
                    c.turns
                        .iter()
                        .map(|turn| view! { <ChatBubble turn=turn.clone()/> })
                        .collect::<Vec<_>>()
                })
            }}
            {move || {
                chat.with(ChatState::is_waiting)
                    .then(|| view! { <div class="chat__thinking">"Thinking..."</div> })
            }}
        </div>
    }
}

#[component]
fn ChatBubble(turn: ChatTurn) -> impl IntoView {
    let is_assistant = turn.role == ChatRole::Assistant;
    let class = format!("message message--{}", turn.role.as_str());
    let body = if is_assistant {
        let rendered = render_markdown_html(&turn.content);
        view! { <div class="message__content message__content--markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <div class="message__content">{turn.content}</div> }.into_any()
    };

    view! {
        <div class=class>
            {is_assistant.then(|| view! { <span class="message__icon" aria-hidden="true">"🛡"</span> })}
            {body}
        </div>
    }
}

//! Shared rendering for a panel backed by one query slot.

use leptos::prelude::*;

use crate::state::query::{QueryPhase, QuerySlot};

/// Render the loading, error, ready, or empty state of `slot`.
///
/// `ready` only runs when the slot holds data and is not loading.
pub fn render_slot<T>(
    slot: &QuerySlot<T>,
    loading_text: &'static str,
    empty_text: &'static str,
    ready: impl FnOnce(&T) -> AnyView,
) -> AnyView {
    match slot.phase() {
        QueryPhase::Loading => view! { <div class="panel__loading">{loading_text}</div> }.into_any(),
        QueryPhase::Failed(message) => {
            view! { <div class="panel__error">{message.to_owned()}</div> }.into_any()
        }
        QueryPhase::Ready(data) => ready(data),
        QueryPhase::Idle => view! { <p class="panel__empty">{empty_text}</p> }.into_any(),
    }
}

//! Generic lifecycle of one asynchronous read.
//!
//! DESIGN
//! ======
//! Every dashboard panel tracks the same `(data, loading, error)` triple for
//! its request, so the transitions live here once and each endpoint gets its
//! own `QuerySlot<T>` instance. A slot is held in an `RwSignal` and replaced
//! in a single `update`, so the view never observes a half-applied transition.
//!
//! Repeated fetches into one slot are not sequenced: whichever response
//! settles last is what the slot shows.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt::Display;
use std::future::Future;

use leptos::prelude::*;

/// `(data, loading, error)` state for one query.
#[derive(Clone, Debug, PartialEq)]
pub struct QuerySlot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for QuerySlot<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

/// What a view should render for a slot, in precedence order.
#[derive(Debug, PartialEq)]
pub enum QueryPhase<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a T),
    Idle,
}

impl<T> QuerySlot<T> {
    /// A slot whose first fetch is about to start; panels render their
    /// loading state from the first frame.
    pub fn pending() -> Self {
        Self { data: None, loading: true, error: None }
    }

    /// Mark a fetch as started. Previously fetched data stays displayable.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a successful result.
    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    /// Record a failure. Stale data is discarded.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.data = None;
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Apply a finished request.
    pub fn settle<E: Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(data) => self.succeed(data),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Render phase: loading wins over error, error over data.
    pub fn phase(&self) -> QueryPhase<'_, T> {
        if self.loading {
            QueryPhase::Loading
        } else if let Some(message) = &self.error {
            QueryPhase::Failed(message)
        } else if let Some(data) = &self.data {
            QueryPhase::Ready(data)
        } else {
            QueryPhase::Idle
        }
    }
}

/// Mark `slot` loading, then run `request` on the browser task queue and
/// settle its result into the slot.
///
/// Outside the browser the request is polled once and settled immediately;
/// a request that would need to wait fails as unavailable.
pub fn spawn_into<T, E, Fut>(slot: RwSignal<QuerySlot<T>>, label: String, request: Fut)
where
    T: Send + Sync + 'static,
    E: Display + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    slot.update(QuerySlot::begin);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = request.await;
        match &result {
            Ok(_) => leptos::logging::log!("{label} loaded"),
            Err(e) => leptos::logging::warn!("{label} failed: {e}"),
        }
        slot.update(|s| s.settle(result));
    });

    // No browser task queue: only futures that resolve on first poll can
    // settle here, which covers every `Unavailable` request stub.
    #[cfg(not(feature = "hydrate"))]
    {
        use futures::FutureExt;

        match request.now_or_never() {
            Some(result) => {
                if let Err(e) = &result {
                    leptos::logging::warn!("{label} failed: {e}");
                }
                slot.update(|s| s.settle(result));
            }
            None => {
                leptos::logging::warn!("{label} cannot run outside the browser");
                slot.update(|s| s.fail(crate::net::error::ApiError::Unavailable.to_string()));
            }
        }
    }
}

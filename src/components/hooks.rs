//! Reactive wiring between the browser location and the stores.
//!
//! The reconciliation logic itself lives in [`crate::core::sync`]; these
//! hooks only decide *when* it runs.

use std::future::Future;

use leptos::prelude::*;

use crate::app::{AppContext, FilterSignal};
use crate::core::{FetchError, ModalStore, reconcile_modal, sync_filters, sync_origin};
use crate::models::{LoadStatus, Location, ModalState};
use crate::utils::log;

/// Keep a listing's filter store equal to the decoded URL query.
///
/// Re-runs on every location change. The effect belongs to the calling
/// component and stops when it unmounts.
pub fn use_filter_sync(store: FilterSignal, location: RwSignal<Location>) {
    Effect::new(move |_| {
        let query = location.with(|l| l.query.clone());
        sync_filters(&query, &store);
    });
}

/// Bind the transaction modal to the `tab` query parameter.
///
/// One effect observes both the modal signals and the location. It
/// remembers the modal state it last left behind; if the state differs on
/// the next run, the store changed, otherwise the location did. The first
/// run is treated as a navigation so a deep link opens the modal.
pub fn use_modal_sync(ctx: AppContext) {
    let nav = ctx.navigation();
    let modal = ctx.modal;

    Effect::new(move |prev: Option<ModalState>| {
        let state = modal.tracked_state();
        ctx.location.track();

        reconcile_modal(sync_origin(prev, state), &nav, &modal);

        modal.state()
    });
}

/// Move `status` from idle to loading and settle it with `fetch`.
///
/// Does nothing if the status already left `Idle`, so a load runs at most
/// once per status signal.
pub fn start_load<T, Fut>(status: RwSignal<LoadStatus<T>>, what: &'static str, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let started = status.try_update(|s| s.begin()).unwrap_or(false);
    if !started {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            log::warn(&format!("{} load failed: {}", what, e));
        }
        // The owning page may have unmounted while the request was in flight.
        let _ = status.try_update(|s| s.resolve(result));
    });
}

/// Create a status signal and start its load immediately (mount-time load).
pub fn use_load<T, Fut>(what: &'static str, fetch: Fut) -> RwSignal<LoadStatus<T>>
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let status = RwSignal::new(LoadStatus::Idle);
    start_load(status, what, fetch);
    status
}

//! URL <-> store synchronization.
//!
//! - Filters flow one way: every navigation replaces the filter store with
//!   the decoded query ([`sync_filters`]).
//! - The transaction modal is bound both ways to the `tab` parameter
//!   through one reconciliation function ([`reconcile_modal`]). Each call
//!   compares the proposed value with the current one before writing, so the
//!   URL rewrite caused by a store change is a no-op when observed again.
//!
//! Stores and navigation are passed in explicitly; nothing here reaches for
//! global context.

use crate::config::query_keys;
use crate::core::codec;
use crate::core::navigation::Navigation;
use crate::models::{FilterState, ModalState, QueryString, TransactionTab};

/// Write access to a listing's filter state.
pub trait FilterStore {
    fn state(&self) -> FilterState;
    fn set_state(&self, state: FilterState);
}

/// Write access to the transaction modal state.
pub trait ModalStore {
    fn state(&self) -> ModalState;
    fn set_open(&self, open: bool);
    fn set_active_tab(&self, tab: TransactionTab);
}

/// Replace the filter store with the state decoded from `query`.
///
/// Returns `true` if the store was written.
pub fn sync_filters(query: &QueryString, store: &impl FilterStore) -> bool {
    let next = codec::decode(query);
    if store.state() == next {
        return false;
    }
    store.set_state(next);
    true
}

/// Which side changed and triggered a reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOrigin {
    /// The query string changed (navigation, back/forward, initial load).
    Navigation,
    /// The modal store changed (user opened, closed, or switched tabs).
    Store,
}

/// Decide which side triggered a modal sync pass.
///
/// `prev` is the modal state the previous pass left behind (`None` on the
/// first pass). A state that moved since then was changed by the store;
/// otherwise only the location can have changed. The first pass counts as a
/// navigation so a deep link opens the modal.
pub fn sync_origin(prev: Option<ModalState>, current: ModalState) -> SyncOrigin {
    match prev {
        Some(prev) if prev != current => SyncOrigin::Store,
        _ => SyncOrigin::Navigation,
    }
}

/// What a reconciliation pass wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalSync {
    Unchanged,
    StoreUpdated,
    UrlReplaced,
}

/// Make the modal store and the `tab` parameter agree.
///
/// From [`SyncOrigin::Navigation`] the URL wins: a recognized `tab` opens
/// the modal on that tab, a missing `tab` closes it, and an unrecognized
/// value changes nothing. From [`SyncOrigin::Store`] the store wins: the
/// query is rewritten with a history replace.
pub fn reconcile_modal(
    origin: SyncOrigin,
    nav: &impl Navigation,
    store: &impl ModalStore,
) -> ModalSync {
    match origin {
        SyncOrigin::Navigation => modal_from_query(&nav.query(), store),
        SyncOrigin::Store => modal_to_query(nav, store),
    }
}

fn modal_from_query(query: &QueryString, store: &impl ModalStore) -> ModalSync {
    let current = store.state();
    let next = match query.get(query_keys::TAB) {
        None => ModalState::closed(current.active_tab),
        Some(value) => match TransactionTab::from_param(value) {
            Some(tab) => ModalState::opened(tab),
            // Unrecognized values are left in the URL untouched, even while
            // the modal is closed; only a recognized tab is ours to rewrite.
            None => return ModalSync::Unchanged,
        },
    };

    if next == current {
        return ModalSync::Unchanged;
    }
    if next.active_tab != current.active_tab {
        store.set_active_tab(next.active_tab);
    }
    if next.is_open != current.is_open {
        store.set_open(next.is_open);
    }
    ModalSync::StoreUpdated
}

fn modal_to_query(nav: &impl Navigation, store: &impl ModalStore) -> ModalSync {
    let wanted = store.state().query_value();
    let query = nav.query();
    if query.get(query_keys::TAB) == wanted {
        return ModalSync::Unchanged;
    }

    let mut next = query;
    match wanted {
        Some(tab) => next.set(query_keys::TAB, tab),
        None => {
            next.remove(query_keys::TAB);
        }
    }
    nav.replace_query(&next);
    ModalSync::UrlReplaced
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::core::navigation::MemoryNavigation;
    use crate::models::FilterSection;

    #[derive(Default)]
    struct MemoryFilters {
        state: RefCell<FilterState>,
        writes: Cell<usize>,
    }

    impl FilterStore for MemoryFilters {
        fn state(&self) -> FilterState {
            self.state.borrow().clone()
        }

        fn set_state(&self, state: FilterState) {
            *self.state.borrow_mut() = state;
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[derive(Default)]
    struct MemoryModal {
        state: Cell<ModalState>,
        writes: Cell<usize>,
    }

    impl MemoryModal {
        fn with(state: ModalState) -> Self {
            let modal = Self::default();
            modal.state.set(state);
            modal
        }
    }

    impl ModalStore for MemoryModal {
        fn state(&self) -> ModalState {
            self.state.get()
        }

        fn set_open(&self, open: bool) {
            let mut state = self.state.get();
            state.is_open = open;
            self.state.set(state);
            self.writes.set(self.writes.get() + 1);
        }

        fn set_active_tab(&self, tab: TransactionTab) {
            let mut state = self.state.get();
            state.active_tab = tab;
            self.state.set(state);
            self.writes.set(self.writes.get() + 1);
        }
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    #[test]
    fn test_sync_filters_replaces_store() {
        let store = MemoryFilters::default();
        let query = QueryString::parse("?category=slots&provider=pragmatic");

        assert!(sync_filters(&query, &store));
        let state = store.state();
        assert!(state.is_selected(FilterSection::Category, "slots"));
        assert!(state.is_selected(FilterSection::Provider, "pragmatic"));
    }

    #[test]
    fn test_sync_filters_back_navigation_drops_selection() {
        let store = MemoryFilters::default();
        sync_filters(&QueryString::parse("?category=slots&category=live"), &store);
        sync_filters(&QueryString::parse("?category=live"), &store);

        let state = store.state();
        assert!(!state.is_selected(FilterSection::Category, "slots"));
        assert!(state.is_selected(FilterSection::Category, "live"));
    }

    #[test]
    fn test_sync_filters_skips_identical_state() {
        let store = MemoryFilters::default();
        let query = QueryString::parse("?volatility=high&tab=deposit");

        assert!(sync_filters(&query, &store));
        // A modal-only change leaves the decoded filters identical.
        let query = QueryString::parse("?volatility=high&tab=swap");
        assert!(!sync_filters(&query, &store));
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn test_sync_filters_malformed_is_absent() {
        let store = MemoryFilters::default();
        sync_filters(&QueryString::parse("?page=two&theme="), &store);
        assert_eq!(store.state(), FilterState::new());
        assert_eq!(store.writes.get(), 0);
    }

    // ------------------------------------------------------------------
    // Modal: store -> URL
    // ------------------------------------------------------------------

    #[test]
    fn test_open_modal_writes_tab() {
        let nav = MemoryNavigation::default();
        let store = MemoryModal::with(ModalState::opened(TransactionTab::Deposit));

        assert_eq!(
            reconcile_modal(SyncOrigin::Store, &nav, &store),
            ModalSync::UrlReplaced
        );
        let tabs: Vec<_> = nav.query().get_all("tab").map(str::to_string).collect();
        assert_eq!(tabs, vec!["deposit".to_string()]);
        assert_eq!(nav.replaces(), 1);
        assert_eq!(nav.pushes(), 0);
    }

    #[test]
    fn test_switch_tab_rewrites_in_place() {
        let nav = MemoryNavigation::with_search("?category=slots&tab=deposit&page=2");
        let store = MemoryModal::with(ModalState::opened(TransactionTab::Withdraw));

        reconcile_modal(SyncOrigin::Store, &nav, &store);
        assert_eq!(nav.query().to_search(), "?category=slots&tab=withdraw&page=2");
    }

    #[test]
    fn test_close_modal_removes_tab() {
        let nav = MemoryNavigation::with_search("?tab=swap&provider=netent");
        let store = MemoryModal::with(ModalState::closed(TransactionTab::Swap));

        assert_eq!(
            reconcile_modal(SyncOrigin::Store, &nav, &store),
            ModalSync::UrlReplaced
        );
        assert_eq!(nav.query().to_search(), "?provider=netent");
    }

    #[test]
    fn test_store_origin_noop_when_in_sync() {
        let nav = MemoryNavigation::with_search("?tab=deposit");
        let store = MemoryModal::with(ModalState::opened(TransactionTab::Deposit));

        assert_eq!(
            reconcile_modal(SyncOrigin::Store, &nav, &store),
            ModalSync::Unchanged
        );
        assert_eq!(nav.replaces(), 0);
    }

    // ------------------------------------------------------------------
    // Modal: URL -> store
    // ------------------------------------------------------------------

    #[test]
    fn test_tab_param_opens_closed_modal() {
        let nav = MemoryNavigation::with_search("?tab=swap");
        let store = MemoryModal::default();

        assert_eq!(
            reconcile_modal(SyncOrigin::Navigation, &nav, &store),
            ModalSync::StoreUpdated
        );
        assert_eq!(store.state(), ModalState::opened(TransactionTab::Swap));
    }

    #[test]
    fn test_unknown_tab_leaves_store_unchanged() {
        let nav = MemoryNavigation::with_search("?tab=unknown");

        let closed = MemoryModal::default();
        assert_eq!(
            reconcile_modal(SyncOrigin::Navigation, &nav, &closed),
            ModalSync::Unchanged
        );
        assert_eq!(closed.state(), ModalState::default());

        let open = MemoryModal::with(ModalState::opened(TransactionTab::Withdraw));
        reconcile_modal(SyncOrigin::Navigation, &nav, &open);
        assert_eq!(open.state(), ModalState::opened(TransactionTab::Withdraw));
        assert_eq!(open.writes.get(), 0);
    }

    #[test]
    fn test_missing_tab_closes_open_modal() {
        let nav = MemoryNavigation::with_search("?category=slots");
        let store = MemoryModal::with(ModalState::opened(TransactionTab::Deposit));

        reconcile_modal(SyncOrigin::Navigation, &nav, &store);
        assert_eq!(store.state(), ModalState::closed(TransactionTab::Deposit));
    }

    #[test]
    fn test_navigation_only_writes_changed_fields() {
        let nav = MemoryNavigation::with_search("?tab=swap");
        let store = MemoryModal::with(ModalState::opened(TransactionTab::Deposit));

        reconcile_modal(SyncOrigin::Navigation, &nav, &store);
        assert_eq!(store.state(), ModalState::opened(TransactionTab::Swap));
        assert_eq!(store.writes.get(), 1);
    }

    // ------------------------------------------------------------------
    // Convergence
    // ------------------------------------------------------------------

    /// One pass of the modal sync effect: pick the origin, reconcile, and
    /// return the state to remember for the next pass.
    fn effect_pass(
        prev: Option<ModalState>,
        nav: &MemoryNavigation,
        store: &MemoryModal,
    ) -> (SyncOrigin, ModalSync, Option<ModalState>) {
        let origin = sync_origin(prev, store.state());
        let outcome = reconcile_modal(origin, nav, store);
        (origin, outcome, Some(store.state()))
    }

    #[test]
    fn test_sync_origin_first_pass_is_navigation() {
        let nav = MemoryNavigation::with_search("?tab=deposit");
        let store = MemoryModal::default();

        let (origin, outcome, _) = effect_pass(None, &nav, &store);
        assert_eq!(origin, SyncOrigin::Navigation);
        assert_eq!(outcome, ModalSync::StoreUpdated);
        assert_eq!(store.state(), ModalState::opened(TransactionTab::Deposit));
    }

    #[test]
    fn test_sync_origin_own_store_write_is_noop() {
        let nav = MemoryNavigation::with_search("?tab=swap");
        let store = MemoryModal::default();

        let (_, _, prev) = effect_pass(None, &nav, &store);
        // The effect re-runs because it wrote the store it tracks.
        let (origin, outcome, _) = effect_pass(prev, &nav, &store);
        assert_eq!(origin, SyncOrigin::Navigation);
        assert_eq!(outcome, ModalSync::Unchanged);
        assert_eq!(store.writes.get(), 2);
        assert_eq!(nav.replaces(), 0);
    }

    #[test]
    fn test_sync_origin_tab_switch_is_store() {
        let nav = MemoryNavigation::with_search("?tab=deposit");
        let store = MemoryModal::default();
        let (_, _, prev) = effect_pass(None, &nav, &store);

        store.set_active_tab(TransactionTab::Withdraw);
        let (origin, outcome, prev) = effect_pass(prev, &nav, &store);
        assert_eq!(origin, SyncOrigin::Store);
        assert_eq!(outcome, ModalSync::UrlReplaced);
        assert_eq!(nav.query().get("tab"), Some("withdraw"));

        // The URL rewrite re-triggers the effect and settles.
        let (origin, outcome, _) = effect_pass(prev, &nav, &store);
        assert_eq!(origin, SyncOrigin::Navigation);
        assert_eq!(outcome, ModalSync::Unchanged);
        assert_eq!(nav.replaces(), 1);
    }

    #[test]
    fn test_sync_origin_back_after_close_is_navigation() {
        let nav = MemoryNavigation::with_search("?category=slots");
        let store = MemoryModal::default();
        let (_, _, prev) = effect_pass(None, &nav, &store);

        // Open, then close; both settle into the URL.
        store.set_active_tab(TransactionTab::Swap);
        store.set_open(true);
        let (_, _, prev) = effect_pass(prev, &nav, &store);
        let (_, _, prev) = effect_pass(prev, &nav, &store);
        store.set_open(false);
        let (_, _, prev) = effect_pass(prev, &nav, &store);
        assert_eq!(nav.query().to_search(), "?category=slots");

        // Back lands on an entry without `tab`; the store did not move.
        nav.navigate("?category=slots&provider=netent");
        let (origin, outcome, _) = effect_pass(prev, &nav, &store);
        assert_eq!(origin, SyncOrigin::Navigation);
        assert_eq!(outcome, ModalSync::Unchanged);
        assert!(!store.state().is_open);
    }

    #[test]
    fn test_store_rewrite_is_not_reapplied() {
        let nav = MemoryNavigation::with_search("?category=live");
        let store = MemoryModal::default();

        // User opens the deposit tab.
        store.set_active_tab(TransactionTab::Deposit);
        store.set_open(true);
        let writes = store.writes.get();

        assert_eq!(
            reconcile_modal(SyncOrigin::Store, &nav, &store),
            ModalSync::UrlReplaced
        );
        // The rewritten URL is observed as a navigation change.
        assert_eq!(
            reconcile_modal(SyncOrigin::Navigation, &nav, &store),
            ModalSync::Unchanged
        );
        assert_eq!(store.writes.get(), writes);
        assert_eq!(nav.replaces(), 1);
    }

    #[test]
    fn test_navigation_update_is_not_rewritten() {
        let nav = MemoryNavigation::default();
        let store = MemoryModal::default();

        nav.navigate("?tab=withdraw");
        assert_eq!(
            reconcile_modal(SyncOrigin::Navigation, &nav, &store),
            ModalSync::StoreUpdated
        );
        // The store write is observed as a store change.
        assert_eq!(
            reconcile_modal(SyncOrigin::Store, &nav, &store),
            ModalSync::Unchanged
        );
        assert_eq!(nav.replaces(), 0);
    }

    #[test]
    fn test_close_then_back_reopens() {
        let nav = MemoryNavigation::with_search("?tab=deposit");
        let store = MemoryModal::with(ModalState::opened(TransactionTab::Deposit));

        store.set_open(false);
        reconcile_modal(SyncOrigin::Store, &nav, &store);
        assert!(!nav.query().contains_key("tab"));

        // Browser back to a URL that still carries the tab.
        nav.navigate("?tab=deposit");
        reconcile_modal(SyncOrigin::Navigation, &nav, &store);
        assert_eq!(store.state(), ModalState::opened(TransactionTab::Deposit));
        assert_eq!(
            reconcile_modal(SyncOrigin::Store, &nav, &store),
            ModalSync::Unchanged
        );
    }
}

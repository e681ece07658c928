//! Root application module.
//!
//! Contains the main App component, the AppContext store, and the
//! signal-backed implementations of the store traits used by the
//! synchronizers.

use leptos::error::Errors;
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::components::hooks::start_load;
use crate::config::{APP_NAME, APP_VERSION, query_keys};
use crate::core::{BrowserNavigation, FilterStore, ModalStore, api};
use crate::models::{
    AppRoute, FilterState, LoadStatus, Location, ModalState, QueryString, TransactionTab,
    UserProfile,
};
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/layout.module.css");

// ============================================================================
// ModalSignals
// ============================================================================

/// Transaction modal state managed with Leptos signals.
///
/// Created once with the app context and kept for the session only.
#[derive(Clone, Copy)]
pub struct ModalSignals {
    pub is_open: RwSignal<bool>,
    pub active_tab: RwSignal<TransactionTab>,
}

impl ModalSignals {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            active_tab: RwSignal::new(TransactionTab::default()),
        }
    }

    /// Open the modal on `tab`.
    pub fn open(&self, tab: TransactionTab) {
        self.active_tab.set(tab);
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }

    /// Switch tabs without changing visibility.
    pub fn select_tab(&self, tab: TransactionTab) {
        self.active_tab.set(tab);
    }

    /// Current state, subscribing the caller to both signals.
    pub fn tracked_state(&self) -> ModalState {
        ModalState {
            is_open: self.is_open.get(),
            active_tab: self.active_tab.get(),
        }
    }
}

impl Default for ModalSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStore for ModalSignals {
    fn state(&self) -> ModalState {
        ModalState {
            is_open: self.is_open.get_untracked(),
            active_tab: self.active_tab.get_untracked(),
        }
    }

    fn set_open(&self, open: bool) {
        self.is_open.set(open);
    }

    fn set_active_tab(&self, tab: TransactionTab) {
        self.active_tab.set(tab);
    }
}

// ============================================================================
// FilterSignal
// ============================================================================

/// Game listing filter state, owned by the listing page.
///
/// Dropped with the page's reactive owner when the listing unmounts.
#[derive(Clone, Copy)]
pub struct FilterSignal(pub RwSignal<FilterState>);

impl FilterSignal {
    pub fn new(initial: FilterState) -> Self {
        Self(RwSignal::new(initial))
    }
}

impl FilterStore for FilterSignal {
    fn state(&self) -> FilterState {
        self.0.get_untracked()
    }

    fn set_state(&self, state: FilterState) {
        self.0.set(state);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current path and query (source of truth for routing and filters).
    pub location: RwSignal<Location>,

    /// Transaction modal state.
    pub modal: ModalSignals,

    /// Signed-in user, loaded once at startup.
    pub profile: RwSignal<LoadStatus<UserProfile>>,
}

impl AppContext {
    /// Creates a new application context from the current browser URL.
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(Location::from_parts(
                &dom::current_path(),
                &dom::current_search(),
            )),
            modal: ModalSignals::new(),
            profile: RwSignal::new(LoadStatus::Idle),
        }
    }

    /// Navigation handle bound to this context's location.
    pub fn navigation(&self) -> BrowserNavigation {
        BrowserNavigation::new(self.location)
    }

    /// Go to another page, recording a history entry.
    ///
    /// Page-specific query keys are dropped; the modal `tab` is carried over
    /// so an open modal stays open.
    pub fn navigate(&self, route: AppRoute) {
        self.navigate_with(route, QueryString::new());
    }

    /// Go to another page with its own query parameters.
    pub fn navigate_with(&self, route: AppRoute, mut query: QueryString) {
        if let Some(tab) = self
            .location
            .with_untracked(|l| l.query.get(query_keys::TAB).map(str::to_string))
        {
            query.set(query_keys::TAB, tab);
        }
        let next = Location::new(route, query);
        dom::push_url(&next.href());
        self.location.set(next);
    }

    /// Start the one-shot profile load.
    pub fn load_profile(&self) {
        start_load(self.profile, "profile", api::load_profile());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root component: provides [`AppContext`], starts the profile load, and
/// catches render errors below the router.
#[component]
pub fn App() -> impl IntoView {
    log::info(&format!("{} v{}", APP_NAME, APP_VERSION));

    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load_profile();

    view! {
        <ErrorBoundary fallback=|errors| view! { <Crashed errors=errors /> }>
            <AppRouter />
        </ErrorBoundary>
    }
}

#[component]
fn Crashed(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let reload = |_| {
        if let Some(window) = dom::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class=css::crash>
            <h1>"Something went wrong"</h1>
            <p class=css::muted>"The page hit an unexpected error. Reloading usually fixes it."</p>
            <ul class=css::crashList>
                {move || errors.get()
                    .into_iter()
                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                    .collect_view()}
            </ul>
            <button class=css::button on:click=reload>"Reload"</button>
        </div>
    }
}

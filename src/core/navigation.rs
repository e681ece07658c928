//! Navigation layer seen by the synchronizers.
//!
//! [`Navigation`] is the injected handle through which query-string writes
//! happen. The browser implementation keeps the reactive [`Location`]
//! signal in step with `history`, because `pushState`/`replaceState` do not
//! fire `popstate`.

use leptos::prelude::*;

use crate::models::{Location, QueryString};
use crate::utils::dom;

/// Read and write access to the current query string.
pub trait Navigation {
    /// Current query string.
    fn query(&self) -> QueryString;

    /// Replace the query without recording a history entry.
    fn replace_query(&self, query: &QueryString);

    /// Navigate to a new query, recording a history entry.
    fn push_query(&self, query: &QueryString);
}

/// Navigation backed by `window.history` and the app's location signal.
#[derive(Clone, Copy)]
pub struct BrowserNavigation {
    location: RwSignal<Location>,
}

impl BrowserNavigation {
    pub fn new(location: RwSignal<Location>) -> Self {
        Self { location }
    }

    fn next_location(&self, query: &QueryString) -> Location {
        let route = self.location.with_untracked(|l| l.route.clone());
        Location::new(route, query.clone())
    }
}

impl Navigation for BrowserNavigation {
    fn query(&self) -> QueryString {
        self.location.with_untracked(|l| l.query.clone())
    }

    fn replace_query(&self, query: &QueryString) {
        let next = self.next_location(query);
        dom::replace_url(&next.href());
        self.location.set(next);
    }

    fn push_query(&self, query: &QueryString) {
        let next = self.next_location(query);
        dom::push_url(&next.href());
        self.location.set(next);
    }
}

/// In-memory navigation that records how it was written to.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryNavigation {
    current: std::cell::RefCell<QueryString>,
    replaces: std::cell::Cell<usize>,
    pushes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryNavigation {
    pub fn with_search(search: &str) -> Self {
        let nav = Self::default();
        *nav.current.borrow_mut() = QueryString::parse(search);
        nav
    }

    /// Simulate a user navigation (back/forward or typed URL).
    pub fn navigate(&self, search: &str) {
        *self.current.borrow_mut() = QueryString::parse(search);
    }

    pub fn replaces(&self) -> usize {
        self.replaces.get()
    }

    pub fn pushes(&self) -> usize {
        self.pushes.get()
    }
}

#[cfg(test)]
impl Navigation for MemoryNavigation {
    fn query(&self) -> QueryString {
        self.current.borrow().clone()
    }

    fn replace_query(&self, query: &QueryString) {
        *self.current.borrow_mut() = query.clone();
        self.replaces.set(self.replaces.get() + 1);
    }

    fn push_query(&self, query: &QueryString) {
        *self.current.borrow_mut() = query.clone();
        self.pushes.set(self.pushes.get() + 1);
    }
}

//! Core client logic, independent of any view.
//!
//! This module provides:
//! - [`codec`] filter state <-> query string translation
//! - [`sync`] URL/store reconciliation for filters and the transaction modal
//! - [`gate`] load-status render gating
//! - [`navigation`] the injected navigation layer
//! - [`api`] REST calls
//! - [`validate`] wallet form input checks

pub mod api;
pub mod codec;
pub mod error;
pub mod gate;
pub mod navigation;
pub mod sync;
pub mod validate;

pub use error::{FetchError, ValidationError};
pub use navigation::{BrowserNavigation, Navigation};
pub use sync::{FilterStore, ModalStore, ModalSync, SyncOrigin, reconcile_modal, sync_filters, sync_origin};

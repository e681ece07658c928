//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_json_cached`], [`post_json`] - Network fetching with timeout
//! - [`dom`] - Window, storage, and history access
//! - [`format`] - Dates, addresses, and amounts for display
//! - [`log`] - Browser console logging

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::{fetch_json, fetch_json_cached, post_json, with_timeout};

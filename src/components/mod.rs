//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`hooks`] - Reactive wiring for URL sync and one-shot loads
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`nav`] - Top bar with page links and the wallet button
//! - [`games`], [`providers`], [`bets`], [`profile`] - Pages
//! - [`modal`] - Wallet transaction modal

pub mod bets;
pub mod games;
pub mod hooks;
pub mod icons;
pub mod modal;
pub mod nav;
pub mod profile;
pub mod providers;
pub mod router;

pub use router::AppRouter;

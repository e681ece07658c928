//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`QueryString`] - Ordered URL query pairs
//! - [`FilterState`], [`FilterSection`] - Game listing filters and pagination
//! - [`ModalState`], [`TransactionTab`] - Wallet transaction modal
//! - [`LoadStatus`] - One-shot load status used by render gates
//! - [`AppRoute`], [`Location`] - Path-based page routing
//! - [`api`] - REST payloads

pub mod api;
mod filter;
mod load;
mod modal;
mod query;
mod route;

pub use api::{
    BetRecord, Game, GetGameUrlRequestBody, GetGameUrlResponse, LaunchMode, Provider,
    Transaction, TransactionKind, TransactionStatus, UserProfile,
};
pub use filter::{FilterSection, FilterState, page_count, paginate};
pub use load::LoadStatus;
pub use modal::{ModalState, TransactionTab};
pub use query::QueryString;
pub use route::{AppRoute, Location};

//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the top bar.
pub const APP_NAME: &str = "lucky.bet";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Query Parameters
// =============================================================================

/// Query-string keys owned by the client.
///
/// Filter section keys live on [`crate::models::FilterSection`]; everything
/// listed here is a non-filter key.
pub mod query_keys {
    /// Transaction modal tab (`?tab=deposit`).
    pub const TAB: &str = "tab";
    /// Game listing pagination cursor (`?page=2`).
    pub const PAGE: &str = "page";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL for the platform REST API.
pub const API_BASE_URL: &str = "/api";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// REST endpoints, relative to [`API_BASE_URL`].
pub mod endpoints {
    pub const GAMES: &str = "games";
    pub const PROVIDERS: &str = "providers";
    pub const GAME_URL: &str = "games/url";
    pub const BETS: &str = "bets";
    pub const PROFILE: &str = "profile";
    pub const TRANSACTIONS: &str = "transactions";
}

/// Build an absolute API URL from an endpoint path.
pub fn api_url(endpoint: &str) -> String {
    format!("{}/{}", API_BASE_URL, endpoint)
}

// =============================================================================
// Listing Configuration
// =============================================================================

/// Number of games per listing page.
pub const PAGE_SIZE: usize = 24;

// =============================================================================
// Wallet Configuration
// =============================================================================

/// Decimal places used for balances and transaction amounts.
pub const AMOUNT_DECIMALS: u32 = 6;

/// Currencies offered in the swap tab.
pub const SWAP_CURRENCIES: &[&str] = &["USDT", "USDC", "ETH"];

/// Ethereum address display configuration.
pub mod eth_address {
    /// Full length of a `0x`-prefixed address.
    pub const FULL_LEN: usize = 42;
    /// Characters kept at the front when shortening (`0x1234`).
    pub const PREFIX_LEN: usize = 6;
    /// Start of the kept suffix when shortening (last four characters).
    pub const SUFFIX_START: usize = 38;
}

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the provider list.
    pub const PROVIDERS_KEY: &str = "providers_cache";
    /// sessionStorage key for the game catalog.
    pub const GAMES_KEY: &str = "games_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

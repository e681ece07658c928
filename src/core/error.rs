//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ValidationError`] - Wallet form input errors, rendered inline

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    #[error("Failed to encode request body: {0}")]
    BodyEncodeFailed(String),
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// Wallet form input errors.
///
/// These are shown next to the offending field and never abort anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Address is required")]
    EmptyAddress,
    #[error("Address must be 0x followed by 40 hex characters")]
    InvalidAddress,
    #[error("Address checksum does not match")]
    BadChecksum,
    #[error("Amount is required")]
    EmptyAmount,
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Amount has more than {0} decimal places")]
    TooManyDecimals(u32),
    #[error("Amount must be greater than zero")]
    ZeroAmount,
    #[error("Amount exceeds available balance of {0}")]
    InsufficientBalance(String),
    #[error("Choose two different currencies")]
    SameCurrency,
}

//! Asynchronous load status used to gate rendering.

use std::fmt::Display;

/// Status of a one-shot data load.
///
/// Transitions: `Idle -> Loading -> Success | Error`. There is no way back
/// to `Idle`; an error is terminal until the page is reloaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadStatus<T> {
    /// Move `Idle -> Loading`.
    ///
    /// Returns `false` (and changes nothing) from any other state, so a load
    /// can only ever be started once.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Settle a running load with its outcome.
    ///
    /// Ignored unless the status is `Loading`.
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) -> bool {
        if !matches!(self, Self::Loading) {
            return false;
        }
        *self = match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::Error(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Loaded value, if the load succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Failure message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

//! Render gate for asynchronously loaded listings.

use crate::models::LoadStatus;

/// What a gated listing should show.
#[derive(Debug, PartialEq)]
pub enum GateView<'a, T> {
    /// Nothing loaded yet (idle or loading): render the skeleton.
    Pending,
    /// The load failed; render the placeholder with the message.
    Failed(&'a str),
    /// Render the grid.
    Ready(&'a T),
}

/// Decide what to render for a load status.
///
/// Only a successful load reaches [`GateView::Ready`].
pub fn gate<T>(status: &LoadStatus<T>) -> GateView<'_, T> {
    match status {
        LoadStatus::Idle | LoadStatus::Loading => GateView::Pending,
        LoadStatus::Error(message) => GateView::Failed(message),
        LoadStatus::Success(value) => GateView::Ready(value),
    }
}

/// Whether the grid itself may render.
pub fn renders_grid<T>(status: &LoadStatus<T>) -> bool {
    matches!(gate(status), GateView::Ready(_))
}

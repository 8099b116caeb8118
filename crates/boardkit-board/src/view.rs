//! Read-side snapshot of one element.

use boardkit_core::Position;
use std::sync::Arc;

/// An element as seen by a reader: its id, a shared handle to its value,
/// and a copy of the positions it occupied at read time.
///
/// The view owns its position list and shares only the element. Mutating
/// the board afterwards never changes a view already handed out.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementView<K, T, S = Position> {
    /// Id of the element.
    pub id: K,
    /// Shared handle to the element value.
    pub element: Arc<T>,
    /// Positions the element occupies, oldest placement first.
    pub positions: Vec<S>,
}

impl<K, T, S> ElementView<K, T, S> {
    /// Whether the element was placed anywhere at read time.
    pub fn is_placed(&self) -> bool {
        !self.positions.is_empty()
    }
}

//! The [`Site`] trait: things a board can index.

use crate::limits::Limits;
use boardkit_core::Position;
use std::fmt::Debug;
use std::hash::Hash;

/// A location a board can place elements on.
///
/// A board indexes its placements by `Site` and asks each site whether it
/// lies inside the board's [`Limits`]. Plain boards use [`Position`]
/// directly; layered boards tag positions with the surface they belong to
/// and still defer the geometric check to the position.
pub trait Site: Clone + Eq + Hash + Debug {
    /// Whether this site is a concrete cell within `limits`.
    fn within(&self, limits: &Limits) -> bool;
}

impl Site for Position {
    fn within(&self, limits: &Limits) -> bool {
        limits.contains(self)
    }
}

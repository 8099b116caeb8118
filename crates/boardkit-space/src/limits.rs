//! Board limits and the inside-space predicate.

use crate::error::SpaceError;
use boardkit_core::Position;
use std::fmt;

/// Whether `point` is a concrete cell of `space`.
///
/// `space` holds one bound per dimension; `0` leaves that dimension
/// unbounded. A point component of `0` is undefined and never inside.
/// Tuples of different arity never match.
///
/// # Examples
///
/// ```
/// use boardkit_space::inside_space;
///
/// assert!(inside_space(&[3, 2], &[4, 4]));
/// assert!(inside_space(&[900, 2], &[0, 4]));
/// assert!(!inside_space(&[5, 2], &[4, 4]));
/// assert!(!inside_space(&[0, 2], &[0, 4]));
/// assert!(!inside_space(&[1, 1, 1], &[4, 4]));
/// ```
pub fn inside_space(point: &[u32], space: &[u32]) -> bool {
    point.len() == space.len()
        && point
            .iter()
            .zip(space)
            .all(|(&p, &s)| p != 0 && (s == 0 || p <= s))
}

/// Per-dimension upper bounds of a board.
///
/// Immutable once built. Every component is an inclusive upper bound on
/// the coordinate in that dimension, or `0` for an unbounded dimension.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Limits {
    bounds: Position,
}

impl Limits {
    /// Build limits from a bound tuple.
    ///
    /// Returns `Err(SpaceError::NoDimensions)` for an empty tuple.
    pub fn new(bounds: Position) -> Result<Self, SpaceError> {
        if bounds.is_empty() {
            return Err(SpaceError::NoDimensions);
        }
        Ok(Self { bounds })
    }

    /// Limits with `ndim` unbounded dimensions.
    pub fn unbounded(ndim: usize) -> Result<Self, SpaceError> {
        Self::new(smallvec::smallvec![0; ndim])
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.bounds.len()
    }

    /// The raw bound tuple.
    pub fn as_position(&self) -> &Position {
        &self.bounds
    }

    /// Whether dimension `dim` has an upper bound.
    ///
    /// Dimensions past [`ndim`](Self::ndim) report `false`.
    pub fn is_bounded(&self, dim: usize) -> bool {
        self.bounds.get(dim).is_some_and(|&b| b != 0)
    }

    /// Whether `point` is a concrete cell within these limits.
    pub fn contains(&self, point: &[u32]) -> bool {
        inside_space(point, &self.bounds)
    }
}

impl fmt::Debug for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limits({:?})", self.bounds.as_slice())
    }
}

impl TryFrom<Position> for Limits {
    type Error = SpaceError;

    fn try_from(bounds: Position) -> Result<Self, Self::Error> {
        Self::new(bounds)
    }
}

//! The [`Position`] type alias and the [`pos!`](crate::pos) constructor.

use smallvec::SmallVec;

/// A point on an N-dimensional board.
///
/// One unsigned component per dimension, counted from 1. A component of
/// `0` never names a concrete cell; inside a limits tuple it means the
/// dimension is unbounded.
///
/// Uses `SmallVec<[u32; 4]>` so boards of up to 4 dimensions never touch
/// the heap for a coordinate.
pub type Position = SmallVec<[u32; 4]>;

/// Build a [`Position`] from its components.
///
/// ```
/// use boardkit_core::{pos, Position};
///
/// let p: Position = pos![3, 2];
/// assert_eq!(p.as_slice(), &[3, 2]);
///
/// // The result is always a `Position`, even with no annotation.
/// assert_eq!(vec![pos![1, 1]], vec![Position::from_slice(&[1, 1])]);
/// ```
///
/// Components must already be `u32`; wider integers do not compile.
///
/// ```compile_fail
/// use boardkit_core::pos;
///
/// let far: u64 = (1 << 32) + 1;
/// let _ = pos![far, 1];
/// ```
#[macro_export]
macro_rules! pos {
    ($($component:expr),* $(,)?) => {{
        let position: $crate::position::Position =
            $crate::position::__smallvec![$($component),*];
        position
    }};
}

#[doc(hidden)]
pub use smallvec::smallvec as __smallvec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_macro_builds_components_in_order() {
        let p: Position = crate::pos![4, 1, 9];
        assert_eq!(p.len(), 3);
        assert_eq!(p[0], 4);
        assert_eq!(p[2], 9);
    }

    #[test]
    fn pos_macro_types_itself_without_annotation() {
        let placed = vec![crate::pos![2, 3], crate::pos![4, 1]];
        let expected: Vec<Position> = vec![
            Position::from_slice(&[2, 3]),
            Position::from_slice(&[4, 1]),
        ];
        assert_eq!(placed, expected);
        assert!(crate::pos![].is_empty());
    }

    #[test]
    fn pos_macro_keeps_full_u32_range() {
        let far = u32::MAX;
        assert_eq!(crate::pos![far, 1].as_slice(), &[u32::MAX, 1]);
    }

    #[test]
    fn positions_compare_structurally() {
        let a: Position = crate::pos![1, 2];
        let b: Position = crate::pos![1, 2];
        let c: Position = crate::pos![2, 1];
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

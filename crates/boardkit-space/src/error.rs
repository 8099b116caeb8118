//! Error types for space construction.

use std::fmt;

/// Errors arising from building a board's geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A limits tuple must describe at least one dimension.
    NoDimensions,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDimensions => write!(f, "limits must have at least one dimension"),
        }
    }
}

impl std::error::Error for SpaceError {}

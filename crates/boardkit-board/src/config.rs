//! Construction-time configuration for boards.

use boardkit_space::Limits;

/// Configuration for a [`Board`](crate::Board).
///
/// Both values are fixed once the board is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Display name, used only in diagnostics and errors.
    ///
    /// Default: [`BoardConfig::DEFAULT_NAME`].
    pub name: String,
    /// Per-dimension bounds; `0` leaves a dimension unbounded.
    pub limits: Limits,
}

impl BoardConfig {
    /// Name given to boards built without one.
    pub const DEFAULT_NAME: &'static str = "Unnamed board";

    /// Configuration for an unnamed board with the given limits.
    pub fn new(limits: Limits) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_owned(),
            limits,
        }
    }

    /// Replace the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Configuration for a [`LayeredBoard`](crate::LayeredBoard).
///
/// The master default is registered at construction and answers every
/// position lookup that no placement or custom default covers.
#[derive(Clone, Debug)]
pub struct LayeredConfig<K, T> {
    /// Name and limits of the board.
    pub board: BoardConfig,
    /// Id of the master default element.
    pub default_id: K,
    /// The master default element.
    pub default_element: T,
}

impl<K, T> LayeredConfig<K, T> {
    /// Bundle a board configuration with its master default.
    pub fn new(board: BoardConfig, default_id: K, default_element: impl Into<T>) -> Self {
        Self {
            board,
            default_id,
            default_element: default_element.into(),
        }
    }
}

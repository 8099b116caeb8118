//! Error taxonomy for board operations.
//!
//! Every failed board operation reports exactly one [`ErrorKind`], wrapped
//! in a [`BoardError`] that also names the board it came from. Kinds fall
//! into two branches: id errors carry the offending key, position errors
//! carry the offending position. Callers branch on [`ErrorTag`], never on
//! message text.

use std::error::Error;
use std::fmt;

use crate::position::Position;

/// Fieldless discriminant of an [`ErrorKind`].
///
/// Fully enumerable through [`ErrorTag::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorTag {
    /// The id does not match any element in the pool.
    IdNonExistent,
    /// The id is already assigned to another element.
    IdInUse,
    /// The element is placed at more than one position.
    IdMultiSet,
    /// The element is already placed and may not take another position.
    IdMonoSet,
    /// The element is already placed on the board.
    ///
    /// Reserved: none of the board operations currently report it.
    IdOnBoard,
    /// The element exists but is not placed anywhere.
    IdNotOnBoard,
    /// The position lies outside the board's limits.
    PositionOutLimits,
    /// No element is placed at the position.
    PositionEmpty,
    /// Another element is already placed at the position.
    PositionOccupied,
}

impl ErrorTag {
    /// Every tag, id branch first.
    pub const ALL: [ErrorTag; 9] = [
        ErrorTag::IdNonExistent,
        ErrorTag::IdInUse,
        ErrorTag::IdMultiSet,
        ErrorTag::IdMonoSet,
        ErrorTag::IdOnBoard,
        ErrorTag::IdNotOnBoard,
        ErrorTag::PositionOutLimits,
        ErrorTag::PositionEmpty,
        ErrorTag::PositionOccupied,
    ];

    /// Whether this tag belongs to the id branch.
    pub fn is_id_error(self) -> bool {
        matches!(
            self,
            Self::IdNonExistent
                | Self::IdInUse
                | Self::IdMultiSet
                | Self::IdMonoSet
                | Self::IdOnBoard
                | Self::IdNotOnBoard
        )
    }

    /// Whether this tag belongs to the position branch.
    pub fn is_position_error(self) -> bool {
        !self.is_id_error()
    }

    /// Human-readable description of the failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::IdNonExistent => "id doesn't match any element",
            Self::IdInUse => "id is already used by another element",
            Self::IdMultiSet => "element is set at several positions of the board",
            Self::IdMonoSet => "element is already set and can't take several positions",
            Self::IdOnBoard => "element is already set on the board",
            Self::IdNotOnBoard => "element exists but is not set on the board",
            Self::PositionOutLimits => "position is out of the limits of the board",
            Self::PositionEmpty => "position doesn't contain any element",
            Self::PositionOccupied => "position is already occupied by another element",
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What went wrong, with the offending key or position.
///
/// `K` is the caller's key type and `S` the site type the board indexes
/// (a plain [`Position`] for every public board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind<K, S = Position> {
    /// See [`ErrorTag::IdNonExistent`].
    IdNonExistent {
        /// The offending id.
        id: K,
    },
    /// See [`ErrorTag::IdInUse`].
    IdInUse {
        /// The offending id.
        id: K,
    },
    /// See [`ErrorTag::IdMultiSet`].
    IdMultiSet {
        /// The offending id.
        id: K,
    },
    /// See [`ErrorTag::IdMonoSet`].
    IdMonoSet {
        /// The offending id.
        id: K,
    },
    /// See [`ErrorTag::IdOnBoard`].
    IdOnBoard {
        /// The offending id.
        id: K,
    },
    /// See [`ErrorTag::IdNotOnBoard`].
    IdNotOnBoard {
        /// The offending id.
        id: K,
    },
    /// See [`ErrorTag::PositionOutLimits`].
    PositionOutLimits {
        /// The offending position.
        position: S,
    },
    /// See [`ErrorTag::PositionEmpty`].
    PositionEmpty {
        /// The offending position.
        position: S,
    },
    /// See [`ErrorTag::PositionOccupied`].
    PositionOccupied {
        /// The offending position.
        position: S,
    },
}

impl<K, S> ErrorKind<K, S> {
    /// The discriminant of this kind.
    pub fn tag(&self) -> ErrorTag {
        match self {
            Self::IdNonExistent { .. } => ErrorTag::IdNonExistent,
            Self::IdInUse { .. } => ErrorTag::IdInUse,
            Self::IdMultiSet { .. } => ErrorTag::IdMultiSet,
            Self::IdMonoSet { .. } => ErrorTag::IdMonoSet,
            Self::IdOnBoard { .. } => ErrorTag::IdOnBoard,
            Self::IdNotOnBoard { .. } => ErrorTag::IdNotOnBoard,
            Self::PositionOutLimits { .. } => ErrorTag::PositionOutLimits,
            Self::PositionEmpty { .. } => ErrorTag::PositionEmpty,
            Self::PositionOccupied { .. } => ErrorTag::PositionOccupied,
        }
    }

    /// The offending id, for id-branch kinds.
    pub fn id(&self) -> Option<&K> {
        match self {
            Self::IdNonExistent { id }
            | Self::IdInUse { id }
            | Self::IdMultiSet { id }
            | Self::IdMonoSet { id }
            | Self::IdOnBoard { id }
            | Self::IdNotOnBoard { id } => Some(id),
            _ => None,
        }
    }

    /// The offending position, for position-branch kinds.
    pub fn position(&self) -> Option<&S> {
        match self {
            Self::PositionOutLimits { position }
            | Self::PositionEmpty { position }
            | Self::PositionOccupied { position } => Some(position),
            _ => None,
        }
    }

    /// Translate the embedded id or position, keeping the tag.
    pub fn map<K2, S2>(
        self,
        map_id: impl FnOnce(K) -> K2,
        map_position: impl FnOnce(S) -> S2,
    ) -> ErrorKind<K2, S2> {
        match self {
            Self::IdNonExistent { id } => ErrorKind::IdNonExistent { id: map_id(id) },
            Self::IdInUse { id } => ErrorKind::IdInUse { id: map_id(id) },
            Self::IdMultiSet { id } => ErrorKind::IdMultiSet { id: map_id(id) },
            Self::IdMonoSet { id } => ErrorKind::IdMonoSet { id: map_id(id) },
            Self::IdOnBoard { id } => ErrorKind::IdOnBoard { id: map_id(id) },
            Self::IdNotOnBoard { id } => ErrorKind::IdNotOnBoard { id: map_id(id) },
            Self::PositionOutLimits { position } => ErrorKind::PositionOutLimits {
                position: map_position(position),
            },
            Self::PositionEmpty { position } => ErrorKind::PositionEmpty {
                position: map_position(position),
            },
            Self::PositionOccupied { position } => ErrorKind::PositionOccupied {
                position: map_position(position),
            },
        }
    }
}

impl<K: fmt::Debug, S: fmt::Debug> fmt::Display for ErrorKind<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.tag().message();
        match (self.id(), self.position()) {
            (Some(id), _) => write!(f, "{message} (id {id:?})"),
            (_, Some(position)) => write!(f, "{message} (position {position:?})"),
            (None, None) => f.write_str(message),
        }
    }
}

/// A failed board operation.
///
/// Carries the display name of the board that rejected the call together
/// with the [`ErrorKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardError<K, S = Position> {
    board: String,
    kind: ErrorKind<K, S>,
}

impl<K, S> BoardError<K, S> {
    /// Create an error raised by the board named `board`.
    pub fn new(board: impl Into<String>, kind: ErrorKind<K, S>) -> Self {
        Self {
            board: board.into(),
            kind,
        }
    }

    /// Display name of the board that raised the error.
    pub fn board(&self) -> &str {
        &self.board
    }

    /// The failure kind.
    pub fn kind(&self) -> &ErrorKind<K, S> {
        &self.kind
    }

    /// Consume the error, keeping only its kind.
    pub fn into_kind(self) -> ErrorKind<K, S> {
        self.kind
    }

    /// Shorthand for `self.kind().tag()`.
    pub fn tag(&self) -> ErrorTag {
        self.kind.tag()
    }

    /// The offending id, for id-branch errors.
    pub fn id(&self) -> Option<&K> {
        self.kind.id()
    }

    /// The offending position, for position-branch errors.
    pub fn position(&self) -> Option<&S> {
        self.kind.position()
    }

    /// Translate the embedded id or position, keeping board name and tag.
    pub fn map<K2, S2>(
        self,
        map_id: impl FnOnce(K) -> K2,
        map_position: impl FnOnce(S) -> S2,
    ) -> BoardError<K2, S2> {
        BoardError {
            board: self.board,
            kind: self.kind.map(map_id, map_position),
        }
    }
}

impl<K: fmt::Debug, S: fmt::Debug> fmt::Display for BoardError<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board '{}': {}", self.board, self.kind)
    }
}

impl<K: fmt::Debug, S: fmt::Debug> Error for BoardError<K, S> {}

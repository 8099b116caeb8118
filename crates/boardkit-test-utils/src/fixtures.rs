//! Element fixtures.
//!
//! - [`Piece`]: a board-game piece record (id, name, type, team).
//! - [`Marker`]: a bare label, e.g. terrain.
//! - [`Token`]: closed union of the two; both convert into it.

use boardkit_core::Position;
use boardkit_space::Limits;

/// A board-game piece. Pure data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: u32,
    pub name: String,
    pub kind: u32,
    pub team: u32,
}

impl Piece {
    pub fn new(id: u32, name: impl Into<String>, kind: u32, team: u32) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            team,
        }
    }
}

/// A named marker with no further data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker(pub String);

impl Marker {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

/// Either a [`Piece`] or a [`Marker`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Piece(Piece),
    Marker(Marker),
}

impl Token {
    /// Name of the piece or label of the marker.
    pub fn label(&self) -> &str {
        match self {
            Self::Piece(p) => &p.name,
            Self::Marker(m) => &m.0,
        }
    }
}

impl From<Piece> for Token {
    fn from(p: Piece) -> Self {
        Self::Piece(p)
    }
}

impl From<Marker> for Token {
    fn from(m: Marker) -> Self {
        Self::Marker(m)
    }
}

/// Limits from a bound slice.
///
/// # Panics
///
/// Panics on an empty slice.
pub fn limits(bounds: &[u32]) -> Limits {
    Limits::new(Position::from_slice(bounds)).expect("limits need at least one dimension")
}

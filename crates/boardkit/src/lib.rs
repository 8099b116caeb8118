//! boardkit: dual-indexed N-dimensional boards for board-game state.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all boardkit sub-crates. For most users, adding `boardkit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use boardkit::prelude::*;
//!
//! let limits = Limits::new(pos![8, 8]).unwrap();
//! let mut board: Board<u32, String> = Board::new(BoardConfig::new(limits).with_name("chess"));
//!
//! board.add(1, "White rook").unwrap();
//! board.add(2, "Black pawn").unwrap();
//! board.set(&1, pos![1, 1]).unwrap();
//! board.set(&2, pos![1, 7]).unwrap();
//!
//! // Capture: the pawn leaves the board but stays in the pool.
//! board.move_id(&1, pos![1, 7], Displace::Evict).unwrap();
//! assert_eq!(board.get_at(&pos![1, 7]).unwrap().id, 1);
//! assert!(!board.get(&2).unwrap().is_placed());
//!
//! match board.set(&1, pos![9, 9]) {
//!     Err(err) if err.tag() == ErrorTag::IdMonoSet => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `boardkit-core` | `Position`, error taxonomy |
//! | [`space`] | `boardkit-space` | `Limits`, `Site`, inside-space predicate |
//! | [`arena`] | `boardkit-arena` | Element pool and entry handles |
//! | [`board`] | `boardkit-board` | `Board`, `LayeredBoard`, position index |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the error taxonomy (`boardkit-core`).
pub use boardkit_core as types;

/// Board geometry (`boardkit-space`).
pub use boardkit_space as space;

/// Element pool storage (`boardkit-arena`).
///
/// Boards manage their pool internally; this is only needed to build a
/// custom container on the same storage.
pub use boardkit_arena as arena;

/// Boards and layered boards (`boardkit-board`).
pub use boardkit_board as board;

pub use boardkit_core::pos;

/// Common imports for typical boardkit usage.
///
/// ```rust
/// use boardkit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use boardkit_core::{pos, BoardError, ErrorKind, ErrorTag, Position};

    // Space
    pub use boardkit_space::{Limits, Site, SpaceError};

    // Boards
    pub use boardkit_board::{
        Board, BoardConfig, Displace, ElementView, Layer, LayeredBoard, LayeredConfig, Resolved,
    };
}

//! Dual-indexed N-dimensional boards.
//!
//! A [`Board`] stores uniquely identified elements and places them on a
//! bounded lattice. Elements are looked up either by id or by position;
//! an element may sit on zero, one, or several positions, and a position
//! holds at most one element.
//!
//! ```text
//! Board
//! ├── Limits                      (boardkit-space)
//! ├── ElementPool: id → entry     (boardkit-arena)
//! │   └── PoolEntry { element, positions }
//! └── PositionIndex: position → EntryHandle
//! ```
//!
//! [`LayeredBoard`] builds on the same engine to answer position lookups
//! with a fallback chain: placed element, then custom default, then the
//! master default.
//!
//! Boards only enforce geometry and identity. Game rules (legal moves,
//! turn order) belong to the caller. Boards do no locking; wrap one in a
//! mutex if it must be shared between threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod index;
pub mod layered;
pub mod view;

pub use board::{Board, Displace};
pub use config::{BoardConfig, LayeredConfig};
pub use index::PositionIndex;
pub use layered::{Layer, LayerKey, LayerSite, LayeredBoard, Resolved};
pub use view::ElementView;

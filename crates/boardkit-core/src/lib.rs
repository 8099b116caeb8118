//! Core types for the boardkit workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Position`] coordinate type and the error taxonomy shared by every
//! board flavour.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod position;

pub use error::{BoardError, ErrorKind, ErrorTag};
pub use position::Position;

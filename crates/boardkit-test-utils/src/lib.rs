//! Test utilities for boardkit development.
//!
//! Provides plain element fixtures ([`Piece`], [`Marker`]), a closed
//! payload enum ([`Token`]) for exercising insertion of several element
//! types into one board, and shorthand for building limits.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{limits, Marker, Piece, Token};

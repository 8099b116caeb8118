//! Lattice geometry for boardkit boards.
//!
//! A board's geometry is a per-dimension bound tuple, [`Limits`], where a
//! bound of `0` leaves the dimension unbounded. [`inside_space`] is the
//! single predicate deciding whether a point is a concrete cell of such a
//! space, and [`Site`] is the trait through which boards check whatever
//! they index against their limits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod limits;
pub mod site;

pub use error::SpaceError;
pub use limits::{inside_space, Limits};
pub use site::Site;

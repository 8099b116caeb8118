//! Identity-indexed element storage for boardkit boards.
//!
//! ```text
//! ElementPool
//! ├── ids: IndexMap<Key, EntryHandle>   (identity index)
//! └── entries: Vec<PoolEntry>           (arena, addressed by EntryHandle)
//!     └── PoolEntry { key, element: Arc<T>, sites: Vec<S> }
//! ```
//!
//! Entries are never removed, so an [`EntryHandle`] stays valid for the
//! lifetime of the pool that issued it. Position indexes hold handles,
//! never references, into the pool.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;
pub mod pool;

pub use handle::EntryHandle;
pub use pool::{ElementPool, PoolEntry};

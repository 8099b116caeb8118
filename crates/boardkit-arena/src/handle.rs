//! Stable handles into an [`ElementPool`](crate::ElementPool).

use std::fmt;

/// Address of a pool entry.
///
/// Issued by [`ElementPool::insert`](crate::ElementPool::insert) and valid
/// for as long as the issuing pool lives. Handles from one pool mean
/// nothing to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct EntryHandle(usize);

impl EntryHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Slot index of the entry inside the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryHandle({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_order_by_index() {
        assert!(EntryHandle::new(1) < EntryHandle::new(2));
        assert_eq!(EntryHandle::new(5).index(), 5);
        assert_eq!(EntryHandle::new(5).to_string(), "EntryHandle(5)");
    }
}

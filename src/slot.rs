//! Slot storage unit for the arena.
//!
//! A [`Slot`] is one fixed-position cell in the arena's flat array. It holds
//! at most one key/value pair plus a single index link. The link does double
//! duty: for an occupied slot it points at the next slot in the same bucket
//! chain, for a free slot it points at the next slot in the free list. Slots
//! never move between indices; only their contents and links change.

/// An index link to another slot, or `None` for the end of a chain.
///
/// Links are plain indices into the arena, never references, so the arena can
/// be moved and borrowed without invalidating chain structure.
pub type Link = Option<usize>;

/// One storage cell: an optional owned entry plus a chain/free-list link.
#[derive(Debug)]
pub struct Slot<V> {
    entry: Option<(String, V)>,
    next: Link,
}

impl<V> Slot<V> {
    /// Create a free slot whose link continues the free list.
    pub(crate) fn free(next: Link) -> Self {
        Self { entry: None, next }
    }

    /// Returns `true` if the slot currently holds an entry.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.entry.is_some()
    }

    /// The stored key, if the slot is occupied.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.entry.as_ref().map(|(k, _)| k.as_str())
    }

    /// The stored value, if the slot is occupied.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, v)| v)
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        self.entry.as_mut().map(|(_, v)| v)
    }

    /// The slot's outgoing link (chain link when occupied, free-list link
    /// when free).
    #[inline]
    pub fn next(&self) -> Link {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Link) {
        self.next = next;
    }

    /// Populate a free slot. The caller has already detached it from the
    /// free list, so the link is reset to end-of-chain.
    pub(crate) fn fill(&mut self, key: String, value: V) {
        debug_assert!(self.entry.is_none(), "slot already occupied");
        self.entry = Some((key, value));
        self.next = None;
    }

    /// Swap in a new value, returning the displaced one.
    ///
    /// # Panics
    /// Debug panics if the slot is free.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        let (_, v) = self.entry.as_mut().expect("replace_value on free slot");
        std::mem::replace(v, value)
    }

    /// Empty the slot and point its link at the given free-list head,
    /// returning the owned entry.
    ///
    /// # Panics
    /// Debug panics if the slot is free.
    pub(crate) fn vacate(&mut self, free_head: Link) -> (String, V) {
        debug_assert!(self.entry.is_some(), "slot not occupied");
        self.next = free_head;
        self.entry.take().expect("vacate on free slot")
    }
}

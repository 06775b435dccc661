//! Fixed-size slot arena with an intrusive free list.
//!
//! All slots are allocated up front and threaded into one singly linked free
//! list by index (slot 0 -> slot 1 -> ... -> none). Allocation pops the head,
//! release pushes onto the head, so the most recently freed slot is reused
//! first. Both are O(1) index manipulations; no allocation happens after
//! construction.
//!
//! Invariant: every slot index is reachable from exactly one place — the free
//! list or a caller-owned chain — and `occupied() + free_len()` always equals
//! `capacity()`.

use log::trace;

use crate::slot::{Link, Slot};

/// Pre-allocated slot storage shared by all bucket chains of one table.
#[derive(Debug)]
pub struct SlotArena<V> {
    slots: Vec<Slot<V>>,
    free_head: Link,
    occupied: usize,
}

impl<V> SlotArena<V> {
    /// Allocate `capacity` slots and thread them all into the free list in
    /// index order.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; the owning table clamps before calling.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "arena capacity must be positive");

        let mut slots = Vec::with_capacity(capacity);
        for i in 0..capacity {
            let next = if i + 1 < capacity { Some(i + 1) } else { None };
            slots.push(Slot::free(next));
        }

        Self {
            slots,
            free_head: Some(0),
            occupied: 0,
        }
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding an entry.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Index of the first free slot, or `None` when the arena is full.
    #[inline]
    pub fn free_head(&self) -> Link {
        self.free_head
    }

    /// Returns `true` if no free slot remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_head.is_none()
    }

    /// Length of the free list, by walking it.
    ///
    /// O(free slots); meant for diagnostics and invariant checks, not hot
    /// paths.
    pub fn free_len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.free_head;
        while let Some(index) = cursor {
            count += 1;
            cursor = self.slots[index].next();
        }
        count
    }

    /// Borrow the slot at `index`.
    #[inline]
    pub fn slot(&self, index: usize) -> &Slot<V> {
        &self.slots[index]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Slot<V> {
        &mut self.slots[index]
    }

    /// Iterate over all slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot<V>> {
        self.slots.iter()
    }

    /// Pop the free-list head and fill it with the entry, returning the
    /// slot's index. `None` when every slot is occupied; the arena is
    /// unchanged in that case.
    ///
    /// The returned slot is detached: its link is end-of-chain until the
    /// caller splices it into a bucket chain.
    pub(crate) fn allocate(&mut self, key: String, value: V) -> Option<usize> {
        let index = self.free_head?;

        self.free_head = self.slots[index].next();
        self.slots[index].fill(key, value);
        self.occupied += 1;

        trace!("allocated slot {index}, {} free", self.capacity() - self.occupied);
        Some(index)
    }

    /// Empty the slot at `index` and push it onto the free-list head,
    /// returning the owned entry. The caller must already have unlinked the
    /// slot from its bucket chain.
    ///
    /// # Panics
    /// Debug panics if the slot is free.
    pub(crate) fn release(&mut self, index: usize) -> (String, V) {
        let entry = self.slots[index].vacate(self.free_head);
        self.free_head = Some(index);
        self.occupied -= 1;

        trace!("released slot {index}, {} free", self.capacity() - self.occupied);
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_free_list_threading() {
        let arena: SlotArena<i32> = SlotArena::with_capacity(4);

        assert_eq!(arena.capacity(), 4);
        assert_eq!(arena.occupied(), 0);
        assert_eq!(arena.free_head(), Some(0));
        assert_eq!(arena.free_len(), 4);

        // index order: 0 -> 1 -> 2 -> 3 -> none
        assert_eq!(arena.slot(0).next(), Some(1));
        assert_eq!(arena.slot(1).next(), Some(2));
        assert_eq!(arena.slot(2).next(), Some(3));
        assert_eq!(arena.slot(3).next(), None);
    }

    #[test]
    fn test_allocate_in_index_order() {
        let mut arena: SlotArena<i32> = SlotArena::with_capacity(3);

        assert_eq!(arena.allocate("a".to_string(), 1), Some(0));
        assert_eq!(arena.allocate("b".to_string(), 2), Some(1));
        assert_eq!(arena.allocate("c".to_string(), 3), Some(2));
        assert!(arena.is_full());
        assert_eq!(arena.allocate("d".to_string(), 4), None);
        assert_eq!(arena.occupied(), 3);
    }

    #[test]
    fn test_release_is_lifo() {
        let mut arena: SlotArena<i32> = SlotArena::with_capacity(3);
        arena.allocate("a".to_string(), 1);
        arena.allocate("b".to_string(), 2);
        arena.allocate("c".to_string(), 3);

        let (key, value) = arena.release(1);
        assert_eq!((key.as_str(), value), ("b", 2));
        assert_eq!(arena.free_head(), Some(1));

        arena.release(0);
        assert_eq!(arena.free_head(), Some(0));
        // most recently freed first: 0 -> 1 -> none
        assert_eq!(arena.slot(0).next(), Some(1));
        assert_eq!(arena.slot(1).next(), None);

        // reuse follows the same order
        assert_eq!(arena.allocate("d".to_string(), 4), Some(0));
        assert_eq!(arena.allocate("e".to_string(), 5), Some(1));
    }

    #[test]
    fn test_conservation() {
        let mut arena: SlotArena<i32> = SlotArena::with_capacity(8);

        for i in 0..5 {
            arena.allocate(i.to_string(), i);
        }
        arena.release(2);
        arena.release(4);

        assert_eq!(arena.occupied() + arena.free_len(), arena.capacity());
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        let _: SlotArena<i32> = SlotArena::with_capacity(0);
    }
}

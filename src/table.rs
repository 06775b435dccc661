//! A fixed-capacity hash map with arena-backed collision chains.

use log::debug;

use crate::arena::SlotArena;
use crate::error::CapacityError;
use crate::hash::{BucketPolicy, FirstByteHash};
use crate::slot::Link;

/// Upper bound on the bucket directory length, sized for single-byte key
/// dispersion under the default policy.
pub const MAX_BUCKETS: usize = 20;

/// A hash map whose entire backing store is allocated once, up front.
///
/// `ArenaTable` owns a flat arena of `capacity` slots and a bucket directory
/// of `min(20, max(1, capacity / 2))` entries, both fixed for the table's
/// lifetime. Each bucket holds the index of its chain's head slot; chains are
/// threaded through the slots' own index links, and freed slots are recycled
/// through an intrusive LIFO free list.
///
/// Keys are owned `String`s; values are owned by the table until removed.
/// Every operation touches at most one bucket chain.
pub struct ArenaTable<V, H = FirstByteHash> {
    arena: SlotArena<V>,
    buckets: Vec<Link>,
    policy: H,
}

impl<V> ArenaTable<V, FirstByteHash> {
    /// Create a table with room for `capacity` entries, using the default
    /// first-byte bucket policy.
    ///
    /// A requested capacity of zero is clamped to one slot (and one bucket)
    /// rather than rejected, so construction cannot fail.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(capacity, FirstByteHash)
    }
}

impl<V, H> ArenaTable<V, H> {
    /// Create a table with a caller-supplied bucket policy.
    pub fn with_policy(capacity: usize, policy: H) -> Self {
        let capacity = capacity.max(1);
        let bucket_count = MAX_BUCKETS.min((capacity / 2).max(1));

        Self {
            arena: SlotArena::with_capacity(capacity),
            buckets: vec![None; bucket_count],
            policy,
        }
    }

    /// Number of entries currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.occupied()
    }

    /// Returns `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every slot is occupied; the next insert of a new
    /// key will fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.arena.is_full()
    }

    /// The fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// The fixed number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Occupancy ratio in `[0, 1]`.
    #[inline]
    pub fn load(&self) -> f64 {
        self.arena.occupied() as f64 / self.arena.capacity() as f64
    }

    /// Returns a reference to the bucket policy.
    #[inline]
    pub fn policy(&self) -> &H {
        &self.policy
    }

    /// Head slot index of bucket `bucket`, or `None` for an empty bucket.
    ///
    /// # Panics
    /// Panics if `bucket >= bucket_count()`.
    #[inline]
    pub fn bucket_head(&self, bucket: usize) -> Link {
        self.buckets[bucket]
    }

    #[inline]
    pub(crate) fn arena(&self) -> &SlotArena<V> {
        &self.arena
    }
}

impl<V, H> ArenaTable<V, H>
where
    H: BucketPolicy,
{
    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        self.policy.bucket_of(key, self.buckets.len())
    }

    /// Walk `key`'s bucket chain, returning the matching slot index and its
    /// predecessor in the chain.
    fn find_in_chain(&self, key: &str) -> Option<(Link, usize)> {
        let mut prev = None;
        let mut cursor = self.buckets[self.bucket_of(key)];

        while let Some(index) = cursor {
            let slot = self.arena.slot(index);
            if slot.key() == Some(key) {
                return Some((prev, index));
            }
            prev = Some(index);
            cursor = slot.next();
        }
        None
    }

    /// Insert a key/value pair, taking ownership of the value.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value returned as `Ok(Some(_))`; the chain structure is untouched
    /// and no free slot is consumed. A new key takes the head of the free
    /// list and is appended at the tail of its bucket chain, so chain order
    /// is insertion order.
    ///
    /// Fails with [`CapacityError`] only when the key is new and every slot
    /// is occupied; the table is left unchanged in that case.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>, CapacityError> {
        let key = key.into();
        let bucket = self.bucket_of(&key);

        // One pass finds either the matching slot or the chain tail.
        let mut tail = None;
        let mut cursor = self.buckets[bucket];
        while let Some(index) = cursor {
            let slot = self.arena.slot(index);
            if slot.key() == Some(key.as_str()) {
                let old = self.arena.slot_mut(index).replace_value(value);
                return Ok(Some(old));
            }
            tail = Some(index);
            cursor = slot.next();
        }

        let Some(index) = self.arena.allocate(key, value) else {
            debug!("insert rejected: all {} slots occupied", self.capacity());
            return Err(CapacityError::new(self.capacity()));
        };

        match tail {
            Some(tail) => self.arena.slot_mut(tail).set_next(Some(index)),
            None => self.buckets[bucket] = Some(index),
        }
        Ok(None)
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let (_, index) = self.find_in_chain(key)?;
        self.arena.slot(index).value()
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let (_, index) = self.find_in_chain(key)?;
        self.arena.slot_mut(index).value_mut()
    }

    /// Returns `true` if the table holds an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_in_chain(key).is_some()
    }

    /// Remove `key`, returning ownership of its value.
    ///
    /// The slot is unlinked from its bucket chain (fixing the bucket head or
    /// the predecessor's link) and pushed onto the free list for reuse.
    /// A missing key returns `None` and mutates nothing.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let bucket = self.bucket_of(key);
        let (prev, index) = self.find_in_chain(key)?;

        // Unlink before releasing; release repurposes the slot's link for
        // the free list.
        let after = self.arena.slot(index).next();
        match prev {
            Some(prev) => self.arena.slot_mut(prev).set_next(after),
            None => self.buckets[bucket] = after,
        }

        let (_, value) = self.arena.release(index);
        Some(value)
    }
}

impl<V, H: std::fmt::Debug> std::fmt::Debug for ArenaTable<V, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArenaTable")
            .field("capacity", &self.capacity())
            .field("bucket_count", &self.bucket_count())
            .field("len", &self.len())
            .field("policy", &self.policy)
            .finish()
    }
}

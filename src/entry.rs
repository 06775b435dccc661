//! Entry API for `ArenaTable`.
//!
//! Unlike a growable map, a vacant entry here may have nowhere to go: filling
//! it consumes a free slot, so the inserting methods return `Result` and
//! surface [`CapacityError`] when the arena is exhausted.

use crate::error::CapacityError;
use crate::hash::BucketPolicy;
use crate::table::ArenaTable;

impl<V, H> ArenaTable<V, H>
where
    H: BucketPolicy,
{
    /// Gets the entry for `key`, for in-place manipulation.
    pub fn entry(&mut self, key: impl Into<String>) -> Entry<'_, V, H> {
        let key = key.into();
        if self.contains_key(&key) {
            Entry::Occupied(OccupiedEntry { table: self, key })
        } else {
            Entry::Vacant(VacantEntry { table: self, key })
        }
    }
}

/// A view into a single entry in an `ArenaTable`, which may either be vacant
/// or occupied.
pub enum Entry<'a, V, H> {
    Occupied(OccupiedEntry<'a, V, H>),
    Vacant(VacantEntry<'a, V, H>),
}

/// A view into an occupied entry in an `ArenaTable`.
pub struct OccupiedEntry<'a, V, H> {
    table: &'a mut ArenaTable<V, H>,
    key: String,
}

/// A view into a vacant entry in an `ArenaTable`.
pub struct VacantEntry<'a, V, H> {
    table: &'a mut ArenaTable<V, H>,
    key: String,
}

impl<'a, V, H> Entry<'a, V, H>
where
    H: BucketPolicy,
{
    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &str {
        match self {
            Entry::Occupied(entry) => &entry.key,
            Entry::Vacant(entry) => &entry.key,
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty,
    /// and returns a mutable reference to the value in the entry.
    ///
    /// Fails only when the entry was vacant and no free slot remains.
    pub fn or_insert(self, default: V) -> Result<&'a mut V, CapacityError> {
        match self {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the
    /// default function if empty.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> Result<&'a mut V, CapacityError> {
        match self {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential insert.
    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        if let Entry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }
}

impl<'a, V, H> Entry<'a, V, H>
where
    V: Default,
    H: BucketPolicy,
{
    /// Ensures a value is in the entry by inserting the default value if
    /// empty.
    pub fn or_default(self) -> Result<&'a mut V, CapacityError> {
        self.or_insert_with(V::default)
    }
}

impl<'a, V, H> OccupiedEntry<'a, V, H>
where
    H: BucketPolicy,
{
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.table.get(&self.key).expect("OccupiedEntry: key not found")
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.table.get_mut(&self.key).expect("OccupiedEntry: key not found")
    }

    /// Converts the entry into a mutable reference to its value.
    pub fn into_mut(self) -> &'a mut V {
        self.table.get_mut(&self.key).expect("OccupiedEntry: key not found")
    }

    /// Sets the value of the entry, and returns the entry's old value.
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Takes the value out of the entry, freeing its slot.
    pub fn remove(self) -> V {
        self.table.remove(&self.key).expect("OccupiedEntry: key not found")
    }
}

impl<'a, V, H> VacantEntry<'a, V, H>
where
    H: BucketPolicy,
{
    /// Gets a reference to the key that would be used when inserting.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Takes ownership of the key.
    pub fn into_key(self) -> String {
        self.key
    }

    /// Sets the value of the entry, and returns a mutable reference to it.
    ///
    /// Fails with [`CapacityError`] when no free slot remains; the key is
    /// not inserted in that case.
    pub fn insert(self, value: V) -> Result<&'a mut V, CapacityError> {
        let key = self.key;
        self.table.insert(key.clone(), value)?;
        Ok(self
            .table
            .get_mut(&key)
            .expect("VacantEntry::insert: failed to find inserted entry"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_insert_vacant() {
        let mut table: ArenaTable<u32> = ArenaTable::with_capacity(8);

        let value = table.entry("counter").or_insert(0).unwrap();
        *value += 1;

        assert_eq!(table.get("counter"), Some(&1));
    }

    #[test]
    fn test_or_insert_occupied_keeps_value() {
        let mut table = ArenaTable::with_capacity(8);
        table.insert("k", 5).unwrap();

        let value = table.entry("k").or_insert(0).unwrap();
        assert_eq!(*value, 5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_and_modify() {
        let mut table = ArenaTable::with_capacity(8);

        table.entry("hits").and_modify(|v| *v += 1).or_insert(1).unwrap();
        table.entry("hits").and_modify(|v| *v += 1).or_insert(1).unwrap();

        assert_eq!(table.get("hits"), Some(&2));
    }

    #[test]
    fn test_or_default() {
        let mut table: ArenaTable<u32> = ArenaTable::with_capacity(8);

        table.entry("zero").or_default().unwrap();
        assert_eq!(table.get("zero"), Some(&0));
    }

    #[test]
    fn test_vacant_insert_fails_when_full() {
        let mut table = ArenaTable::with_capacity(1);
        table.insert("taken", 1).unwrap();

        match table.entry("new") {
            Entry::Vacant(entry) => {
                assert!(entry.insert(2).is_err());
            }
            Entry::Occupied(_) => panic!("entry should be vacant"),
        }
        assert_eq!(table.len(), 1);
        assert!(!table.contains_key("new"));
    }

    #[test]
    fn test_occupied_insert_and_remove() {
        let mut table = ArenaTable::with_capacity(8);
        table.insert("k", 1).unwrap();

        match table.entry("k") {
            Entry::Occupied(mut entry) => {
                assert_eq!(entry.key(), "k");
                assert_eq!(entry.insert(2), 1);
                assert_eq!(entry.remove(), 2);
            }
            Entry::Vacant(_) => panic!("entry should be occupied"),
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_vacant_into_key() {
        let mut table: ArenaTable<u32> = ArenaTable::with_capacity(4);

        match table.entry("unused") {
            Entry::Vacant(entry) => assert_eq!(entry.into_key(), "unused"),
            Entry::Occupied(_) => panic!("entry should be vacant"),
        }
    }
}

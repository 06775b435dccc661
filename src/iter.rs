//! Iterators over `ArenaTable` entries.
//!
//! Iteration visits buckets in index order and each bucket's chain from head
//! to tail, so entries that collided come out in their insertion order.

use crate::slot::Link;
use crate::table::ArenaTable;

impl<V, H> ArenaTable<V, H> {
    /// Iterate over all entries in bucket-then-chain order.
    pub fn iter(&self) -> Iter<'_, V, H> {
        Iter {
            table: self,
            bucket: 0,
            cursor: None,
        }
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> Keys<'_, V, H> {
        Keys { inner: self.iter() }
    }

    /// Iterate over all values.
    pub fn values(&self) -> Values<'_, V, H> {
        Values { inner: self.iter() }
    }
}

/// An iterator over the entries of an `ArenaTable`.
///
/// Walks the bucket directory, following each chain through the arena's
/// index links.
pub struct Iter<'a, V, H> {
    table: &'a ArenaTable<V, H>,
    bucket: usize,
    cursor: Link,
}

impl<'a, V, H> Iterator for Iter<'a, V, H> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(index) = self.cursor {
                let slot = self.table.arena().slot(index);
                self.cursor = slot.next();
                // occupied by construction: only occupied slots are chained
                return Some((slot.key()?, slot.value()?));
            }

            if self.bucket >= self.table.bucket_count() {
                return None;
            }
            self.cursor = self.table.bucket_head(self.bucket);
            self.bucket += 1;
        }
    }
}

/// An iterator over the keys of an `ArenaTable`.
pub struct Keys<'a, V, H> {
    inner: Iter<'a, V, H>,
}

impl<'a, V, H> Iterator for Keys<'a, V, H> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of an `ArenaTable`.
pub struct Values<'a, V, H> {
    inner: Iter<'a, V, H>,
}

impl<'a, V, H> Iterator for Values<'a, V, H> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

impl<'a, V, H> IntoIterator for &'a ArenaTable<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::table::ArenaTable;

    #[test]
    fn test_iter_empty() {
        let table: ArenaTable<u32> = ArenaTable::with_capacity(8);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_iter_visits_everything_once() {
        let mut table = ArenaTable::with_capacity(16);
        for i in 0..10u32 {
            table.insert(format!("k{i}"), i).unwrap();
        }

        let mut seen: Vec<(String, u32)> =
            table.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        assert_eq!(seen.len(), 10);

        seen.sort();
        for (i, (key, value)) in seen.iter().enumerate() {
            assert_eq!(key, &format!("k{i}"));
            assert_eq!(*value, i as u32);
        }
    }

    #[test]
    fn test_iter_chain_order_is_insertion_order() {
        let mut table = ArenaTable::with_capacity(32);
        // one bucket, three entries
        table.insert("apple", 1).unwrap();
        table.insert("apricot", 2).unwrap();
        table.insert("avocado", 3).unwrap();

        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["apple", "apricot", "avocado"]);
    }

    #[test]
    fn test_iter_skips_freed_slots() {
        let mut table = ArenaTable::with_capacity(8);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.insert("c", 3).unwrap();
        table.remove("b");

        let mut values: Vec<u32> = table.values().copied().collect();
        values.sort();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_into_iterator() {
        let mut table = ArenaTable::with_capacity(8);
        table.insert("a", 10).unwrap();

        let mut total = 0;
        for (_, v) in &table {
            total += v;
        }
        assert_eq!(total, 10);
    }
}

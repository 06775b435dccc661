//! A fixed-capacity hash map backed by a pre-allocated slot arena.
//!
//! `ArenaTable` allocates all of its storage once, at construction: a flat
//! array of slots and a small bucket directory. Collision chains are built by
//! linking slots together through integer indices, and freed slots are
//! recycled through an intrusive free list, so no per-entry allocation ever
//! happens after construction.
//!
//! The table never grows. When every slot is occupied, [`ArenaTable::insert`]
//! reports [`CapacityError`] and leaves the table untouched; the caller can
//! remove an entry and retry.
//!
//! ```
//! use arenatable::ArenaTable;
//!
//! let mut table: ArenaTable<u32> = ArenaTable::with_capacity(8);
//!
//! table.insert("answer", 42).unwrap();
//! assert_eq!(table.get("answer"), Some(&42));
//!
//! assert_eq!(table.remove("answer"), Some(42));
//! assert!(table.is_empty());
//! ```

pub mod arena;
pub mod dump;
pub mod entry;
pub mod error;
pub mod hash;
pub mod iter;
pub mod slot;
pub mod table;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::CapacityError;
pub use hash::{BucketPolicy, FirstByteHash};
pub use table::ArenaTable;

//! Diagnostic structural snapshot.
//!
//! `dump` serializes the whole table, occupied and free slots alike, so the
//! free-list threading and bucket chains can be inspected by eye. The report
//! is line-oriented with a fixed field order:
//!
//! ```text
//! HTS_CAPACITY: <bucket count>
//! HTS_SIZE: <slot count>
//! LOAD: <occupancy ratio>
//! Free Pointer -> HT[<index>] | NULL
//!
//! BUCKET[<i>] -> HT[<slot>] | NULL     (one line per bucket)
//!
//! HT[<i>]:                             (one block per slot)
//!     Key: <key, empty when free>
//!     Data: <value> | NO DATA
//!     Next: HT[<j>] | NULL
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use crate::table::ArenaTable;

impl<V: Display, H> ArenaTable<V, H> {
    /// Write the full structural snapshot to `sink`.
    ///
    /// Reads every slot but mutates nothing.
    pub fn dump<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "HTS_CAPACITY: {}", self.bucket_count())?;
        writeln!(sink, "HTS_SIZE: {}", self.capacity())?;
        writeln!(sink, "LOAD: {}", self.load())?;

        match self.arena().free_head() {
            Some(index) => writeln!(sink, "Free Pointer -> HT[{index}]")?,
            None => writeln!(sink, "Free Pointer -> NULL")?,
        }
        writeln!(sink)?;

        for bucket in 0..self.bucket_count() {
            match self.bucket_head(bucket) {
                Some(index) => writeln!(sink, "BUCKET[{bucket}] -> HT[{index}]")?,
                None => writeln!(sink, "BUCKET[{bucket}] -> NULL")?,
            }
        }
        writeln!(sink)?;

        for (index, slot) in self.arena().slots().enumerate() {
            writeln!(sink, "HT[{index}]:")?;
            writeln!(sink, "    Key: {}", slot.key().unwrap_or(""))?;
            match slot.value() {
                Some(value) => writeln!(sink, "    Data: {value}")?,
                None => writeln!(sink, "    Data: NO DATA")?,
            }
            match slot.next() {
                Some(next) => writeln!(sink, "    Next: HT[{next}]")?,
                None => writeln!(sink, "    Next: NULL")?,
            }
            writeln!(sink)?;
        }

        Ok(())
    }
}

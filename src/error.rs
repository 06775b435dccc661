//! Error types for the `arenatable` crate.

/// The table has no free slot left for a new key.
///
/// Non-fatal and fully recoverable: the failed insert leaves the table
/// unchanged, so the caller can remove an entry and retry. Lookups for
/// missing keys are reported as `None`, never through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("table is full ({capacity} slots occupied)")]
pub struct CapacityError {
    capacity: usize,
}

impl CapacityError {
    pub(crate) fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The fixed capacity of the table that rejected the insert.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CapacityError::new(4);
        assert_eq!(err.to_string(), "table is full (4 slots occupied)");
        assert_eq!(err.capacity(), 4);
    }
}

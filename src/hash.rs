//! Bucket selection policies.
//!
//! The table routes every key through a [`BucketPolicy`] exactly once per
//! operation. The policy is a narrow seam: swapping it changes how keys are
//! distributed across buckets without touching any of the chaining logic.

/// Maps a key to a bucket index in `[0, bucket_count)`.
///
/// Implementations must be pure: the same key and bucket count always yield
/// the same bucket.
pub trait BucketPolicy {
    fn bucket_of(&self, key: &str, bucket_count: usize) -> usize;
}

/// The default policy: the key's first byte modulo the bucket count.
///
/// This is a design parameter, not a quality guarantee. It is deliberately
/// cheap, and any two keys sharing a first byte collide into the same bucket
/// no matter how the rest of the key differs. Workloads with skewed key
/// prefixes should supply their own [`BucketPolicy`] via
/// [`ArenaTable::with_policy`](crate::ArenaTable::with_policy).
///
/// The empty key maps to bucket 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstByteHash;

impl BucketPolicy for FirstByteHash {
    #[inline]
    fn bucket_of(&self, key: &str, bucket_count: usize) -> usize {
        debug_assert!(bucket_count > 0);
        match key.as_bytes().first() {
            Some(&b) => b as usize % bucket_count,
            None => 0,
        }
    }
}

//! Hasher that forwards [`ThreeSpins::spin_index`](crate::ThreeSpins::spin_index).

use std::hash::{BuildHasherDefault, Hasher};

/// Hasher for keys that already write a collision-free `u64` index.
///
/// The packed index keeps its variation in the high fields, while the table
/// picks a home bucket from the low bits of the hash. `finish` runs the
/// SplitMix64 finalizer, a bijection on `u64` in which every output bit
/// depends on every input bit, so distinct indices stay distinct and spread
/// evenly over buckets.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinIndexHasher(u64);

impl Hasher for SpinIndexHasher {
    fn finish(&self) -> u64 {
        let mut h = self.0;
        h = (h ^ (h >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h = (h ^ (h >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        h ^ (h >> 31)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = (self.0 << 8) | u64::from(byte);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

/// `BuildHasher` for maps keyed by [`ThreeSpins`](crate::ThreeSpins).
pub type BuildSpinHasher = BuildHasherDefault<SpinIndexHasher>;

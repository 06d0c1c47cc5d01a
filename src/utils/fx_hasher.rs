//! A 32-bit Fx hash whose output does not depend on the pointer width.

use core::hash::Hasher;
use core::ops::BitXor;

const SEED: u32 = 0x9e37_79b9;

/// The FxHasher of rustc, restricted to a `u32` state.
///
/// Voxel keys hash to the same value on every platform, which keeps the iteration
/// order of [`HashMap`](crate::utils::hashmap::HashMap) identical for identical
/// insertion sequences.
#[derive(Copy, Clone, Debug, Default)]
pub struct FxHasher32 {
    hash: u32,
}

impl FxHasher32 {
    #[inline]
    fn add_to_hash(&mut self, i: u32) {
        self.hash = self.hash.rotate_left(5).bitxor(i).wrapping_mul(SEED);
    }
}

impl Hasher for FxHasher32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut words = bytes.chunks_exact(4);
        for word in &mut words {
            self.add_to_hash(u32::from_le_bytes([word[0], word[1], word[2], word[3]]));
        }

        let mut tail = words.remainder();
        if tail.len() >= 2 {
            self.add_to_hash(u16::from_le_bytes([tail[0], tail[1]]) as u32);
            tail = &tail[2..];
        }
        if let Some(byte) = tail.first() {
            self.add_to_hash(*byte as u32);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.add_to_hash(i as u32);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.add_to_hash(i as u32);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.add_to_hash(i);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.add_to_hash(i as u32);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.add_to_hash(i as u32);
        self.add_to_hash((i >> 32) as u32);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash as u64
    }
}

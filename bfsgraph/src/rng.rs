//! Deterministic 32-bit PRNG shared by the generator and its tests.
//!
//! Each draw replaces the state with Robert Jenkins' 32-bit integer hash of
//! the previous state. The stream is bit-identical to the reference
//! benchmark as long as every operation wraps at 32 bits.
use rand::{RngCore, SeedableRng};

/// Seed fixed by the reference benchmark.
pub const DEFAULT_SEED: u32 = 49_734_321;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JenkinsRng {
    state: u32,
}

impl JenkinsRng {
    pub fn new(seed: u32) -> Self { Self { state: seed } }

    pub fn state(&self) -> u32 { self.state }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut s = self.state;
        s = s.wrapping_add(0x7ed5_5d16).wrapping_add(s << 12);
        s = (s ^ 0xc761_c23c) ^ (s >> 19);
        s = s.wrapping_add(0x1656_67b1).wrapping_add(s << 5);
        s = s.wrapping_add(0xd3a2_646c) ^ (s << 9);
        s = s.wrapping_add(0xfd70_46c5).wrapping_add(s << 3);
        s = (s ^ 0xb55a_4f09) ^ (s >> 16);
        self.state = s;
        s
    }

    /// Same draw as [`next_u32`](Self::next_u32), read as a signed word.
    #[inline]
    pub fn next_i32(&mut self) -> i32 { self.next_u32() as i32 }

    /// Non-negative remainder in `[0, m)`: `|signed % m|`, truncating
    /// toward zero. Widened to 64 bits so `m = 2^31` and `i32::MIN` are exact.
    /// A modulus of 0 is treated as 1: the draw is consumed and 0 returned.
    #[inline]
    pub fn next_below(&mut self, m: u32) -> u32 {
        let x = i64::from(self.next_i32());
        (x % i64::from(m.max(1))).unsigned_abs() as u32
    }

    /// `|signed / 0x7fffffff|`, roughly uniform in `[0, 1]`.
    pub fn next_unit_f64(&mut self) -> f64 {
        (f64::from(self.next_i32()) / f64::from(i32::MAX)).abs()
    }
}

impl Default for JenkinsRng {
    fn default() -> Self { Self::new(DEFAULT_SEED) }
}

impl RngCore for JenkinsRng {
    fn next_u32(&mut self) -> u32 { JenkinsRng::next_u32(self) }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(JenkinsRng::next_u32(self));
        let hi = u64::from(JenkinsRng::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = JenkinsRng::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for JenkinsRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self { Self::new(u32::from_le_bytes(seed)) }
}

//! Deterministic generator threaded through every operator and the simulator.
//!
//! 256 bits of state, xoshiro-style integer output, plus a cheap float
//! stream that lives in the low half of the first state word. Not suitable
//! for anything security related.

use rand::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const SEED_MIX: [u64; 4] = [
    0xb6d4_7cfa_cccc_53f8,
    0x30b3_19a0_5262_4be7,
    0xfbeb_173c_6d02_27d8,
    0x99cf_e60a_00bd_d4fe,
];

const FLOAT_MULTIPLIER: i32 = 16807;
const UNIT_EXPONENT: u32 = 0x3f80_0000;

/// Copying a `CircuitRng` snapshots it: the copy replays the same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircuitRng {
    state: [u64; 4],
}

impl CircuitRng {
    #[must_use]
    pub fn from_state(state: [u64; 4]) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> [u64; 4] {
        self.state
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }

    /// Uniform float in `[0, 1)`.
    ///
    /// Advances only the low 32 bits of the first state word with a
    /// multiplicative step, then places the top mantissa bits under a fixed
    /// exponent to land in `[1, 2)`.
    #[inline]
    pub fn next_unit_f32(&mut self) -> f32 {
        let low = self.state[0] as u32;
        let next = (low as i32).wrapping_mul(FLOAT_MULTIPLIER) as u32;
        self.state[0] = (self.state[0] & !u64::from(u32::MAX)) | u64::from(next);
        f32::from_bits((next >> 9) | UNIT_EXPONENT) - 1.0
    }

    /// `next_u64() % bound`. Bound must be non-zero.
    #[inline]
    pub fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        self.next_u64() % bound
    }

    /// Uniform float in `[lo, hi)` drawn from the float stream.
    #[inline]
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit_f32() * (hi - lo)
    }
}

impl RngCore for CircuitRng {
    fn next_u32(&mut self) -> u32 {
        (CircuitRng::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        CircuitRng::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = CircuitRng::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for CircuitRng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u64; 4];
        for (word, bytes) in state.iter_mut().zip(seed.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bytes);
            *word = u64::from_le_bytes(buf);
        }
        // all-zero state never leaves zero
        if state == [0; 4] {
            return Self::seed_from_u64(0);
        }
        Self { state }
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self {
            state: SEED_MIX.map(|mix| mix ^ seed),
        }
    }
}

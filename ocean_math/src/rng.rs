//! Deterministic random source
//!
//! A 32-bit mulberry32 generator. Every step is done in wrapping `u32`
//! arithmetic so a given seed yields the same stream on every platform.
//! The generator implements [`RngCore`] and [`SeedableRng`] so it can be
//! handed to anything in the `rand` ecosystem as well.

use rand::{Error, RngCore, SeedableRng};

/// Increment added to the state on every draw
const GOLDEN_STEP: u32 = 0x6D2B_79F5;

/// Normalisation divisor mapping a `u32` onto `[0, 1)`
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seeded mulberry32 pseudo-random generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from an integer seed.
    ///
    /// Seeds wider than 32 bits are truncated to their low 32 bits.
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Next float in `[-1, 1)`, centred on zero
    pub fn next_signed(&mut self) -> f64 {
        (self.next_f64() - 0.5) * 2.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_STEP);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u32::from_le_bytes(seed),
        }
    }

    // The default expands the seed through PCG; a plain truncation keeps
    // `seed_from_u64(n)` identical to `Mulberry32::new(n)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

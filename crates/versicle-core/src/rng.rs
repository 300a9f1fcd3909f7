//! Deterministic random number generation.
//!
//! All random draws in the game (verse selection, word reveals) go through
//! [`SeededRng`] so that a session constructed from a known seed replays the
//! exact same sequence of verses and reveals. Production sessions seed from
//! OS entropy; tests pin the seed.

/// A deterministic random number generator using xorshift64*.
///
/// The same seed always produces the same sequence across all platforms.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        // Spread the seed bits so that nearby seeds diverge quickly.
        let mut state = seed ^ 0x9e3779b97f4a7c15;
        state = state.wrapping_mul(0xbf58476d1ce4e5b9);
        state ^= state >> 27;
        if state == 0 {
            state = 0x853c49e6748fea9b;
        }
        Self { state }
    }

    /// Create an RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Generate the next random u64.
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random number in range `[0, max)`. Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u64() >> 32) as u32 % max
    }

    /// Generate a random index in range `[0, len)`. Returns 0 when `len` is 0.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }
}

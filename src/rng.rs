//! Deterministic xorshift32 RNG for game randomness.
//!
//! Each game owns one `Rng32` in its state, seeded from the wall clock at
//! session start. Keeping the generator in plain state (rather than
//! pulling in an OS entropy source) makes every spawn, shuffle, and churn
//! reproducible from a seed, which is what the logic tests rely on.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng32 {
    state: u32,
}

impl Rng32 {
    /// Create a generator from a seed. A zero seed is remapped, since
    /// xorshift has a fixed point at zero.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9 } else { seed },
        }
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in `0..bound`. `bound` must be non-zero.
    pub fn gen_range(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }

    /// Value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_range(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

//! Injectable randomness for question selection.

/// Source of uniformly distributed integers.
///
/// The generator only ever needs bounded indices; implementors supply the
/// raw 64-bit stream.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform-enough index in `0..bound`. `bound` of 0 yields 0.
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }
}

/// Xorshift64 generator. Deterministic for a given seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftRng {
    state: u64,
}

impl XorShiftRng {
    pub fn new(seed: u64) -> Self {
        // Xorshift never leaves the all-zero state.
        let state = match seed.wrapping_add(1) {
            0 => 0x9E37_79B9_7F4A_7C15,
            s => s,
        };
        Self { state }
    }

    /// Seeded from the wall clock.
    pub fn from_entropy() -> Self {
        let now = chrono::Utc::now();
        let nanos = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp());
        Self::new(nanos as u64)
    }
}

impl RandomSource for XorShiftRng {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

/// Fisher–Yates shuffle in place.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`.
pub fn shuffled<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}

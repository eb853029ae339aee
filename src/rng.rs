/// Deterministic RNG based on splitmix64. Every placement decision draws from
/// one `Rng` owned by the generation call.

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Stable hash of a textual seed. FNV-1a over the UTF-8 bytes, finalized
/// through splitmix64 so short seeds still spread across all 64 bits.
pub fn seed_from_str(seed: &str) -> u64 {
    let mut h: u64 = 0xCBF29CE484222325;
    for b in seed.bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001B3);
    }
    splitmix64(h)
}

/// Seed for an independent sub-stream.
#[inline]
pub fn derive(seed: u64, salt: u64) -> u64 {
    splitmix64(seed ^ salt)
}

/// Sequential RNG for word placement.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(seed_from_str(seed))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = splitmix64(self.state);
        self.state
    }

    /// Uniform in [0, 1), 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / 9007199254740992.0
    }

    /// Uniform integer in [min, max], both inclusive.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "empty range {min}..={max}");
        let span = (max as i64 - min as i64 + 1) as f64;
        ((self.next_f64() * span).floor() as i64 + min as i64).min(max as i64) as i32
    }

    /// Uniform index into a slice of length `len` (must be non-zero).
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.range_i32(0, len as i32 - 1) as usize
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Deterministic RNG helpers.
///
/// Small and dependency-free so that a seed fully determines a replay. **Not** cryptographic.
pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)`.
    fn next_f32_unit(&mut self) -> f32 {
        // 24 bits of mantissa
        let x = self.next_u32() >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    /// Uniform in `[0, bound)`; returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        // Lemire's multiply-shift; bias is negligible for the small bounds used here.
        (((self.next_u32() as u64) * (bound as u64)) >> 32) as usize
    }
}

/// SplitMix64: good seeding RNG and small deterministic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

/// In-place Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T>(rng: &mut dyn DeterministicRng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Per-agent seed derived from a run seed, so agents spawned in any order get stable streams.
pub fn derive_seed(global_seed: u64, agent_id: u64) -> u64 {
    mix64(global_seed ^ mix64(agent_id.wrapping_add(0x9E3779B97F4A7C15)))
}

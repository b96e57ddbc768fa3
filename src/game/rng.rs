//! Pluggable randomness for question generation, dialogue choice and the bet.

/// A source of uniform draws. The session owns one as a trait object so tests
/// can script exact outcomes.
pub trait RandomSource {
    /// Uniform draw in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32;
}

/// Roll a percentage chance (`percent` out of 100).
pub fn chance(rng: &mut dyn RandomSource, percent: u32) -> bool {
    rng.below(100) < percent
}

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

/// 64-bit LCG; the high bits are used for draws.
pub struct Lcg {
    seed: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RandomSource for Lcg {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.seed = next_rng(self.seed);
        ((self.seed >> 33) % bound as u64) as u32
    }
}

/// Seed taken from the wall clock.
///
/// wasm32-unknown-unknown has no usable `SystemTime`, so the browser clock is
/// read through `js_sys` there.
pub fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
        now ^ (noise << 20)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    }
}

/// Replays a fixed list of raw values (each reduced modulo the bound), cycling.
#[cfg(test)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 || self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}

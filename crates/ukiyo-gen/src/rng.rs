//! Seeded scene PRNG (mulberry32).
//!
//! Every builder owns exactly one instance, seeded once at the start of the
//! build, and consumes draws in a fixed call order — that call order is what
//! makes a scene reproducible, so passes must never reorder their draws.
//! All intermediate arithmetic wraps modulo 2^32; the float is the raw u32
//! divided by 2^32, which is exact in f64.

/// Deterministic stream of f64 values in [0, 1).
///
/// Two instances built from the same seed produce identical sequences. The
/// stream is unbounded; restarting means constructing a new instance.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Draw the next value in [0, 1), advancing the internal counter.
    #[inline]
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^= t >> 14;
        t as f64 / 4_294_967_296.0
    }
}

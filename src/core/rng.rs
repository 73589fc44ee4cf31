//! Random sources owned by each subsystem.
//!
//! Every subsystem gets its own `StdRng`. With a seed the streams are
//! reproducible; without one they are seeded from the thread-local entropy source.

use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Stream ids keep subsystem generators independent under one seed.
pub const STREAM_PARTICLES: u64 = 1;
pub const STREAM_OBSTACLES: u64 = 2;
pub const STREAM_MATRIX: u64 = 3;

/// Build the generator for `stream`.
pub fn subsystem_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        None => StdRng::seed_from_u64(rng().random()),
    }
}

/// Uniform sample from `[lo, hi)`; collapses to the midpoint when the range is empty.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        (lo + hi) * 0.5
    }
}

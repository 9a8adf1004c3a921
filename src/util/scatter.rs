//! Deterministic pseudo-random placement for decorative elements.
//!
//! The original backdrop scattered orbs and particles with per-render
//! `Math.random()`; a seeded mix keeps the same organic look while staying
//! stable across renders (and testable).

#[cfg(test)]
#[path = "scatter_test.rs"]
mod scatter_test;

/// Mix a seed into a uniform value in `[0, 1)`. SplitMix64 finalizer.
pub fn scatter01(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

/// Mix a seed into `[lo, hi)`.
pub fn scatter_range(seed: u64, lo: f64, hi: f64) -> f64 {
    lo + scatter01(seed) * (hi - lo)
}

/// CSS percentage string for positioning, e.g. `"42.7%"`.
pub fn scatter_percent(seed: u64) -> String {
    format!("{:.1}%", scatter_range(seed, 0.0, 100.0))
}

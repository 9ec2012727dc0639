use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random patterns draw from one process-wide seed so that every array built
/// during a run, and every re-run with `OVERRIDE_SEED` set, is reproducible.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::thread_rng().gen())
});

pub fn random_init_seed() -> u64 {
    *SEED
}

/// `len` values drawn uniformly from `range`.
pub fn random_uniform(len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    // Mix the range into the seed so patterns with different bounds are not
    // rank-correlated copies of each other.
    let seed = random_init_seed() ^ (*range.end() as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// 0, 1, .., len-1.
pub fn ascending(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

/// len, len-1, .., 1.
pub fn descending(len: usize) -> Vec<i64> {
    (1..=len as i64).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i64> {
    vec![7; len]
}

/// The ascending values rearranged so that a partition scheme which always
/// pivots on the last element of a subrange keeps picking the subrange's
/// median, splitting every range in half.
pub fn median_pivots(len: usize) -> Vec<i64> {
    let mut v = ascending(len);
    if len > 1 {
        place_medians(&mut v, 0, len - 1);
    }
    v
}

// Moves the median of v[low..=high] to `high`, then lays out both halves the
// same way. The ranges halve each step, so the recursion stays shallow.
fn place_medians(v: &mut [i64], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    v.swap(mid, high);
    if mid > low + 1 {
        place_medians(v, low, mid - 1);
    }
    if mid + 2 < high {
        place_medians(v, mid + 1, high - 1);
    }
}

// scalargrad-data/src/datasets/synthetic.rs

use super::pair_dataset::PairDataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::ops::Range;

/// Generates `count` pairs `(x, m*x + b + noise)` with `x` drawn uniformly
/// from `x_range` and Gaussian noise of standard deviation `noise_std`.
///
/// The generator is seeded, so a fixed seed reproduces the exact dataset.
/// `noise_std` of 0.0 yields noise-free targets.
///
/// # Panics
/// Panics if `noise_std` is negative or NaN, or if `x_range` is empty.
pub fn linear_pairs(
    m: f64,
    b: f64,
    noise_std: f64,
    x_range: Range<f64>,
    count: usize,
    seed: u64,
) -> PairDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, noise_std).expect("noise_std must be non-negative and finite");
    let pairs = (0..count)
        .map(|_| {
            let x = rng.gen_range(x_range.clone());
            let target = m * x + b + noise.sample(&mut rng);
            (x, target)
        })
        .collect();
    PairDataset::new(pairs)
}

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod tests;

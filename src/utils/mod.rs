//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs_csr, to_sprs_csr};

use rand::Rng;

/// Computes an exclusive prefix sum (scan) for a vector
///
/// The result has one more element than the input; the CSR row-pointer
/// array is exactly the exclusive scan of the per-row counts.
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

/// Fills a dense input vector with small pseudo-random values.
///
/// The generator is passed in rather than seeded from process state, so a
/// fixed seed reproduces the same vector on every run. Values are drawn
/// from {1, 2, 3, 4, 5}.
pub fn random_vector<R: Rng>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(1..=5) as f64).collect()
}

//! Utility functions for random number generation and input checks.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Error, Result};

/// Fast RNG suitable for no_std environments.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use signed_tsetlin::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Generates a random f32 in [0, 1).
#[inline]
pub fn random_f32<R: Rng>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}

/// # Overview
///
/// Performs a Bernoulli trial with given probability.
#[inline]
pub fn bernoulli<R: Rng>(rng: &mut R, probability: f32) -> bool {
    random_f32(rng) < probability
}

/// # Overview
///
/// Shuffles a slice in-place using Fisher-Yates algorithm.
#[inline]
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let len = slice.len();
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        slice.swap(i, j);
    }
}

/// # Overview
///
/// Draws a class other than `target`, uniformly over the remaining
/// `n_classes - 1`.
///
/// # Panics
///
/// Panics if `n_classes < 2`.
#[inline]
pub fn negative_class<R: Rng>(target: usize, n_classes: usize, rng: &mut R) -> usize {
    (target + rng.random_range(1..n_classes)) % n_classes
}

/// # Overview
///
/// Checks that `x` has exactly `n_features` entries, each 0 or 1.
pub fn check_input(x: &[u8], n_features: usize) -> Result<()> {
    if x.len() != n_features {
        return Err(Error::DimensionMismatch {
            expected: n_features,
            got:      x.len()
        });
    }
    match x.iter().position(|&v| v > 1) {
        Some(index) => Err(Error::NonBinaryInput {
            index,
            value: x[index]
        }),
        None => Ok(())
    }
}

/// # Overview
///
/// Checks a labelled dataset is non-empty and has one label per sample.
pub fn check_dataset<X, Y>(x: &[X], y: &[Y]) -> Result<()> {
    if x.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if x.len() != y.len() {
        return Err(Error::LabelCountMismatch {
            samples: x.len(),
            labels:  y.len()
        });
    }
    Ok(())
}

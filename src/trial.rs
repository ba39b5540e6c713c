//! Repeated independent trials and their accuracy summary.
//!
//! Every trial owns its machine and its generator. Results are collected per
//! trial and folded only after all trials have finished.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::utils::{FastRng, rng_from_seed};

/// # Overview
///
/// Per-trial accuracies in trial order, plus their mean and range.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    pub accuracies: Vec<f32>,
    pub mean:       f32,
    pub min:        f32,
    pub max:        f32
}

impl TrialSummary {
    /// # Overview
    ///
    /// Folds collected accuracies. An empty list gives zeros.
    #[must_use]
    pub fn from_accuracies(accuracies: Vec<f32>) -> Self {
        if accuracies.is_empty() {
            return Self {
                accuracies,
                mean: 0.0,
                min: 0.0,
                max: 0.0
            };
        }

        let sum: f64 = accuracies.iter().map(|&a| a as f64).sum();
        let mean = (sum / accuracies.len() as f64) as f32;
        let min = accuracies.iter().copied().fold(f32::INFINITY, f32::min);
        let max = accuracies.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Self {
            accuracies,
            mean,
            min,
            max
        }
    }
}

/// Generator for trial `index`, seeded as `base_seed + index`.
#[inline]
pub fn trial_rng(base_seed: u64, index: usize) -> FastRng {
    rng_from_seed(base_seed.wrapping_add(index as u64))
}

/// # Overview
///
/// Runs `n_trials` trials one after another.
///
/// `trial` receives the trial index and a generator seeded from it, and
/// returns the trial's accuracy.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use signed_tsetlin::trial::run_trials;
///
/// let summary = run_trials(4, 0, |_, rng| rng.random::<f32>());
/// assert_eq!(summary.accuracies.len(), 4);
/// ```
pub fn run_trials<F>(n_trials: usize, base_seed: u64, trial: F) -> TrialSummary
where
    F: Fn(usize, &mut FastRng) -> f32
{
    let accuracies = (0..n_trials)
        .map(|i| {
            let mut rng = trial_rng(base_seed, i);
            let accuracy = trial(i, &mut rng);
            tracing::info!(trial = i, accuracy, "trial finished");
            accuracy
        })
        .collect();
    TrialSummary::from_accuracies(accuracies)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn summary_folds_after_collection() {
        let s = TrialSummary::from_accuracies(vec![0.5, 1.0, 0.75]);
        assert!((s.mean - 0.75).abs() < 1e-6);
        assert_eq!(s.min, 0.5);
        assert_eq!(s.max, 1.0);
    }

    #[test]
    fn empty_summary() {
        let s = TrialSummary::from_accuracies(Vec::new());
        assert_eq!(s.mean, 0.0);
        assert!(s.accuracies.is_empty());
    }

    #[test]
    fn trials_are_reproducible() {
        let a = run_trials(5, 100, |_, rng| rng.random::<f32>());
        let b = run_trials(5, 100, |_, rng| rng.random::<f32>());
        assert_eq!(a, b);
    }

    #[test]
    fn trials_get_distinct_streams() {
        let s = run_trials(3, 7, |_, rng| rng.random::<f32>());
        assert_ne!(s.accuracies[0], s.accuracies[1]);
        assert_ne!(s.accuracies[1], s.accuracies[2]);
    }

    #[test]
    fn trial_index_is_passed() {
        let s = run_trials(4, 0, |i, _| i as f32);
        assert_eq!(s.accuracies, vec![0.0, 1.0, 2.0, 3.0]);
    }
}

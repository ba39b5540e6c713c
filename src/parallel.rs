//! Parallel trials and evaluation using rayon.

use rayon::prelude::*;

use crate::{
    MultiClass,
    error::Result,
    trial::{TrialSummary, trial_rng},
    utils::FastRng
};

/// # Overview
///
/// Runs `n_trials` independent trials on rayon's pool.
///
/// Same seeding and result order as [`crate::trial::run_trials`], so both
/// produce the same summary for the same closure.
pub fn run_trials<F>(n_trials: usize, base_seed: u64, trial: F) -> TrialSummary
where
    F: Fn(usize, &mut FastRng) -> f32 + Sync + Send
{
    let accuracies: Vec<f32> = (0..n_trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = trial_rng(base_seed, i);
            let accuracy = trial(i, &mut rng);
            tracing::info!(trial = i, accuracy, "trial finished");
            accuracy
        })
        .collect();
    TrialSummary::from_accuracies(accuracies)
}

/// # Overview
///
/// Parallel prediction for multi-class.
pub fn predict_batch(tm: &MultiClass, x: &[Vec<u8>]) -> Result<Vec<usize>> {
    x.par_iter().map(|xi| tm.classify(xi)).collect()
}

/// # Overview
///
/// Parallel evaluation for multi-class.
pub fn evaluate(tm: &MultiClass, x: &[Vec<u8>], y: &[usize]) -> Result<f32> {
    crate::utils::check_dataset(x, y)?;
    let hits: Vec<bool> = x
        .par_iter()
        .zip(y.par_iter())
        .map(|(xi, yi)| tm.classify(xi).map(|p| p == *yi))
        .collect::<Result<_>>()?;
    let correct = hits.into_iter().filter(|&h| h).count();
    Ok(correct as f32 / x.len() as f32)
}

//! Binary Tsetlin Machine: alternating-polarity clauses voting on one target.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::{
    Clause, Config, Rule,
    error::{Error, Result},
    feedback::{type_i, type_ii},
    utils::{check_dataset, check_input, random_f32, shuffle}
};

/// # Overview
///
/// Binary Tsetlin Machine.
///
/// Even-indexed clauses vote `+1` when they fire, odd-indexed clauses vote
/// `-1`. `predict` returns the raw signed vote sum; turning it into a label is
/// left to the caller.
///
/// # Examples
///
/// ```
/// use signed_tsetlin::{Config, TsetlinMachine, utils::rng_from_seed};
///
/// let config = Config::builder().clauses(20).features(2).build().unwrap();
/// let mut rng = rng_from_seed(42);
///
/// let mut tm = TsetlinMachine::new(config, &mut rng).unwrap();
/// tm.learn(&[0, 1], 1, 10, &mut rng).unwrap();
/// let votes = tm.predict(&[0, 1]).unwrap();
/// assert!(votes.abs() <= 20);
/// ```
#[derive(Debug, Clone)]
pub struct TsetlinMachine {
    clauses: Vec<Clause>,
    config:  Config
}

impl TsetlinMachine {
    /// # Overview
    ///
    /// Creates new machine. Clause `i` gets polarity +1 for even `i`, -1 for
    /// odd `i`. The config is validated before any automaton is created.
    pub fn new<R: Rng>(config: Config, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let clauses = (0..config.n_clauses)
            .map(|i| {
                let p = if i % 2 == 0 { 1 } else { -1 };
                Clause::new(config.n_features, config.n_states, p, rng)
            })
            .collect();

        Ok(Self {
            clauses,
            config
        })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    #[cfg(test)]
    pub(crate) fn clauses_mut(&mut self) -> &mut [Clause] {
        &mut self.clauses
    }

    /// # Overview
    ///
    /// Sum of clause votes for `x` without caching clause outputs.
    pub fn sum_votes(&self, x: &[u8]) -> Result<i32> {
        check_input(x, self.config.n_features)?;
        Ok(self
            .clauses
            .iter()
            .filter(|c| c.evaluate(x))
            .map(|c| c.polarity() as i32)
            .sum())
    }

    /// # Overview
    ///
    /// Evaluates every clause in order, caches its output and returns the
    /// signed vote sum.
    pub fn predict(&mut self, x: &[u8]) -> Result<i32> {
        check_input(x, self.config.n_features)?;
        Ok(self.votes(x))
    }

    fn votes(&mut self, x: &[u8]) -> i32 {
        self.clauses
            .iter_mut()
            .map(|c| {
                c.update(x);
                c.vote()
            })
            .sum()
    }

    /// # Overview
    ///
    /// Trains on a single example with margin `t`.
    ///
    /// `target` must be 0 or 1.
    pub fn learn<R: Rng>(&mut self, x: &[u8], target: u8, t: i32, rng: &mut R) -> Result<()> {
        check_input(x, self.config.n_features)?;
        if target > 1 {
            return Err(Error::InvalidLabel {
                label:     target as usize,
                n_classes: 2
            });
        }
        if t <= 0 {
            return Err(Error::InvalidThreshold);
        }

        let votes = self.votes(x);
        self.feedback(x, target == 1, votes, t, rng);
        Ok(())
    }

    /// # Overview
    ///
    /// Feedback pass over clause outputs cached by the last prediction on `x`.
    ///
    /// With the vote clamped to `[-t, t]`, each clause is selected with
    /// probability `(t - sum) / 2t` for a positive target or `(t + sum) / 2t`
    /// for a negative one. Selected clauses whose polarity agrees with the
    /// target get Type I feedback, the others get Type II.
    pub(crate) fn feedback<R: Rng>(
        &mut self,
        x: &[u8],
        target: bool,
        votes: i32,
        t: i32,
        rng: &mut R
    ) {
        let sum = votes.clamp(-t, t) as f32;
        let t = t as f32;
        let inv_2t = 1.0 / (2.0 * t);
        let prob = if target {
            (t - sum) * inv_2t
        } else {
            (t + sum) * inv_2t
        };
        let config = &self.config;

        for clause in &mut self.clauses {
            if random_f32(rng) > prob {
                continue;
            }
            if (clause.polarity() == 1) == target {
                type_i(clause, x, config, rng);
            } else {
                type_ii(clause, x);
            }
        }
    }

    /// Trains for `config.epochs` epochs with margin `config.threshold`,
    /// shuffling sample order every epoch.
    ///
    /// # Arguments
    ///
    /// * `x` - Training inputs (binary features)
    /// * `y` - Binary labels (0 or 1)
    /// * `rng` - Random source for shuffling and feedback
    pub fn fit<R: Rng>(&mut self, x: &[Vec<u8>], y: &[u8], rng: &mut R) -> Result<()> {
        check_dataset(x, y)?;
        for (xi, &yi) in x.iter().zip(y) {
            check_input(xi, self.config.n_features)?;
            if yi > 1 {
                return Err(Error::InvalidLabel {
                    label:     yi as usize,
                    n_classes: 2
                });
            }
        }

        let t = self.config.threshold;
        let mut indices: Vec<usize> = (0..x.len()).collect();

        for epoch in 0..self.config.epochs {
            shuffle(&mut indices, rng);
            for &i in &indices {
                self.learn(&x[i], y[i], t, rng)?;
            }
            tracing::debug!(epoch = epoch + 1, "epoch finished");
        }
        Ok(())
    }

    /// Extracts learned rules from all clauses.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        self.clauses.iter().map(Rule::from_clause).collect()
    }
}

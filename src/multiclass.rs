//! Multi-class classification Tsetlin Machine.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::Rng;

use crate::{
    Config, Rule, TsetlinMachine,
    error::{Error, Result},
    training::{FitOptions, FitResult, Progress},
    utils::{check_dataset, check_input, negative_class, shuffle}
};

/// # Overview
///
/// Multi-class Tsetlin Machine: one binary machine per class, compared by
/// vote.
///
/// Each training step updates only the target class and one randomly drawn
/// other class, so its cost does not grow with the number of classes.
///
/// # Examples
///
/// ```
/// use signed_tsetlin::{Config, MultiClass, utils::rng_from_seed};
///
/// let config = Config::builder().clauses(30).features(4).build().unwrap();
/// let mut rng = rng_from_seed(42);
///
/// let mut tm = MultiClass::new(config, 3, &mut rng).unwrap();
/// assert!(tm.predict(&[1, 0, 1, 0]).unwrap() < 3);
/// ```
#[derive(Debug, Clone)]
pub struct MultiClass {
    machines: Vec<TsetlinMachine>,
    votes:    Vec<i32>,
    config:   Config
}

impl MultiClass {
    /// # Overview
    ///
    /// Creates multi-class machine with `n_classes` machines of
    /// `config.n_clauses / n_classes` clauses each. Leftover clauses are
    /// dropped.
    pub fn new<R: Rng>(config: Config, n_classes: usize, rng: &mut R) -> Result<Self> {
        config.validate()?;
        if n_classes < 2 {
            return Err(Error::TooFewClasses(n_classes));
        }
        let per_class = config.n_clauses / n_classes;
        if per_class == 0 {
            return Err(Error::TooFewClauses {
                clauses: config.n_clauses,
                classes: n_classes
            });
        }

        let class_config = config.with_clauses(per_class);
        let machines = (0..n_classes)
            .map(|_| TsetlinMachine::new(class_config, rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            machines,
            votes: vec![0; n_classes],
            config
        })
    }

    #[inline]
    pub fn n_classes(&self) -> usize {
        self.machines.len()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// # Overview
    ///
    /// Binary machine voting for `class`.
    pub fn machine(&self, class: usize) -> Option<&TsetlinMachine> {
        self.machines.get(class)
    }

    /// # Overview
    ///
    /// Vote sums per class, without caching clause outputs.
    pub fn class_votes(&self, x: &[u8]) -> Result<Vec<i32>> {
        check_input(x, self.config.n_features)?;
        self.machines.iter().map(|m| m.sum_votes(x)).collect()
    }

    /// # Overview
    ///
    /// Runs every class machine's `predict` and returns the vote per class.
    pub fn predict_by_class(&mut self, x: &[u8]) -> Result<&[i32]> {
        check_input(x, self.config.n_features)?;
        for (vote, machine) in self.votes.iter_mut().zip(&mut self.machines) {
            *vote = machine.predict(x)?;
        }
        Ok(&self.votes)
    }

    /// # Overview
    ///
    /// Predicts class with highest vote. Ties go to the lowest index.
    pub fn predict(&mut self, x: &[u8]) -> Result<usize> {
        Ok(argmax(self.predict_by_class(x)?))
    }

    /// # Overview
    ///
    /// Read-only prediction, for sharing the machine across threads.
    pub fn classify(&self, x: &[u8]) -> Result<usize> {
        Ok(argmax(&self.class_votes(x)?))
    }

    /// # Overview
    ///
    /// Trains on single example with margin `t`.
    ///
    /// The target machine gets positive-target feedback. One other class,
    /// drawn uniformly from the remaining `C - 1`, gets negative-target
    /// feedback. Every other class is left untouched.
    pub fn learn<R: Rng>(&mut self, x: &[u8], target: usize, t: i32, rng: &mut R) -> Result<()> {
        let n_classes = self.n_classes();
        if target >= n_classes {
            return Err(Error::InvalidLabel {
                label: target,
                n_classes
            });
        }
        if t <= 0 {
            return Err(Error::InvalidThreshold);
        }
        self.predict_by_class(x)?;

        let negative = negative_class(target, n_classes, rng);
        let (target_votes, negative_votes) = (self.votes[target], self.votes[negative]);

        self.machines[target].feedback(x, true, target_votes, t, rng);
        self.machines[negative].feedback(x, false, negative_votes, t, rng);
        Ok(())
    }

    /// # Overview
    ///
    /// Trains for `config.epochs` epochs with margin `config.threshold`.
    pub fn fit<R: Rng>(&mut self, x: &[Vec<u8>], y: &[usize], rng: &mut R) -> Result<FitResult> {
        self.fit_with_options(x, y, FitOptions::new(self.config.epochs), rng)
    }

    /// Training with full options including early stopping and callbacks.
    ///
    /// # Arguments
    ///
    /// * `x` - Training inputs (binary features)
    /// * `y` - Class labels in `0..n_classes`
    /// * `opts` - Training options (epochs, early stopping, callback)
    /// * `rng` - Random source for shuffling and feedback
    ///
    /// # Returns
    ///
    /// [`FitResult`] with training statistics.
    pub fn fit_with_options<R: Rng>(
        &mut self,
        x: &[Vec<u8>],
        y: &[usize],
        mut opts: FitOptions,
        rng: &mut R
    ) -> Result<FitResult> {
        check_dataset(x, y)?;
        for (xi, &yi) in x.iter().zip(y) {
            check_input(xi, self.config.n_features)?;
            if yi >= self.n_classes() {
                return Err(Error::InvalidLabel {
                    label:     yi,
                    n_classes: self.n_classes()
                });
            }
        }

        let t = self.config.threshold;
        let track = opts.tracks_accuracy();
        let mut indices: Vec<usize> = (0..x.len()).collect();
        let mut plateau = opts.early_stop.map(|rule| rule.watch());
        let mut stopped = false;
        let mut epochs_run = 0;
        let mut history = Vec::new();

        for epoch in 0..opts.epochs {
            if opts.shuffle {
                shuffle(&mut indices, rng);
            }
            for &i in &indices {
                self.learn(&x[i], y[i], t, rng)?;
            }
            epochs_run = epoch + 1;

            if !track {
                tracing::debug!(epoch = epochs_run, "epoch finished");
                continue;
            }

            let accuracy = self.evaluate(x, y)?;
            history.push(accuracy);
            tracing::debug!(epoch = epochs_run, accuracy, "epoch finished");

            if let Some(ref mut callback) = opts.callback
                && !callback(epochs_run, accuracy)
            {
                stopped = true;
                break;
            }

            if let Some(ref mut p) = plateau {
                match p.observe(accuracy) {
                    Progress::Improved => {}
                    Progress::Stalled(stale) => tracing::trace!(stale, "no accuracy gain"),
                    Progress::Exhausted => {
                        tracing::info!(epoch = epochs_run, best = ?p.best(), "accuracy plateaued");
                        stopped = true;
                        break;
                    }
                }
            }
        }

        Ok(FitResult {
            epochs_run,
            final_accuracy: self.evaluate(x, y)?,
            stopped_early: stopped,
            history
        })
    }

    /// # Overview
    ///
    /// Evaluates accuracy.
    pub fn evaluate(&self, x: &[Vec<u8>], y: &[usize]) -> Result<f32> {
        check_dataset(x, y)?;
        let mut correct = 0;
        for (xi, &yi) in x.iter().zip(y) {
            if self.classify(xi)? == yi {
                correct += 1;
            }
        }
        Ok(correct as f32 / x.len() as f32)
    }

    /// Extracts learned rules of one class.
    pub fn rules(&self, class: usize) -> Option<Vec<Rule>> {
        self.machines.get(class).map(TsetlinMachine::rules)
    }
}

/// Index of the first maximum.
pub(crate) fn argmax(votes: &[i32]) -> usize {
    let mut best = 0;
    for (i, &v) in votes.iter().enumerate().skip(1) {
        if v > votes[best] {
            best = i;
        }
    }
    best
}

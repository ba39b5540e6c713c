//! Configuration and builder for Tsetlin Machine.

use crate::error::{Error, Result};

/// # Overview
///
/// Configuration parameters for a Tsetlin Machine.
///
/// Immutable once built. `threshold` is the vote margin `T` used by `fit`;
/// `epochs` is the number of passes `fit` makes over the data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct Config {
    pub n_clauses:  usize,
    pub n_features: usize,
    pub n_states:   i16,
    pub s:          f32,
    pub threshold:  i32,
    pub epochs:     usize
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.n_clauses == 0 {
            return Err(Error::MissingClauses);
        }
        if self.n_features == 0 {
            return Err(Error::MissingFeatures);
        }
        if self.n_states < 2 || self.n_states % 2 != 0 {
            return Err(Error::InvalidStates(self.n_states));
        }
        if self.s.is_nan() || self.s <= 1.0 {
            return Err(Error::InvalidSpecificity);
        }
        if self.threshold <= 0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(())
    }

    /// # Overview
    ///
    /// Probability of the exploit branch of Type I feedback: 1 - 1/s.
    #[inline]
    #[must_use]
    pub fn prob_strengthen(&self) -> f32 {
        1.0 - self.prob_weaken()
    }

    /// # Overview
    ///
    /// Probability of the explore branch of Type I feedback: 1/s.
    #[inline]
    #[must_use]
    pub fn prob_weaken(&self) -> f32 {
        1.0 / self.s
    }

    /// Same configuration with a different clause count.
    pub(crate) fn with_clauses(mut self, n_clauses: usize) -> Self {
        self.n_clauses = n_clauses;
        self
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    n_clauses:  Option<usize>,
    n_features: Option<usize>,
    n_states:   Option<i16>,
    s:          Option<f32>,
    threshold:  Option<i32>,
    epochs:     Option<usize>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the number of clauses. For a multiclass machine this is the
    /// total, split evenly across classes.
    pub fn clauses(mut self, n: usize) -> Self {
        self.n_clauses = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the number of input features.
    pub fn features(mut self, n: usize) -> Self {
        self.n_features = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the number of automaton states N, even and >= 2 (default: 100).
    pub fn states(mut self, n: i16) -> Self {
        self.n_states = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets sensitivity parameter s (default: 3.9).
    pub fn specificity(mut self, s: f32) -> Self {
        self.s = Some(s);
        self
    }

    /// # Overview
    ///
    /// Sets vote margin T (default: 15).
    pub fn threshold(mut self, t: i32) -> Self {
        self.threshold = Some(t);
        self
    }

    /// # Overview
    ///
    /// Sets number of training epochs used by `fit` (default: 100).
    pub fn epochs(mut self, n: usize) -> Self {
        self.epochs = Some(n);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            n_clauses:  self.n_clauses.ok_or(Error::MissingClauses)?,
            n_features: self.n_features.ok_or(Error::MissingFeatures)?,
            n_states:   self.n_states.unwrap_or(100),
            s:          self.s.unwrap_or(3.9),
            threshold:  self.threshold.unwrap_or(15),
            epochs:     self.epochs.unwrap_or(100)
        };
        config.validate()?;
        Ok(config)
    }
}

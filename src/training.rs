//! Epoch-level training controls for [`MultiClass`](crate::MultiClass):
//! options, plateau detection, and the run summary.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::boxed::Box;

/// Called after every epoch with `(epoch, training accuracy)`. Returning
/// `false` ends the run.
pub type ProgressCallback = Box<dyn FnMut(usize, f32) -> bool + Send>;

/// # Overview
///
/// How a `fit_with_options` run proceeds. The vote margin comes from the
/// machine's `Config` and the generator is passed alongside, so neither lives
/// here.
///
/// # Examples
///
/// ```
/// use signed_tsetlin::FitOptions;
///
/// let opts = FitOptions::new(500)
///     .with_early_stop(20, 0.005)
///     .with_callback(|epoch, acc| epoch < 100 || acc < 0.99);
/// assert_eq!(opts.epochs, 500);
/// ```
pub struct FitOptions {
    pub epochs:     usize,
    pub early_stop: Option<EarlyStop>,
    pub shuffle:    bool,
    pub callback:   Option<ProgressCallback>
}

impl FitOptions {
    /// Shuffled epochs, no early stop, no callback.
    #[must_use]
    pub fn new(epochs: usize) -> Self {
        Self {
            epochs,
            early_stop: None,
            shuffle: true,
            callback: None
        }
    }

    /// Stops once accuracy has failed to beat its best by more than
    /// `min_delta` for `patience` epochs in a row.
    #[must_use]
    pub fn with_early_stop(self, patience: usize, min_delta: f32) -> Self {
        Self {
            early_stop: Some(EarlyStop {
                patience,
                min_delta
            }),
            ..self
        }
    }

    /// Visits samples in dataset order every epoch.
    #[must_use]
    pub fn no_shuffle(self) -> Self {
        Self {
            shuffle: false,
            ..self
        }
    }

    #[must_use]
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, f32) -> bool + Send + 'static
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Whether per-epoch accuracy has to be measured.
    pub(crate) fn tracks_accuracy(&self) -> bool {
        self.early_stop.is_some() || self.callback.is_some()
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self::new(100)
    }
}

impl core::fmt::Debug for FitOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FitOptions")
            .field("epochs", &self.epochs)
            .field("early_stop", &self.early_stop)
            .field("shuffle", &self.shuffle)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Plateau rule for early stopping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyStop {
    /// Consecutive non-improving epochs tolerated.
    pub patience:  usize,
    /// Margin an epoch must beat the best accuracy by to count as progress.
    pub min_delta: f32
}

impl EarlyStop {
    /// Fresh plateau state for one run.
    pub(crate) fn watch(self) -> Plateau {
        Plateau {
            rule:  self,
            best:  None,
            stale: 0
        }
    }
}

/// What one epoch's accuracy meant for the plateau rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    Improved,
    /// Epochs since the last improvement, still under patience.
    Stalled(usize),
    Exhausted
}

/// Running best accuracy and the number of epochs since it last moved.
#[derive(Debug)]
pub(crate) struct Plateau {
    rule:  EarlyStop,
    best:  Option<f32>,
    stale: usize
}

impl Plateau {
    /// Records one epoch. The first observation always counts as progress.
    pub(crate) fn observe(&mut self, accuracy: f32) -> Progress {
        let improved = match self.best {
            None => true,
            Some(best) => accuracy > best + self.rule.min_delta
        };
        if improved {
            self.best = Some(accuracy);
            self.stale = 0;
            return Progress::Improved;
        }

        self.stale += 1;
        if self.stale >= self.rule.patience {
            Progress::Exhausted
        } else {
            Progress::Stalled(self.stale)
        }
    }

    pub(crate) fn best(&self) -> Option<f32> {
        self.best
    }
}

/// Summary of a `fit` / `fit_with_options` run.
#[derive(Debug, Clone)]
pub struct FitResult {
    pub epochs_run:     usize,
    /// Training accuracy after the last epoch.
    pub final_accuracy: f32,
    /// True when the callback or the plateau rule ended the run.
    pub stopped_early:  bool,
    /// Training accuracy per epoch; empty when neither early stopping nor a
    /// callback asked for it.
    pub history:        Vec<f32>
}

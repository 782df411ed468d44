//! Training options, rolling error tracking, and results.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Hyperparams, error::Result};

/// Options for [`TsetlinMachine::fit`](crate::TsetlinMachine::fit).
#[derive(Debug, Clone)]
pub struct FitOptions {
    pub hyperparams: Hyperparams,
    pub epochs:      usize,
    pub seed:        u64,
    pub early_stop:  Option<EarlyStop>,
    pub shuffle:     bool,
    /// Weight of the previous value in the rolling error average.
    pub error_decay: f32
}

impl FitOptions {
    /// # Overview
    ///
    /// Creates options with given `s`, threshold, epochs and seed. Samples
    /// are presented in order unless [`FitOptions::shuffled`] is set.
    pub fn new(s: f32, threshold: i32, epochs: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            hyperparams: Hyperparams::new(s, threshold)?,
            epochs,
            seed,
            early_stop: None,
            shuffle: false,
            error_decay: RollingError::DEFAULT_DECAY
        })
    }

    /// Enables early stopping with patience.
    ///
    /// Training stops if accuracy doesn't improve by `min_delta`
    /// for `patience` consecutive epochs.
    #[must_use]
    pub fn with_early_stop(mut self, patience: usize, min_delta: f32) -> Self {
        self.early_stop = Some(EarlyStop {
            patience,
            min_delta
        });
        self
    }

    /// Shuffles sample order every epoch.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle = true;
        self
    }

    #[must_use]
    pub fn with_error_decay(mut self, decay: f32) -> Self {
        self.error_decay = decay;
        self
    }
}

/// Early stopping configuration.
#[derive(Debug, Clone, Copy)]
pub struct EarlyStop {
    /// Number of epochs without improvement before stopping.
    pub patience:  usize,
    /// Minimum improvement required to reset patience counter.
    pub min_delta: f32
}

/// # Overview
///
/// Exponentially smoothed misclassification rate.
///
/// Starts at 1.0 and updates as `decay * prev + (1 - decay) * miss`.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::RollingError;
///
/// let mut err = RollingError::default();
/// err.record(true);
/// assert!((err.value() - 0.99).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingError {
    value: f32,
    decay: f32
}

impl Default for RollingError {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DECAY)
    }
}

impl RollingError {
    pub const DEFAULT_DECAY: f32 = 0.99;

    pub fn new(decay: f32) -> Self {
        Self {
            value: 1.0,
            decay
        }
    }

    /// Records one prediction.
    pub fn record(&mut self, correct: bool) {
        let miss = if correct { 0.0 } else { 1.0 };
        self.value = self.decay * self.value + (1.0 - self.decay) * miss;
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Result of training.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Number of epochs actually run.
    pub epochs_run:     usize,
    /// Final accuracy on training data.
    pub final_accuracy: f32,
    /// Rolling misclassification rate after the last sample.
    pub rolling_error:  f32,
    /// Whether training stopped early.
    pub stopped_early:  bool,
    /// Accuracy history per epoch.
    pub history:        Vec<f32>
}

/// Tracks early stopping state during training.
#[derive(Debug)]
pub struct EarlyStopTracker {
    patience:  usize,
    min_delta: f32,
    best:      f32,
    wait:      usize
}

impl EarlyStopTracker {
    /// Creates tracker from early stop config.
    #[must_use]
    pub fn new(config: &EarlyStop) -> Self {
        Self {
            patience:  config.patience,
            min_delta: config.min_delta,
            best:      0.0,
            wait:      0
        }
    }

    /// Updates tracker with new accuracy.
    ///
    /// Returns `true` if training should stop (no improvement for patience
    /// epochs).
    pub fn update(&mut self, accuracy: f32) -> bool {
        if accuracy > self.best + self.min_delta {
            self.best = accuracy;
            self.wait = 0;
            false
        } else {
            self.wait += 1;
            self.wait >= self.patience
        }
    }
}

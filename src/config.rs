//! Configuration, builder and learning hyperparameters.

use crate::error::{Error, Result};

/// Largest supported `n_inputs`: literal indices are stored as `u32`.
pub const MAX_INPUTS: usize = (u32::MAX / 2) as usize;

/// # Overview
///
/// Dimensions of a Tsetlin Machine, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Config {
    pub n_inputs:           usize,
    pub n_outputs:          usize,
    pub clauses_per_output: usize,
    /// Saturation bound for every automaton, `None` for unbounded counters.
    pub state_bound:        Option<i32>
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
        if self.n_inputs == 0 {
            return Err(Error::MissingInputs);
        }
        if self.n_inputs > MAX_INPUTS {
            return Err(Error::TooManyInputs {
                max: MAX_INPUTS
            });
        }
        if self.n_outputs == 0 {
            return Err(Error::MissingOutputs);
        }
        if self.clauses_per_output == 0 {
            return Err(Error::MissingClauses);
        }
        if matches!(self.state_bound, Some(b) if b <= 0) {
            return Err(Error::InvalidStateBound);
        }
        Ok(())
    }

    /// Literals per clause, `2 * n_inputs`.
    #[inline]
    #[must_use]
    pub fn n_literals(&self) -> usize {
        2 * self.n_inputs
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    n_inputs:           Option<usize>,
    n_outputs:          Option<usize>,
    clauses_per_output: Option<usize>,
    state_bound:        Option<i32>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the number of binary inputs.
    pub fn inputs(mut self, n: usize) -> Self {
        self.n_inputs = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the number of output units (default: 1).
    pub fn outputs(mut self, n: usize) -> Self {
        self.n_outputs = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets clauses per output unit. Odd counts are allowed.
    pub fn clauses(mut self, n: usize) -> Self {
        self.clauses_per_output = Some(n);
        self
    }

    /// # Overview
    ///
    /// Saturates every automaton in `[-bound, bound]`. Unbounded if unset.
    pub fn state_bound(mut self, bound: i32) -> Self {
        self.state_bound = Some(bound);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            n_inputs:           self.n_inputs.ok_or(Error::MissingInputs)?,
            n_outputs:          self.n_outputs.unwrap_or(1),
            clauses_per_output: self.clauses_per_output.ok_or(Error::MissingClauses)?,
            state_bound:        self.state_bound
        };
        config.validate()?;
        Ok(config)
    }
}

/// # Overview
///
/// Feedback probabilities for one output unit.
///
/// `reinforce` applies when the target is 1 (drives the vote up), `suppress`
/// when the target is 0 (drives the vote down). They always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackProbabilities {
    pub reinforce: f32,
    pub suppress:  f32
}

/// # Overview
///
/// Learning hyperparameters: specificity `s` and vote threshold `T`.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::Hyperparams;
///
/// let hp = Hyperparams::new(4.0, 4).unwrap();
/// assert_eq!(hp.s_inv(), 0.25);
/// assert_eq!(hp.s_inv_conj(), 0.75);
///
/// let p = hp.feedback_probabilities(4);
/// assert_eq!((p.reinforce, p.suppress), (0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparams {
    s:         f32,
    threshold: i32
}

impl Hyperparams {
    /// # Overview
    ///
    /// Validates `s > 1` and `threshold > 0`.
    pub fn new(s: f32, threshold: i32) -> Result<Self> {
        if s.is_nan() || s <= 1.0 {
            return Err(Error::InvalidSpecificity);
        }
        if threshold <= 0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(Self {
            s,
            threshold
        })
    }

    #[inline]
    pub fn s(&self) -> f32 {
        self.s
    }

    #[inline]
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// # Overview
    ///
    /// Probability of weakening: 1/s.
    #[inline]
    pub fn s_inv(&self) -> f32 {
        1.0 / self.s
    }

    /// # Overview
    ///
    /// Probability of strengthening: 1 - 1/s.
    #[inline]
    pub fn s_inv_conj(&self) -> f32 {
        1.0 - self.s_inv()
    }

    /// # Overview
    ///
    /// Clamps `sum` into `[-T, T]` and derives both feedback probabilities.
    pub fn feedback_probabilities(&self, sum: i32) -> FeedbackProbabilities {
        let clamped = i64::from(sum.clamp(-self.threshold, self.threshold));
        let t = i64::from(self.threshold);
        let rescale = 1.0 / (2 * t) as f32;
        FeedbackProbabilities {
            reinforce: (t - clamped) as f32 * rescale,
            suppress:  (t + clamped) as f32 * rescale
        }
    }
}

//! Multi-output Tsetlin Machine: construction, activation and learning.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::Rng;

use crate::{
    Clause, Config, Hyperparams, OutputUnit, Rule,
    error::{Error, Result, check_binary},
    training::{EarlyStopTracker, FitOptions, FitResult, RollingError},
    utils::{rng_from_seed, shuffle}
};

/// # Overview
///
/// Tsetlin Machine with `n_outputs` independent output units, each voting
/// with `clauses_per_output` clauses over `2 * n_inputs` literals.
///
/// The machine is driven by interleaved [`activate`](Self::activate) and
/// [`learn`](Self::learn) calls. `learn` consumes the clause outputs and vote
/// sums cached by the preceding `activate`, against the input that call saw.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::{TsetlinMachine, utils::rng_from_seed};
///
/// let mut tm = TsetlinMachine::create(2, 2, 10).unwrap();
/// let mut rng = rng_from_seed(42);
///
/// let out = tm.activate(&[0, 1]).unwrap().to_vec();
/// assert_eq!(out.len(), 2);
///
/// tm.learn(&[1, 0], 4.0, 4, &mut rng).unwrap();
/// assert!(tm.is_consistent());
/// ```
#[derive(Debug, Clone)]
pub struct TsetlinMachine {
    pub(crate) config:    Config,
    pub(crate) outputs:   Vec<OutputUnit>,
    pub(crate) input:     Vec<u8>,
    pub(crate) output:    Vec<u8>,
    pub(crate) activated: bool
}

impl TsetlinMachine {
    /// # Overview
    ///
    /// Allocates every output unit with zero-state automata and empty
    /// inclusion sets.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            n_inputs = config.n_inputs,
            n_outputs = config.n_outputs,
            clauses_per_output = config.clauses_per_output,
            state_bound = ?config.state_bound,
            "creating tsetlin machine"
        );

        let outputs = (0..config.n_outputs)
            .map(|_| OutputUnit::new(config.n_inputs, config.clauses_per_output, config.state_bound))
            .collect();

        Ok(Self {
            outputs,
            input: vec![0; config.n_inputs],
            output: vec![0; config.n_outputs],
            activated: false,
            config
        })
    }

    /// # Overview
    ///
    /// Unbounded machine with the given dimensions.
    pub fn create(n_inputs: usize, n_outputs: usize, clauses_per_output: usize) -> Result<Self> {
        let config = Config::builder()
            .inputs(n_inputs)
            .outputs(n_outputs)
            .clauses(clauses_per_output)
            .build()?;
        Self::new(config)
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn n_inputs(&self) -> usize {
        self.config.n_inputs
    }

    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.config.n_outputs
    }

    /// # Overview
    ///
    /// Classifies `input`, caching the input, clause outputs, vote sums and
    /// the output vector for the next [`learn`](Self::learn).
    pub fn activate(&mut self, input: &[u8]) -> Result<&[u8]> {
        check_binary(input, self.config.n_inputs)?;
        self.input.copy_from_slice(input);

        for (unit, out) in self.outputs.iter_mut().zip(self.output.iter_mut()) {
            *out = unit.activate(&self.input);
        }
        self.activated = true;

        Ok(&self.output)
    }

    /// # Overview
    ///
    /// Classifies `input` without touching any cached state.
    pub fn predict(&self, input: &[u8]) -> Result<Vec<u8>> {
        check_binary(input, self.config.n_inputs)?;
        Ok(self.outputs.iter().map(|unit| unit.predict(input)).collect())
    }

    /// # Overview
    ///
    /// One training step toward `targets` with specificity `s` and vote
    /// threshold `threshold`.
    ///
    /// # Errors
    ///
    /// Rejects invalid `s`/`threshold`, malformed targets, and calls made
    /// before any activation.
    pub fn learn<R: Rng>(&mut self, targets: &[u8], s: f32, threshold: i32, rng: &mut R) -> Result<()> {
        let hp = Hyperparams::new(s, threshold)?;
        self.learn_with(targets, &hp, rng)
    }

    /// # Overview
    ///
    /// [`learn`](Self::learn) with pre-validated hyperparameters.
    pub fn learn_with<R: Rng>(&mut self, targets: &[u8], hp: &Hyperparams, rng: &mut R) -> Result<()> {
        self.check_learn(targets)?;

        for (unit, &target) in self.outputs.iter_mut().zip(targets) {
            unit.learn(&self.input, target == 1, hp, rng);
        }
        Ok(())
    }

    pub(crate) fn check_learn(&self, targets: &[u8]) -> Result<()> {
        if !self.activated {
            return Err(Error::NotActivated);
        }
        check_binary(targets, self.config.n_outputs)
    }

    /// # Overview
    ///
    /// Recomputes inclusion of one literal from its automaton sign. Returns
    /// true if membership changed.
    pub fn update_inclusion(&mut self, output: usize, clause: usize, literal: usize) -> Result<bool> {
        let n_literals = self.config.n_literals();
        let clause = self.clause_mut(output, clause)?;
        if literal >= n_literals {
            return Err(Error::IndexOutOfRange {
                index: literal,
                len:   n_literals
            });
        }
        Ok(clause.update_inclusion(literal))
    }

    /// Input seen by the last activation (zeros before the first).
    #[inline]
    pub fn last_input(&self) -> &[u8] {
        &self.input
    }

    /// Output vector produced by the last activation.
    #[inline]
    pub fn last_output(&self) -> &[u8] {
        &self.output
    }

    /// Vote sums cached by the last activation.
    pub fn vote_sums(&self) -> Vec<i32> {
        self.outputs.iter().map(OutputUnit::sum).collect()
    }

    #[inline]
    pub fn output_units(&self) -> &[OutputUnit] {
        &self.outputs
    }

    pub fn output_unit(&self, output: usize) -> Option<&OutputUnit> {
        self.outputs.get(output)
    }

    pub fn clause(&self, output: usize, clause: usize) -> Option<&Clause> {
        self.outputs.get(output)?.clauses().get(clause)
    }

    /// # Overview
    ///
    /// Mutable access to one clause. Mutation goes through the clause's own
    /// methods, which keep its inclusion set in sync.
    pub fn clause_mut(&mut self, output: usize, clause: usize) -> Result<&mut Clause> {
        let n_outputs = self.outputs.len();
        let unit = self.outputs.get_mut(output).ok_or(Error::IndexOutOfRange {
            index: output,
            len:   n_outputs
        })?;
        let clauses = unit.clauses_mut();
        let n_clauses = clauses.len();
        clauses.get_mut(clause).ok_or(Error::IndexOutOfRange {
            index: clause,
            len:   n_clauses
        })
    }

    /// True iff every inclusion set matches its automata signs.
    pub fn is_consistent(&self) -> bool {
        self.outputs.iter().all(OutputUnit::is_consistent)
    }

    /// Extracts learned rules, one `Vec` per output unit.
    #[must_use]
    pub fn rules(&self) -> Vec<Vec<Rule>> {
        self.outputs
            .iter()
            .map(|unit| unit.clauses().iter().map(Rule::from_clause).collect())
            .collect()
    }

    /// Evaluates accuracy on labelled data.
    ///
    /// A sample counts as correct only if every output bit matches.
    pub fn evaluate(&self, x: &[Vec<u8>], y: &[Vec<u8>]) -> Result<f32> {
        check_dataset(x, y)?;
        let mut correct = 0;
        for (xi, yi) in x.iter().zip(y) {
            check_binary(yi, self.config.n_outputs)?;
            if self.predict(xi)? == *yi {
                correct += 1;
            }
        }
        Ok(correct as f32 / x.len() as f32)
    }

    /// Trains for `opts.epochs` epochs, presenting each sample as
    /// `activate` followed by `learn`.
    ///
    /// # Arguments
    ///
    /// * `x` - Binary input vectors
    /// * `y` - Binary target vectors, one per input
    /// * `opts` - Hyperparameters, epochs, seed, shuffling, early stopping
    ///
    /// # Returns
    ///
    /// [`FitResult`] with training statistics.
    pub fn fit(&mut self, x: &[Vec<u8>], y: &[Vec<u8>], opts: &FitOptions) -> Result<FitResult> {
        check_dataset(x, y)?;
        for (xi, yi) in x.iter().zip(y) {
            check_binary(xi, self.config.n_inputs)?;
            check_binary(yi, self.config.n_outputs)?;
        }

        let mut rng = rng_from_seed(opts.seed);
        let mut indices: Vec<usize> = (0..x.len()).collect();
        let mut tracker = opts.early_stop.as_ref().map(EarlyStopTracker::new);
        let mut rolling = RollingError::new(opts.error_decay);
        let mut history = Vec::with_capacity(opts.epochs);
        let mut stopped = false;

        for epoch in 0..opts.epochs {
            if opts.shuffle {
                shuffle(&mut indices, &mut rng);
            }

            for &i in &indices {
                let correct = self.activate(&x[i])? == y[i].as_slice();
                rolling.record(correct);
                self.learn_with(&y[i], &opts.hyperparams, &mut rng)?;
            }

            let accuracy = self.evaluate(x, y)?;
            history.push(accuracy);
            tracing::debug!(
                epoch = epoch + 1,
                accuracy,
                rolling_error = rolling.value(),
                "epoch finished"
            );

            if let Some(ref mut t) = tracker
                && t.update(accuracy)
            {
                tracing::debug!(epoch = epoch + 1, "early stopping");
                stopped = true;
                break;
            }
        }

        Ok(FitResult {
            epochs_run: history.len(),
            final_accuracy: history.last().copied().unwrap_or(0.0),
            rolling_error: rolling.value(),
            stopped_early: stopped,
            history
        })
    }
}

pub(crate) fn check_dataset(x: &[Vec<u8>], y: &[Vec<u8>]) -> Result<()> {
    if x.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if x.len() != y.len() {
        return Err(Error::DimensionMismatch {
            expected: x.len(),
            got:      y.len()
        });
    }
    Ok(())
}

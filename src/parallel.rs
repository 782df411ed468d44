//! Parallel activation, prediction and learning using rayon.
//!
//! Output units share no state, so activation splits across units freely.
//! Learning draws from one [`FastRng`] stream per output unit, which makes
//! the result independent of how rayon schedules the units.

use rayon::prelude::*;

use crate::{
    Hyperparams, TsetlinMachine,
    error::{Error, Result, check_binary},
    machine::check_dataset,
    utils::{FastRng, rng_streams}
};

impl TsetlinMachine {
    /// # Overview
    ///
    /// [`activate`](Self::activate) with output units evaluated in parallel.
    pub fn activate_parallel(&mut self, input: &[u8]) -> Result<&[u8]> {
        check_binary(input, self.config.n_inputs)?;
        self.input.copy_from_slice(input);

        let input = &self.input;
        self.outputs
            .par_iter_mut()
            .zip(self.output.par_iter_mut())
            .for_each(|(unit, out)| *out = unit.activate(input));
        self.activated = true;

        Ok(&self.output)
    }

    /// # Overview
    ///
    /// [`learn_with`](Self::learn_with) with output units trained in
    /// parallel, unit `i` drawing only from `streams[i]`.
    pub fn learn_parallel(&mut self, targets: &[u8], hp: &Hyperparams, streams: &mut [FastRng]) -> Result<()> {
        self.check_learn(targets)?;
        if streams.len() != self.outputs.len() {
            return Err(Error::DimensionMismatch {
                expected: self.outputs.len(),
                got:      streams.len()
            });
        }

        let input = &self.input;
        self.outputs
            .par_iter_mut()
            .zip(targets.par_iter())
            .zip(streams.par_iter_mut())
            .for_each(|((unit, &target), rng)| unit.learn(input, target == 1, hp, rng));
        Ok(())
    }

    /// One RNG stream per output unit for [`learn_parallel`](Self::learn_parallel).
    pub fn rng_streams(&self, seed: u64) -> Vec<FastRng> {
        rng_streams(seed, self.outputs.len()).collect()
    }

    /// # Overview
    ///
    /// Parallel side-effect-free prediction over many inputs.
    pub fn predict_batch(&self, xs: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
        xs.par_iter().map(|x| self.predict(x)).collect()
    }

    /// # Overview
    ///
    /// Parallel [`evaluate`](Self::evaluate).
    pub fn evaluate_parallel(&self, x: &[Vec<u8>], y: &[Vec<u8>]) -> Result<f32> {
        check_dataset(x, y)?;

        let n_outputs = self.config.n_outputs;
        let hits: Vec<bool> = x
            .par_iter()
            .zip(y.par_iter())
            .map(|(xi, yi)| -> Result<bool> {
                check_binary(yi, n_outputs)?;
                Ok(self.predict(xi)? == *yi)
            })
            .collect::<Result<_>>()?;
        let correct = hits.iter().filter(|&&hit| hit).count();
        Ok(correct as f32 / x.len() as f32)
    }
}

//! Output unit - a bank of alternating-polarity clauses voting on one bit.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::{
    Clause, Hyperparams, Polarity,
    feedback::{type_i, type_ii},
    utils::bernoulli
};

/// # Overview
///
/// Fixed-size clause ensemble. Clause `i` has polarity
/// [`Polarity::from_index`]`(i)`; the signed count of firing clauses is the
/// vote sum and the class bit is `sum > 0`.
///
/// The sum from the last [`OutputUnit::activate`] is cached for
/// [`OutputUnit::learn`].
#[derive(Debug, Clone)]
pub struct OutputUnit {
    clauses: Vec<Clause>,
    sum:     i32
}

impl OutputUnit {
    pub fn new(n_inputs: usize, n_clauses: usize, bound: Option<i32>) -> Self {
        let clauses = (0..n_clauses)
            .map(|i| Clause::new(n_inputs, Polarity::from_index(i), bound))
            .collect();
        Self {
            clauses,
            sum: 0
        }
    }

    #[inline]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    #[inline]
    pub(crate) fn clauses_mut(&mut self) -> &mut [Clause] {
        &mut self.clauses
    }

    /// Vote sum cached by the last activation.
    #[inline]
    pub fn sum(&self) -> i32 {
        self.sum
    }

    /// # Overview
    ///
    /// Sum of clause votes for `input`, without touching any cache.
    #[inline]
    pub fn vote_sum(&self, input: &[u8]) -> i32 {
        self.clauses.iter().map(|c| c.vote(input)).sum()
    }

    /// # Overview
    ///
    /// Class bit for `input`, without touching any cache.
    #[inline]
    pub fn predict(&self, input: &[u8]) -> u8 {
        u8::from(self.vote_sum(input) > 0)
    }

    /// # Overview
    ///
    /// Activates every clause, caching clause outputs and the vote sum.
    pub fn activate(&mut self, input: &[u8]) -> u8 {
        let mut sum = 0;
        for clause in &mut self.clauses {
            if clause.activate(input) {
                sum += clause.polarity().sign();
            }
        }
        self.sum = sum;
        u8::from(sum > 0)
    }

    /// # Overview
    ///
    /// One learning step toward `target` using the cached sum and clause
    /// outputs. One uniform draw per clause decides whether it gets
    /// feedback:
    ///
    /// | polarity | target | feedback (probability) |
    /// |---|---|---|
    /// | + | 1 | Type I (`reinforce`) |
    /// | + | 0 | Type II (`suppress`) |
    /// | - | 1 | Type II (`reinforce`) |
    /// | - | 0 | Type I (`suppress`) |
    pub fn learn<R: Rng>(&mut self, input: &[u8], target: bool, hp: &Hyperparams, rng: &mut R) {
        let probs = hp.feedback_probabilities(self.sum);
        tracing::trace!(
            sum = self.sum,
            label = target,
            s = hp.s(),
            threshold = hp.threshold(),
            reinforce = probs.reinforce,
            suppress = probs.suppress,
            "output unit feedback"
        );

        let prob = if target { probs.reinforce } else { probs.suppress };

        for clause in &mut self.clauses {
            if !bernoulli(rng, prob) {
                continue;
            }
            match (clause.polarity(), target) {
                (Polarity::Positive, true) | (Polarity::Negative, false) => {
                    type_i(clause, input, hp, rng);
                }
                (Polarity::Positive, false) | (Polarity::Negative, true) => {
                    type_ii(clause, input);
                }
            }
        }
    }

    /// True iff every clause's inclusion set matches its automata.
    pub fn is_consistent(&self) -> bool {
        self.clauses.iter().all(Clause::is_consistent)
    }
}

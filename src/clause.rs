//! Clause - a conjunction over the currently included literals.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Automaton, InclusionSet, literal::literal_value};

/// # Overview
///
/// Voting polarity of a clause, fixed by its index in the output unit:
/// even indices vote for the class, odd indices against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative
}

impl Polarity {
    #[inline]
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// `+1` or `-1`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1
        }
    }
}

/// # Overview
///
/// A clause with `2 * n_inputs` automata and a sparse inclusion cache.
///
/// - `automata[k]` controls literal `x_k`
/// - `automata[n_inputs + k]` controls literal `NOT x_k`
///
/// Every automaton mutation goes through [`Clause::increment`],
/// [`Clause::decrement`] or [`Clause::set_state`], each of which resyncs the
/// touched literal's inclusion membership before returning.
///
/// The clause also caches its output from the last [`Clause::activate`];
/// feedback reads that cached value, not a fresh evaluation.
#[derive(Debug, Clone)]
pub struct Clause {
    automata:   Vec<Automaton>,
    inclusions: InclusionSet,
    output:     bool,
    polarity:   Polarity,
    n_inputs:   usize
}

impl Clause {
    /// # Overview
    ///
    /// Creates clause with all automata at 0 and an empty inclusion set.
    pub fn new(n_inputs: usize, polarity: Polarity, bound: Option<i32>) -> Self {
        let automata = (0..2 * n_inputs).map(|_| Automaton::with_bound(bound)).collect();
        Self {
            automata,
            inclusions: InclusionSet::new(),
            output: false,
            polarity,
            n_inputs
        }
    }

    #[inline(always)]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[inline(always)]
    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    /// Number of literals, `2 * n_inputs`.
    #[inline(always)]
    pub fn n_literals(&self) -> usize {
        self.automata.len()
    }

    #[inline(always)]
    pub fn automata(&self) -> &[Automaton] {
        &self.automata
    }

    #[inline(always)]
    pub fn inclusions(&self) -> &InclusionSet {
        &self.inclusions
    }

    /// Output cached by the last activation.
    #[inline(always)]
    pub fn output(&self) -> bool {
        self.output
    }

    #[inline]
    pub fn is_included(&self, literal: usize) -> bool {
        self.inclusions.contains(literal)
    }

    /// # Overview
    ///
    /// Evaluates the conjunction of included literals. Empty set fires.
    #[inline]
    pub fn evaluate(&self, input: &[u8]) -> bool {
        debug_assert_eq!(input.len(), self.n_inputs);
        self.inclusions.iter().all(|literal| literal_value(input, literal))
    }

    /// # Overview
    ///
    /// Evaluates and caches the output for the next feedback step.
    #[inline]
    pub fn activate(&mut self, input: &[u8]) -> bool {
        self.output = self.evaluate(input);
        self.output
    }

    /// # Overview
    ///
    /// Returns polarity sign if fires, 0 otherwise.
    #[inline(always)]
    pub fn vote(&self, input: &[u8]) -> i32 {
        if self.evaluate(input) { self.polarity.sign() } else { 0 }
    }

    /// # Overview
    ///
    /// Recomputes inclusion of one literal from its automaton sign.
    /// Returns true if membership changed.
    #[inline]
    pub fn update_inclusion(&mut self, literal: usize) -> bool {
        let included = self.automata[literal].action();
        self.inclusions.sync(literal, included)
    }

    #[inline]
    pub fn increment(&mut self, literal: usize) {
        self.automata[literal].increment();
        self.update_inclusion(literal);
    }

    #[inline]
    pub fn decrement(&mut self, literal: usize) {
        self.automata[literal].decrement();
        self.update_inclusion(literal);
    }

    /// # Overview
    ///
    /// Overwrites one automaton state (clamped to its bound).
    pub fn set_state(&mut self, literal: usize, state: i32) {
        self.automata[literal].set_state(state);
        self.update_inclusion(literal);
    }

    /// # Overview
    ///
    /// True iff the inclusion set equals `{ i : automata[i].state() > 0 }`.
    pub fn is_consistent(&self) -> bool {
        let included = self.automata.iter().filter(|a| a.action()).count();
        included == self.inclusions.len()
            && self.inclusions.iter().all(|i| self.automata[i].action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clause() {
        let c = Clause::new(5, Polarity::Positive, None);
        assert_eq!(c.n_inputs(), 5);
        assert_eq!(c.n_literals(), 10);
        assert!(c.inclusions().is_empty());
        assert!(c.automata().iter().all(|a| a.state() == 0));
    }

    #[test]
    fn non_positive_bound_falls_back_to_unbounded() {
        let mut c = Clause::new(2, Polarity::Positive, Some(-1));
        c.set_state(0, 50);
        c.set_state(3, -50);

        assert_eq!(c.automata()[0].state(), 50);
        assert_eq!(c.automata()[3].state(), -50);
        assert!(c.is_included(0));
        assert!(c.is_consistent());
    }

    #[test]
    fn polarity_by_parity() {
        assert_eq!(Polarity::from_index(0), Polarity::Positive);
        assert_eq!(Polarity::from_index(1), Polarity::Negative);
        assert_eq!(Polarity::from_index(4).sign(), 1);
        assert_eq!(Polarity::from_index(7).sign(), -1);
    }

    #[test]
    fn empty_clause_fires() {
        let c = Clause::new(3, Polarity::Positive, None);
        assert!(c.evaluate(&[0, 1, 0]));
        assert!(c.evaluate(&[1, 1, 1]));
    }

    #[test]
    fn include_violation() {
        let mut c = Clause::new(3, Polarity::Positive, None);
        c.increment(0);
        assert!(c.is_included(0));
        assert!(!c.evaluate(&[0, 0, 0]));
        assert!(c.evaluate(&[1, 0, 0]));
    }

    #[test]
    fn negated_literal() {
        let mut c = Clause::new(2, Polarity::Negative, None);
        c.increment(3);
        assert!(c.evaluate(&[1, 0]));
        assert!(!c.evaluate(&[1, 1]));
        assert_eq!(c.vote(&[0, 0]), -1);
        assert_eq!(c.vote(&[0, 1]), 0);
    }

    #[test]
    fn activate_caches_output() {
        let mut c = Clause::new(2, Polarity::Positive, None);
        c.increment(0);
        assert!(!c.activate(&[0, 1]));
        assert!(!c.output());
        assert!(c.activate(&[1, 1]));
        assert!(c.output());
    }

    #[test]
    fn decrement_removes_inclusion() {
        let mut c = Clause::new(2, Polarity::Positive, None);
        c.increment(1);
        c.increment(1);
        c.decrement(1);
        assert!(c.is_included(1));
        c.decrement(1);
        assert!(!c.is_included(1));
        assert_eq!(c.automata()[1].state(), 0);
        assert!(c.is_consistent());
    }

    #[test]
    fn set_state_resyncs() {
        let mut c = Clause::new(2, Polarity::Positive, Some(4));
        c.set_state(2, 10);
        assert_eq!(c.automata()[2].state(), 4);
        assert!(c.is_included(2));
        c.set_state(2, -1);
        assert!(!c.is_included(2));
        assert!(c.is_consistent());
    }
}

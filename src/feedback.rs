//! Type I and Type II feedback mechanisms.
//!
//! Both rules read the clause output cached by the last activation and the
//! input that activation saw. Every automaton step resyncs inclusion for
//! that literal immediately.

use rand::Rng;

use crate::{Clause, Hyperparams, literal::literal_value, utils::bernoulli};

/// # Overview
///
/// Type I feedback: reinforces the clause toward the current example.
///
/// When the clause fired: true literals step up with probability `1 - 1/s`,
/// false literals that are not included step down with probability `1/s`,
/// false included literals are left alone (no draw).
/// When it did not fire: every literal steps down with probability `1/s`.
///
/// One uniform draw is consumed per literal except in the untouched case.
pub fn type_i<R: Rng>(clause: &mut Clause, input: &[u8], hp: &Hyperparams, rng: &mut R) {
    let prob_weaken = hp.s_inv();
    let prob_strengthen = hp.s_inv_conj();

    if !clause.output() {
        for literal in 0..clause.n_literals() {
            if bernoulli(rng, prob_weaken) {
                clause.decrement(literal);
            }
        }
        return;
    }

    for literal in 0..clause.n_literals() {
        if literal_value(input, literal) {
            if bernoulli(rng, prob_strengthen) {
                clause.increment(literal);
            }
        } else if !clause.is_included(literal) && bernoulli(rng, prob_weaken) {
            clause.decrement(literal);
        }
    }
}

/// # Overview
///
/// Type II feedback: tightens a firing clause against a negative example.
///
/// Deterministic. Every false, excluded literal steps up by one. No-op if
/// the clause did not fire.
pub fn type_ii(clause: &mut Clause, input: &[u8]) {
    if !clause.output() {
        return;
    }

    for literal in 0..clause.n_literals() {
        if !literal_value(input, literal) && !clause.is_included(literal) {
            clause.increment(literal);
        }
    }
}

//! Rule extraction for interpretability.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::{Clause, Literal, Polarity};

/// # Overview
///
/// A human-readable rule extracted from a clause.
///
/// Represents a conjunction: `(x[i1] AND x[i2] AND NOT x[j1] AND NOT x[j2])`.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::{Clause, Polarity, Rule};
///
/// let mut clause = Clause::new(4, Polarity::Positive, None);
/// clause.increment(0);
/// clause.increment(6);
///
/// let rule = Rule::from_clause(&clause);
/// assert_eq!(rule.included, vec![0]);
/// assert_eq!(rule.negated, vec![2]);
/// assert_eq!(rule.to_string(), "+ (x[0] AND NOT x[2])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub included: Vec<usize>,
    pub negated:  Vec<usize>,
    pub polarity: Polarity
}

impl Rule {
    /// # Overview
    ///
    /// Extracts rule from a clause's current inclusion set.
    pub fn from_clause(clause: &Clause) -> Self {
        let mut included = Vec::new();
        let mut negated = Vec::new();

        for index in clause.inclusions().iter() {
            match Literal::from_index(index, clause.n_inputs()) {
                Literal::Positive(k) => included.push(k),
                Literal::Negated(k) => negated.push(k)
            }
        }

        Self {
            included,
            negated,
            polarity: clause.polarity()
        }
    }

    /// # Overview
    ///
    /// Returns true if rule has no literals (matches everything).
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.negated.is_empty()
    }

    /// # Overview
    ///
    /// Returns number of literals.
    pub fn complexity(&self) -> usize {
        self.included.len() + self.negated.len()
    }

    /// Literals in display order: raw bits first, then negations.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.included
            .iter()
            .map(|&k| Literal::Positive(k))
            .chain(self.negated.iter().map(|&k| Literal::Negated(k)))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "TRUE");
        }

        let sign = match self.polarity {
            Polarity::Positive => "+",
            Polarity::Negative => "-"
        };
        write!(f, "{sign} (")?;
        for (i, literal) in self.literals().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{literal}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rule() {
        let clause = Clause::new(3, Polarity::Positive, None);
        let rule = Rule::from_clause(&clause);

        assert!(rule.is_empty());
        assert_eq!(rule.complexity(), 0);
        assert_eq!(rule.to_string(), "TRUE");
    }

    #[test]
    fn rule_with_literals() {
        let mut clause = Clause::new(4, Polarity::Negative, None);
        clause.increment(0);
        clause.increment(5);

        let rule = Rule::from_clause(&clause);

        assert_eq!(rule.included, vec![0]);
        assert_eq!(rule.negated, vec![1]);
        assert_eq!(rule.polarity, Polarity::Negative);
        assert_eq!(rule.complexity(), 2);
        assert_eq!(rule.to_string(), "- (x[0] AND NOT x[1])");
    }
}

//! Literal index space.
//!
//! For `n` inputs there are `2n` literals: indices `[0, n)` address the raw
//! bits `x_k`, indices `[n, 2n)` address their complements `NOT x_k`.

use core::fmt;

/// # Overview
///
/// A decoded literal index.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::Literal;
///
/// assert_eq!(Literal::from_index(1, 3), Literal::Positive(1));
/// assert_eq!(Literal::from_index(4, 3), Literal::Negated(1));
/// assert_eq!(Literal::Negated(1).index(3), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    Positive(usize),
    Negated(usize)
}

impl Literal {
    #[inline]
    pub fn from_index(index: usize, n_inputs: usize) -> Self {
        debug_assert!(index < 2 * n_inputs);
        if index < n_inputs {
            Self::Positive(index)
        } else {
            Self::Negated(index - n_inputs)
        }
    }

    #[inline]
    pub fn index(self, n_inputs: usize) -> usize {
        match self {
            Self::Positive(k) => k,
            Self::Negated(k) => k + n_inputs
        }
    }

    /// # Overview
    ///
    /// Truth value of the literal against a binary input.
    #[inline]
    pub fn value(self, input: &[u8]) -> bool {
        match self {
            Self::Positive(k) => input[k] != 0,
            Self::Negated(k) => input[k] == 0
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive(k) => write!(f, "x[{k}]"),
            Self::Negated(k) => write!(f, "NOT x[{k}]")
        }
    }
}

/// # Overview
///
/// Truth value of literal `index` against `input`, where `input.len()` is
/// the number of inputs.
#[inline(always)]
pub fn literal_value(input: &[u8], index: usize) -> bool {
    Literal::from_index(index, input.len()).value(input)
}

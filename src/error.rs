//! Error types for Tsetlin Machine.

use thiserror::Error as ThisError;

/// # Overview
///
/// Errors that can occur when building or driving a Tsetlin Machine.
///
/// Every variant is a caller contract violation: the offending call is
/// rejected and the machine is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("n_inputs must be > 0")]
    MissingInputs,
    #[error("n_outputs must be > 0")]
    MissingOutputs,
    #[error("n_inputs must be <= {max}")]
    TooManyInputs { max: usize },
    #[error("clauses_per_output must be > 0")]
    MissingClauses,
    #[error("state bound must be > 0")]
    InvalidStateBound,
    #[error("s must be > 1.0")]
    InvalidSpecificity,
    #[error("threshold must be > 0")]
    InvalidThreshold,
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("value {value} at position {index} is not binary")]
    NonBinary { index: usize, value: u8 },
    #[error("learn requires a preceding activate")]
    NotActivated,
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("dataset cannot be empty")]
    EmptyDataset
}

/// # Overview
///
/// Result type for Tsetlin Machine operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Checks that `values` has `expected` entries, all of them 0 or 1.
pub(crate) fn check_binary(values: &[u8], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            got: values.len()
        });
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v > 1) {
        return Err(Error::NonBinary {
            index,
            value
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_dimension_mismatch() {
        let err = Error::DimensionMismatch {
            expected: 2,
            got: 3
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 2, got 3");
    }

    #[test]
    fn check_binary_accepts_bits() {
        assert_eq!(check_binary(&[0, 1, 1], 3), Ok(()));
    }

    #[test]
    fn check_binary_rejects_length() {
        assert_eq!(
            check_binary(&[0, 1], 3),
            Err(Error::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn check_binary_rejects_non_bit() {
        assert_eq!(
            check_binary(&[0, 2, 1], 3),
            Err(Error::NonBinary {
                index: 1,
                value: 2
            })
        );
    }
}

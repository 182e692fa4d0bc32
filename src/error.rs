use num_bigint::BigInt;
use thiserror::Error;

/// Input-validation failures.
///
/// All variants are raised synchronously at the point of detection and
/// propagate to the caller unchanged; none are retried. A failed call
/// produces no partial result and no trace records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KaratsubaError {
    #[error("invalid radix {0:?}: expected an integer between 2 and 36")]
    InvalidRadix(String),
    #[error("empty digit string")]
    EmptyInput,
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },
    #[error("cannot encode negative value {0}")]
    NegativeValue(BigInt),
}

use thiserror::Error;

/// Failure of a mean computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MeanError {
    /// The input had no elements, so the divisor (the element count) is zero.
    #[error("cannot compute the mean of an empty collection: division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, MeanError>;

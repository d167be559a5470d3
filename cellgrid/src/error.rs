use thiserror::Error;

/// Errors raised while validating grid parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The grid side is zero or not a power of two
    #[error("dimension must be a positive power of two (n = {0})")]
    InvalidDimension(usize),

    /// `n * n` does not fit in memory addressing
    #[error("dimension is too large (n = {0})")]
    DimensionTooLarge(usize),

    #[error("dimension is not a number: {0:?}")]
    NotANumber(String),
}

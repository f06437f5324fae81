use thiserror::Error;

/// Errors produced by the coin change solvers and the driver.
#[derive(Error, Debug)]
pub enum Error {
    /// A denomination of zero can never reduce the remaining amount.
    #[error("denomination at position {index} is zero; denominations must be positive")]
    ZeroDenomination { index: usize },

    /// The same face value appears more than once in the denomination set.
    #[error("denomination {value} appears more than once")]
    DuplicateDenomination { value: usize },

    /// No combination of the given denominations sums to the amount.
    #[error("amount {amount} cannot be made from the given denominations")]
    Unrepresentable { amount: usize },

    /// The DP table for this amount cannot be allocated.
    #[error("amount {amount} is too large to build a coin table for")]
    AmountTooLarge { amount: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

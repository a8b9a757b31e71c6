use cosmwasm_std::{
    CheckedFromRatioError, ConversionOverflowError, DecimalRangeExceeded, DivideByZeroError,
    OverflowError, StdError,
};
use thiserror::Error;

pub type AmountResult<T> = Result<T, AmountError>;

#[derive(Error, Debug, PartialEq)]
pub enum AmountError {
    #[error("cannot parse '{input}' as a decimal amount")]
    InvalidInput {
        input: String,
    },

    #[error("'{input}' does not fit in a token amount with {decimals} decimal places")]
    AmountTooLarge {
        input: String,
        decimals: u32,
    },

    #[error("amounts with {left} and {right} decimal places cannot be combined")]
    DecimalMismatch {
        left: u32,
        right: u32,
    },

    #[error("{decimals} decimal places exceeds the supported maximum of 18")]
    UnsupportedDecimals {
        decimals: u32,
    },

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("{0}")]
    DecimalRange(#[from] DecimalRangeExceeded),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Std(#[from] StdError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("invalid param: {param_name} is {invalid_value}, but it should be {predicate}")]
    InvalidParam {
        param_name: String,
        invalid_value: String,
        predicate: String,
    },
}

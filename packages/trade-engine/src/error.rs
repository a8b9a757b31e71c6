use cosmwasm_std::{CheckedFromRatioError, OverflowError, StdError};
use meridian_types::error::{AmountError, ValidationError};
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("{0}")]
    Amount(#[from] AmountError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("computer tracks pool {expected}, but was given data for {actual}")]
    AssetMismatch {
        expected: String,
        actual: String,
    },

    #[error("a submission for this account is already in flight")]
    SubmissionInFlight,
}

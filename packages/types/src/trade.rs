use std::fmt;

use cosmwasm_schema::cw_serde;
use strum::EnumIter;
use thiserror::Error;
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::amount::TokenAmount;

/// The four things a user can do against a margin pool. A closed enum so that
/// adding an action forces every resolver, projector and validator match arm
/// to be revisited at compile time.
#[cw_serde]
#[derive(Copy, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub enum TradeAction {
    Deposit,
    Withdraw,
    Borrow,
    Repay,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeAction::Deposit => "deposit",
            TradeAction::Withdraw => "withdraw",
            TradeAction::Borrow => "borrow",
            TradeAction::Repay => "repay",
        };
        write!(f, "{s}")
    }
}

/// Every reason the engine can surface for gating an input or rejecting a
/// submission. These are values shown inline to the user, never raised as
/// errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("no funds in wallet to deposit")]
    NoWalletBalance,

    #[error("no deposits to withdraw")]
    NoDepositBalance,

    #[error("no collateral deposited to borrow against")]
    NoCollateral,

    #[error("pool has no available liquidity")]
    NoLiquidity,

    #[error("no outstanding loan to repay")]
    NoOutstandingLoan,

    #[error("account risk is at or above the liquidation level")]
    AccountAtLiquidationRisk,

    #[error("trade would push account risk past the maximum allowed level")]
    MaxRiskExceeded,

    #[error("trade brings account risk near the liquidation level")]
    NearLiquidationRisk,

    #[error("amount exceeds the maximum withdrawable")]
    AboveMaxWithdraw,

    #[error("amount exceeds the maximum borrowable")]
    AboveMaxBorrow,

    #[error("amount exceeds the maximum deposit")]
    AboveMaxDeposit,

    #[error("amount exceeds wallet balance")]
    AboveWalletBalance,

    #[error("amount exceeds the outstanding loan")]
    AboveLoanBalance,

    #[error("amount exceeds the pool's available liquidity")]
    AbovePoolLiquidity,

    #[error("amount must be greater than zero")]
    EmptyAmount,
}

/// Outcome of classifying the current input. At most one of the three reasons
/// is set; a disabled action short-circuits error and warning evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub disabled_reason: Option<ValidationReason>,
    pub error_reason: Option<ValidationReason>,
    pub warning_reason: Option<ValidationReason>,
    /// Whether the submit button is inoperable. Set for disabled actions,
    /// error states and missing input; a warning leaves the button live.
    pub disabled_button: bool,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            disabled_reason: None,
            error_reason: None,
            warning_reason: None,
            disabled_button: false,
        }
    }

    /// Nothing entered yet: no reason to show, but nothing to submit either.
    pub fn pending_amount() -> Self {
        Self {
            disabled_button: true,
            ..Self::ok()
        }
    }

    pub fn disabled(reason: ValidationReason) -> Self {
        Self {
            disabled_reason: Some(reason),
            disabled_button: true,
            ..Self::ok()
        }
    }

    pub fn error(reason: ValidationReason) -> Self {
        Self {
            error_reason: Some(reason),
            disabled_button: true,
            ..Self::ok()
        }
    }

    pub fn warning(reason: ValidationReason) -> Self {
        Self {
            warning_reason: Some(reason),
            ..Self::ok()
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.disabled_button
    }
}

/// What actually goes into the protocol instruction. `CloseAll` is the dust
/// sentinel: "set this balance to exactly zero", used instead of a literal
/// amount so rounding residue cannot be left behind.
#[cw_serde]
#[derive(Copy, Eq)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SubmitAmount {
    Exact(TokenAmount),
    CloseAll,
}

/// Result of submission-time re-validation. A rejected plan never reaches
/// the signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPlan {
    Approved(SubmitAmount),
    Rejected(ValidationReason),
}

impl SubmissionPlan {
    pub fn is_approved(&self) -> bool {
        matches!(self, SubmissionPlan::Approved(_))
    }
}

use meridian_types::{
    amount::TokenAmount,
    trade::{TradeAction, ValidationReason, ValidationResult},
};

use crate::{error::EngineResult, trade_computer::TradeComputer};

impl TradeComputer {
    /// Classify the current input into disabled, error, warning or ok.
    /// Recomputed on every change of action, amount or snapshot; never
    /// persisted. A disabled action short-circuits all per-amount checks.
    pub fn classify_input(
        &self,
        action: TradeAction,
        amount: Option<TokenAmount>,
    ) -> EngineResult<ValidationResult> {
        self.validate()?;

        if let Some(reason) = self.disabled_reason(action) {
            return Ok(ValidationResult::disabled(reason));
        }

        let Some(amount) = amount else {
            return Ok(ValidationResult::pending_amount());
        };
        if amount.is_zero() {
            return Ok(ValidationResult::pending_amount());
        }

        let ceiling = self.max_input(action)?;
        let projected = self.project_risk(action, amount)?;

        match action {
            // Deposits only ever reduce risk; the wallet-balance check runs
            // again at submission time.
            TradeAction::Deposit => Ok(ValidationResult::ok()),
            TradeAction::Withdraw => {
                if projected >= self.thresholds.liquidation {
                    Ok(ValidationResult::error(ValidationReason::MaxRiskExceeded))
                } else if amount.gt(&ceiling)? {
                    Ok(ValidationResult::error(ValidationReason::AboveMaxWithdraw))
                } else if projected >= self.thresholds.warning {
                    Ok(ValidationResult::warning(ValidationReason::NearLiquidationRisk))
                } else {
                    Ok(ValidationResult::ok())
                }
            }
            TradeAction::Borrow => {
                if projected >= self.thresholds.liquidation {
                    Ok(ValidationResult::error(ValidationReason::MaxRiskExceeded))
                } else if amount.gt(&ceiling)? {
                    Ok(ValidationResult::error(ValidationReason::AboveMaxBorrow))
                } else if projected >= self.thresholds.warning {
                    Ok(ValidationResult::warning(ValidationReason::NearLiquidationRisk))
                } else {
                    Ok(ValidationResult::ok())
                }
            }
            TradeAction::Repay => {
                if amount.gt(&self.wallet_balance())? {
                    Ok(ValidationResult::error(ValidationReason::AboveWalletBalance))
                } else {
                    Ok(ValidationResult::ok())
                }
            }
        }
    }

    /// Why `action` is greyed out entirely, if it is. Unloaded snapshots
    /// degrade to zero balances, so the zero-balance reasons cover the
    /// not-yet-loaded case as well.
    fn disabled_reason(&self, action: TradeAction) -> Option<ValidationReason> {
        let at_liquidation = self.current_risk() >= self.thresholds.liquidation;

        match action {
            TradeAction::Deposit => {
                self.wallet_balance().is_zero().then_some(ValidationReason::NoWalletBalance)
            }
            TradeAction::Withdraw => {
                if self.deposit_balance().is_zero() {
                    Some(ValidationReason::NoDepositBalance)
                } else if at_liquidation {
                    Some(ValidationReason::AccountAtLiquidationRisk)
                } else {
                    None
                }
            }
            TradeAction::Borrow => {
                let collateral =
                    self.summary.loaded().map_or_else(Default::default, |s| s.deposited_value);
                if collateral.is_zero() {
                    Some(ValidationReason::NoCollateral)
                } else if at_liquidation {
                    Some(ValidationReason::AccountAtLiquidationRisk)
                } else if self.available_liquidity().is_zero() {
                    Some(ValidationReason::NoLiquidity)
                } else {
                    None
                }
            }
            TradeAction::Repay => {
                self.loan_balance().is_zero().then_some(ValidationReason::NoOutstandingLoan)
            }
        }
    }
}

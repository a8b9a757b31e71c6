use meridian_types::{
    amount::TokenAmount,
    trade::{SubmissionPlan, SubmitAmount, TradeAction, ValidationReason},
};

use crate::{error::EngineResult, trade_computer::TradeComputer};

impl TradeComputer {
    /// Re-validate right before the transaction is built. Async time has
    /// passed since the last keystroke classification, so every check runs
    /// again against the freshest snapshots. A rejected plan never reaches
    /// the signer; the caller surfaces the reason and leaves the input
    /// untouched.
    pub fn prepare_submission(
        &self,
        action: TradeAction,
        amount: TokenAmount,
    ) -> EngineResult<SubmissionPlan> {
        self.validate()?;

        if amount.is_zero() {
            return Ok(SubmissionPlan::Rejected(ValidationReason::EmptyAmount));
        }

        let plan = match action {
            TradeAction::Deposit => {
                if amount.gt(&self.max_input(TradeAction::Deposit)?)? {
                    SubmissionPlan::Rejected(ValidationReason::AboveMaxDeposit)
                } else {
                    SubmissionPlan::Approved(SubmitAmount::Exact(amount))
                }
            }
            TradeAction::Withdraw => {
                if amount.gt(&self.available_liquidity())? {
                    SubmissionPlan::Rejected(ValidationReason::AbovePoolLiquidity)
                } else if amount.gt(&self.max_input(TradeAction::Withdraw)?)? {
                    SubmissionPlan::Rejected(ValidationReason::AboveMaxWithdraw)
                } else if self.project_risk(action, amount)? >= self.thresholds.liquidation {
                    // Same band the keystroke classifier blocks on, so an
                    // amount blocked in the form can never slip through here.
                    SubmissionPlan::Rejected(ValidationReason::MaxRiskExceeded)
                } else if amount == self.deposit_balance() {
                    // Withdrawing the entire balance goes out as the dust
                    // sentinel so rounding residue cannot be stranded.
                    SubmissionPlan::Approved(SubmitAmount::CloseAll)
                } else {
                    SubmissionPlan::Approved(SubmitAmount::Exact(amount))
                }
            }
            TradeAction::Borrow => {
                if amount.gt(&self.available_liquidity())? {
                    SubmissionPlan::Rejected(ValidationReason::AbovePoolLiquidity)
                } else if self.current_risk() >= self.thresholds.liquidation {
                    SubmissionPlan::Rejected(ValidationReason::AccountAtLiquidationRisk)
                } else if amount.gt(&self.max_input(TradeAction::Borrow)?)? {
                    SubmissionPlan::Rejected(ValidationReason::AboveMaxBorrow)
                } else if self.project_risk(action, amount)? >= self.thresholds.liquidation {
                    // The exact ceiling pins projected risk at the
                    // liquidation level; reject it here just like the
                    // keystroke classifier does.
                    SubmissionPlan::Rejected(ValidationReason::MaxRiskExceeded)
                } else {
                    SubmissionPlan::Approved(SubmitAmount::Exact(amount))
                }
            }
            TradeAction::Repay => {
                if amount.gt(&self.loan_balance())? {
                    SubmissionPlan::Rejected(ValidationReason::AboveLoanBalance)
                } else if amount.gt(&self.wallet_balance())? {
                    SubmissionPlan::Rejected(ValidationReason::AboveWalletBalance)
                } else if amount == self.loan_balance() {
                    SubmissionPlan::Approved(SubmitAmount::CloseAll)
                } else {
                    SubmissionPlan::Approved(SubmitAmount::Exact(amount))
                }
            }
        };

        Ok(plan)
    }
}

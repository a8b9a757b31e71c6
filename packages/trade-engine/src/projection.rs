use cosmwasm_std::Decimal;
use meridian_types::{
    amount::TokenAmount,
    math::amount_value,
    risk::AccountSummary,
    trade::TradeAction,
    Loadable,
};

use crate::{error::EngineResult, trade_computer::TradeComputer};

impl TradeComputer {
    /// Risk indicator the account would have if `amount` were traded right
    /// now. The real account is never touched: the candidate amount is
    /// clamped to `[0, max_input]`, valued at the pool price, applied to a
    /// copy of the summary values, and the ratio recomputed.
    ///
    /// With pool or summary data missing the projection is a no-op: it
    /// returns the current risk indicator, or zero if that is unavailable
    /// too.
    pub fn project_risk(&self, action: TradeAction, amount: TokenAmount) -> EngineResult<Decimal> {
        let (Loadable::Loaded(pool), Loadable::Loaded(summary)) = (&self.pool, &self.summary)
        else {
            return Ok(self.current_risk());
        };

        let clamped = amount.min(self.max_input(action)?)?;
        let value = amount_value(&clamped, pool.token_price)?;
        let (deposited, borrowed) = projected_values(summary, action, value)?;
        Ok(AccountSummary::risk_ratio(deposited, borrowed)?)
    }
}

/// Post-trade (deposited, borrowed) account values. Collateral and debt
/// never project below zero; the on-chain program would clamp there anyway.
fn projected_values(
    summary: &AccountSummary,
    action: TradeAction,
    value: Decimal,
) -> EngineResult<(Decimal, Decimal)> {
    let deposited = summary.deposited_value;
    let borrowed = summary.borrowed_value;

    Ok(match action {
        TradeAction::Deposit => (deposited.checked_add(value)?, borrowed),
        TradeAction::Withdraw => (floored_sub(deposited, value), borrowed),
        TradeAction::Borrow => (deposited, borrowed.checked_add(value)?),
        TradeAction::Repay => (deposited, floored_sub(borrowed, value)),
    })
}

fn floored_sub(base: Decimal, value: Decimal) -> Decimal {
    if value >= base {
        Decimal::zero()
    } else {
        base - value
    }
}

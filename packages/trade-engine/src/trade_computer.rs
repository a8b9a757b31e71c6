use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use meridian_types::{
    amount::{TokenAmount, MAX_DECIMALS},
    error::AmountError,
    math::value_to_base_units,
    pool::{MaxTradeAmounts, PoolPosition, PoolState},
    risk::{AccountSummary, RiskThresholds},
    trade::TradeAction,
    Loadable,
};
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::error::{EngineError, EngineResult};

/// `TradeComputer` is shared with the web front end and gets compiled to
/// wasm, so it uses a dependency-injection pattern where all required data
/// is supplied up front. It never queries anything itself: the account
/// loader refreshes the snapshots, the computer only reads them.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct TradeComputer {
    pub thresholds: RiskThresholds,
    /// Reserve the wallet keeps back when depositing the chain's native
    /// asset, so the user can still pay network fees. In base units.
    pub fees_buffer: Uint128,
    pub native_denom: String,
    pub pool: Loadable<PoolState>,
    pub position: Loadable<PoolPosition>,
    pub summary: Loadable<AccountSummary>,
}

impl TradeComputer {
    /// Invariant checks for injected data: threshold ordering, and the
    /// position belonging to the tracked pool. Violations are programming
    /// errors, not user-facing states.
    pub fn validate(&self) -> EngineResult<()> {
        self.thresholds.validate()?;
        if let Some(pool) = self.pool.loaded() {
            // The pool snapshot crosses the wasm boundary untrusted; amounts
            // beyond Decimal precision cannot be priced.
            if pool.decimals > MAX_DECIMALS {
                return Err(AmountError::UnsupportedDecimals {
                    decimals: pool.decimals,
                }
                .into());
            }
        }
        if let (Loadable::Loaded(pool), Loadable::Loaded(position)) = (&self.pool, &self.position) {
            if pool.denom != position.denom {
                return Err(EngineError::AssetMismatch {
                    expected: pool.denom.clone(),
                    actual: position.denom.clone(),
                });
            }
        }
        Ok(())
    }

    /// The ceiling a user may enter for `action`. Pure function of the
    /// snapshots: missing data degrades to a zero ceiling, which the UI
    /// renders as "--" rather than an error.
    pub fn max_input(&self, action: TradeAction) -> EngineResult<TokenAmount> {
        let (Loadable::Loaded(pool), Loadable::Loaded(position)) = (&self.pool, &self.position)
        else {
            return Ok(self.zero_amount());
        };

        match action {
            TradeAction::Deposit => {
                let wallet = position.wallet_balance;
                if pool.denom == self.native_denom {
                    Ok(TokenAmount::from_base_units(
                        wallet.units.saturating_sub(self.fees_buffer),
                        wallet.decimals,
                    ))
                } else {
                    Ok(wallet)
                }
            }
            TradeAction::Withdraw => {
                Ok(position.deposit_balance.min(pool.available_liquidity)?)
            }
            TradeAction::Borrow => {
                let capacity = self.borrow_capacity(pool)?;
                Ok(capacity.min(pool.available_liquidity)?)
            }
            TradeAction::Repay => Ok(position.loan_balance.min(position.wallet_balance)?),
        }
    }

    /// Base units of the tracked asset the account can still borrow before
    /// its risk indicator reaches the liquidation level.
    fn borrow_capacity(&self, pool: &PoolState) -> EngineResult<TokenAmount> {
        let Loadable::Loaded(summary) = &self.summary else {
            return Ok(TokenAmount::zero(pool.decimals));
        };

        let limit = self.thresholds.liquidation.checked_mul(summary.deposited_value)?;
        if limit <= summary.borrowed_value {
            return Ok(TokenAmount::zero(pool.decimals));
        }
        let headroom = limit.checked_sub(summary.borrowed_value)?;
        let units = value_to_base_units(headroom, pool.token_price, pool.decimals)?;
        Ok(TokenAmount::from_base_units(units, pool.decimals))
    }

    pub fn max_trade_amounts(&self) -> EngineResult<MaxTradeAmounts> {
        Ok(MaxTradeAmounts {
            deposit: self.max_input(TradeAction::Deposit)?,
            withdraw: self.max_input(TradeAction::Withdraw)?,
            borrow: self.max_input(TradeAction::Borrow)?,
            repay: self.max_input(TradeAction::Repay)?,
        })
    }

    /// Recompute the per-action ceilings cached on the position. Call after
    /// every snapshot refresh.
    pub fn refresh_max_trade_amounts(&mut self) -> EngineResult<()> {
        let amounts = self.max_trade_amounts()?;
        if let Some(position) = self.position.loaded_mut() {
            position.max_trade_amounts = amounts;
        }
        Ok(())
    }

    pub(crate) fn zero_amount(&self) -> TokenAmount {
        TokenAmount::zero(self.decimals())
    }

    pub(crate) fn decimals(&self) -> u32 {
        self.pool.loaded().map_or(0, |pool| pool.decimals)
    }

    pub(crate) fn wallet_balance(&self) -> TokenAmount {
        self.position.loaded().map_or_else(|| self.zero_amount(), |p| p.wallet_balance)
    }

    pub(crate) fn deposit_balance(&self) -> TokenAmount {
        self.position.loaded().map_or_else(|| self.zero_amount(), |p| p.deposit_balance)
    }

    pub(crate) fn loan_balance(&self) -> TokenAmount {
        self.position.loaded().map_or_else(|| self.zero_amount(), |p| p.loan_balance)
    }

    pub(crate) fn available_liquidity(&self) -> TokenAmount {
        self.pool.loaded().map_or_else(|| self.zero_amount(), |p| p.available_liquidity)
    }

    pub(crate) fn current_risk(&self) -> Decimal {
        self.summary.loaded().map_or_else(Decimal::zero, |s| s.risk_indicator)
    }
}

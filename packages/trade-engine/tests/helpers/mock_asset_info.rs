use std::str::FromStr;

use cosmwasm_std::{Decimal, Uint128};
use meridian_trade_engine::TradeComputer;
use meridian_types::{
    amount::TokenAmount,
    pool::{MaxTradeAmounts, PoolPosition, PoolState},
    risk::{AccountSummary, RiskThresholds},
    Loadable,
};

pub const NATIVE_DENOM: &str = "usol";

/// 0.02 of the native asset, in base units
pub const FEES_BUFFER: u128 = 20_000_000;

#[derive(Clone, Debug)]
pub struct AssetInfo {
    pub denom: String,
    pub decimals: u32,
    pub price: Decimal,
}

impl AssetInfo {
    pub fn amount(&self, units: u128) -> TokenAmount {
        TokenAmount::from_base_units(units, self.decimals)
    }
}

pub fn uusdc_info() -> AssetInfo {
    AssetInfo {
        denom: "uusdc".to_string(),
        decimals: 6,
        price: Decimal::one(),
    }
}

pub fn usol_info() -> AssetInfo {
    AssetInfo {
        denom: NATIVE_DENOM.to_string(),
        decimals: 9,
        price: Decimal::from_str("150").unwrap(),
    }
}

pub fn pool_state(info: &AssetInfo, available_liquidity: u128) -> PoolState {
    PoolState {
        denom: info.denom.clone(),
        decimals: info.decimals,
        available_liquidity: info.amount(available_liquidity),
        total_borrowed: info.amount(0),
        utilization_rate: Decimal::percent(40),
        token_price: info.price,
    }
}

pub fn pool_position(info: &AssetInfo, deposit: u128, loan: u128, wallet: u128) -> PoolPosition {
    PoolPosition {
        denom: info.denom.clone(),
        deposit_balance: info.amount(deposit),
        loan_balance: info.amount(loan),
        pending_debt: info.amount(0),
        wallet_balance: info.amount(wallet),
        max_trade_amounts: MaxTradeAmounts::zero(info.decimals),
    }
}

pub fn account_summary(deposited: &str, borrowed: &str) -> AccountSummary {
    AccountSummary::from_values(
        Decimal::from_str(deposited).unwrap(),
        Decimal::from_str(borrowed).unwrap(),
    )
    .unwrap()
}

/// A computer with nothing loaded yet; tests fill in the snapshots they need.
pub fn bare_computer() -> TradeComputer {
    TradeComputer {
        thresholds: RiskThresholds::default(),
        fees_buffer: Uint128::new(FEES_BUFFER),
        native_denom: NATIVE_DENOM.to_string(),
        pool: Loadable::NotLoaded,
        position: Loadable::NotLoaded,
        summary: Loadable::NotLoaded,
    }
}

pub fn loaded_computer(
    info: &AssetInfo,
    available_liquidity: u128,
    deposit: u128,
    loan: u128,
    wallet: u128,
    summary: AccountSummary,
) -> TradeComputer {
    TradeComputer {
        pool: Loadable::Loaded(pool_state(info, available_liquidity)),
        position: Loadable::Loaded(pool_position(info, deposit, loan, wallet)),
        summary: Loadable::Loaded(summary),
        ..bare_computer()
    }
}

use cosmwasm_std::{Decimal, Uint128};
use meridian_trade_engine::TradeComputer;
use meridian_types::{
    amount::TokenAmount,
    pool::{MaxTradeAmounts, PoolPosition, PoolState},
    risk::{AccountSummary, RiskThresholds},
    Loadable,
};
use proptest::prelude::*;

use super::{FEES_BUFFER, NATIVE_DENOM};

pub fn random_denom() -> impl Strategy<Value = String> {
    (5..=20)
        .prop_flat_map(|len| proptest::string::string_regex(&format!("[a-z]{{{},}}", len)).unwrap())
}

pub fn random_price() -> impl Strategy<Value = Decimal> {
    (1..=10000, 0..4)
        .prop_map(|(price, offset)| Decimal::from_atomics(price as u128, offset as u32).unwrap())
}

fn random_units() -> impl Strategy<Value = u128> {
    0u128..=1_000_000_000_000
}

fn random_value() -> impl Strategy<Value = Decimal> {
    (0u128..=1_000_000_000, 0u32..3)
        .prop_map(|(value, offset)| Decimal::from_atomics(value, offset).unwrap())
}

/// A computer with all three snapshots loaded and internally consistent
/// decimals, the shape every per-keystroke computation sees in practice.
pub fn random_loaded_computer() -> impl Strategy<Value = TradeComputer> {
    (
        (random_denom(), 0u32..=12, random_price(), any::<bool>()),
        (random_units(), random_units(), random_units(), random_units()),
        (random_value(), random_value()),
    )
        .prop_map(
            |(
                (denom, decimals, price, native),
                (deposit, loan, wallet, liquidity),
                (deposited_value, borrowed_value),
            )| {
                let amount = |units: u128| TokenAmount::from_base_units(units, decimals);
                let native_denom = if native {
                    denom.clone()
                } else {
                    NATIVE_DENOM.to_string()
                };
                TradeComputer {
                    thresholds: RiskThresholds::default(),
                    fees_buffer: Uint128::new(FEES_BUFFER),
                    native_denom,
                    pool: Loadable::Loaded(PoolState {
                        denom: denom.clone(),
                        decimals,
                        available_liquidity: amount(liquidity),
                        total_borrowed: amount(loan),
                        utilization_rate: Decimal::percent(40),
                        token_price: price,
                    }),
                    position: Loadable::Loaded(PoolPosition {
                        denom,
                        deposit_balance: amount(deposit),
                        loan_balance: amount(loan),
                        pending_debt: amount(0),
                        wallet_balance: amount(wallet),
                        max_trade_amounts: MaxTradeAmounts::zero(decimals),
                    }),
                    summary: Loadable::Loaded(
                        AccountSummary::from_values(deposited_value, borrowed_value).unwrap(),
                    ),
                }
            },
        )
}

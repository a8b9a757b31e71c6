use std::str::FromStr;

use cosmwasm_std::Decimal;
use meridian_types::{risk::MAX_RISK_INDICATOR, trade::TradeAction, Loadable};

use crate::helpers::{account_summary, bare_computer, loaded_computer, uusdc_info};

pub mod helpers;

#[test]
fn nothing_loaded_projects_zero() {
    let c = bare_computer();
    let amount = uusdc_info().amount(100_000000);

    let projected = c.project_risk(TradeAction::Borrow, amount).unwrap();
    assert_eq!(projected, Decimal::zero());
}

#[test]
fn missing_pool_projects_current_risk() {
    let c = meridian_trade_engine::TradeComputer {
        summary: Loadable::Loaded(account_summary("100", "90")),
        ..bare_computer()
    };
    let amount = uusdc_info().amount(100_000000);

    let projected = c.project_risk(TradeAction::Borrow, amount).unwrap();
    assert_eq!(projected, Decimal::from_str("0.9").unwrap());
}

#[test]
fn borrow_raises_risk() {
    let uusdc = uusdc_info();
    let c = loaded_computer(&uusdc, 1_000_000000, 0, 0, 0, account_summary("100", "90"));

    // 20 USDC borrowed on top of 90 debt against 100 collateral
    let projected = c.project_risk(TradeAction::Borrow, uusdc.amount(20_000000)).unwrap();
    assert_eq!(projected, Decimal::from_str("1.1").unwrap());
}

#[test]
fn deposit_lowers_risk() {
    let uusdc = uusdc_info();
    let c = loaded_computer(&uusdc, 0, 0, 0, 100_000000, account_summary("100", "90"));

    let projected = c.project_risk(TradeAction::Deposit, uusdc.amount(100_000000)).unwrap();
    assert_eq!(projected, Decimal::from_str("0.45").unwrap());
}

#[test]
fn repaying_everything_projects_zero_risk() {
    let uusdc = uusdc_info();
    let c = loaded_computer(&uusdc, 0, 0, 90_000000, 90_000000, account_summary("100", "90"));

    let projected = c.project_risk(TradeAction::Repay, uusdc.amount(90_000000)).unwrap();
    assert_eq!(projected, Decimal::zero());
}

#[test]
fn withdrawing_all_collateral_with_debt_saturates() {
    let uusdc = uusdc_info();
    let c = loaded_computer(&uusdc, 1_000_000000, 100_000000, 0, 0, account_summary("100", "90"));

    let projected = c.project_risk(TradeAction::Withdraw, uusdc.amount(100_000000)).unwrap();
    assert_eq!(projected, MAX_RISK_INDICATOR);
}

#[test]
fn amount_is_clamped_to_the_ceiling() {
    let uusdc = uusdc_info();
    // borrow ceiling: 1.5 * 100 - 90 = 60 USDC
    let c = loaded_computer(&uusdc, 1_000_000000, 0, 0, 0, account_summary("100", "90"));

    let at_ceiling = c.project_risk(TradeAction::Borrow, uusdc.amount(60_000000)).unwrap();
    let beyond = c.project_risk(TradeAction::Borrow, uusdc.amount(600_000000)).unwrap();
    assert_eq!(at_ceiling, beyond);
    assert_eq!(at_ceiling, Decimal::from_str("1.5").unwrap());
}

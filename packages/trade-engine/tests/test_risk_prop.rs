use meridian_types::trade::TradeAction;

use crate::helpers::{ceiling_bounds_prop_runner, monotonic_risk_prop_runner};

pub mod helpers;

#[test]
fn borrowing_more_never_lowers_risk() {
    monotonic_risk_prop_runner(200, TradeAction::Borrow, true);
}

#[test]
fn withdrawing_more_never_lowers_risk() {
    monotonic_risk_prop_runner(200, TradeAction::Withdraw, true);
}

#[test]
fn depositing_more_never_raises_risk() {
    monotonic_risk_prop_runner(200, TradeAction::Deposit, false);
}

#[test]
fn repaying_more_never_raises_risk() {
    monotonic_risk_prop_runner(200, TradeAction::Repay, false);
}

#[test]
fn ceilings_stay_within_their_bounds() {
    ceiling_bounds_prop_runner(500);
}

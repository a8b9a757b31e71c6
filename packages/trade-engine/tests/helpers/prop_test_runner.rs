use cosmwasm_std::Decimal;
use meridian_types::{amount::TokenAmount, trade::TradeAction};
use proptest::test_runner::{Config, TestRunner};

use super::random_loaded_computer;

/// Walk the requested amount from zero to the action's ceiling and check the
/// projected risk never moves the wrong way.
pub fn monotonic_risk_prop_runner(cases: u32, action: TradeAction, non_decreasing: bool) {
    let config = Config::with_cases(cases);

    let mut runner = TestRunner::new(config);
    runner
        .run(&random_loaded_computer(), |c| {
            let ceiling = c.max_input(action).unwrap();
            let step = ceiling.units.u128() / 16 + 1;

            let mut prev: Option<Decimal> = None;
            let mut units = 0u128;
            loop {
                let amount = TokenAmount::from_base_units(units, ceiling.decimals);
                let projected = c.project_risk(action, amount).unwrap();
                if let Some(prev) = prev {
                    if non_decreasing {
                        assert!(projected >= prev);
                    } else {
                        assert!(projected <= prev);
                    }
                }
                prev = Some(projected);

                if units >= ceiling.units.u128() {
                    break;
                }
                units = (units + step).min(ceiling.units.u128());
            }
            Ok(())
        })
        .unwrap();
}

/// Every action ceiling stays within the balances that bound it.
pub fn ceiling_bounds_prop_runner(cases: u32) {
    let config = Config::with_cases(cases);

    let mut runner = TestRunner::new(config);
    runner
        .run(&random_loaded_computer(), |c| {
            let pool = c.pool.loaded().unwrap().clone();
            let position = c.position.loaded().unwrap().clone();

            let deposit_max = c.max_input(TradeAction::Deposit).unwrap();
            if pool.denom == c.native_denom {
                let expected =
                    position.wallet_balance.units.saturating_sub(c.fees_buffer);
                assert_eq!(deposit_max.units, expected);
            } else {
                assert_eq!(deposit_max, position.wallet_balance);
            }

            let withdraw_max = c.max_input(TradeAction::Withdraw).unwrap();
            assert!(withdraw_max.le(&position.deposit_balance).unwrap());
            assert!(withdraw_max.le(&pool.available_liquidity).unwrap());

            let borrow_max = c.max_input(TradeAction::Borrow).unwrap();
            assert!(borrow_max.le(&pool.available_liquidity).unwrap());

            let repay_max = c.max_input(TradeAction::Repay).unwrap();
            assert!(repay_max.le(&position.loan_balance).unwrap());
            assert!(repay_max.le(&position.wallet_balance).unwrap());

            Ok(())
        })
        .unwrap();
}

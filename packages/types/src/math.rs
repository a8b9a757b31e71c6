use cosmwasm_std::{Decimal, Uint128, Uint256};

use crate::{
    amount::{TokenAmount, MAX_DECIMALS},
    error::{AmountError, AmountResult},
};

/// Value of `amount` in the protocol's USD numeraire, at `price` per whole
/// token.
pub fn amount_value(amount: &TokenAmount, price: Decimal) -> AmountResult<Decimal> {
    let tokens = Decimal::from_atomics(amount.units, amount.decimals)?;
    Ok(tokens.checked_mul(price)?)
}

/// Convert a USD value back into base units of a token with `decimals`
/// decimal places, flooring. A zero price means no market data, so the
/// conversion degrades to zero rather than dividing by zero.
pub fn value_to_base_units(value: Decimal, price: Decimal, decimals: u32) -> AmountResult<Uint128> {
    if decimals > MAX_DECIMALS {
        return Err(AmountError::UnsupportedDecimals {
            decimals,
        });
    }
    if price.is_zero() {
        return Ok(Uint128::zero());
    }
    let tokens = value.checked_div(price)?;
    let scaled = tokens.atomics().full_mul(Uint128::new(10u128.pow(decimals)));
    let units = scaled / Uint256::from(10u128.pow(Decimal::DECIMAL_PLACES));
    Ok(units.try_into()?)
}

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::amount::TokenAmount;

/// Protocol-wide state of one margin pool, read from the chain and treated
/// as an immutable snapshot for the duration of one computation.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PoolState {
    pub denom: String,
    pub decimals: u32,
    /// Vault balance available for withdrawals and new borrows.
    pub available_liquidity: TokenAmount,
    pub total_borrowed: TokenAmount,
    pub utilization_rate: Decimal,
    /// Price of one whole token in the protocol's USD numeraire.
    pub token_price: Decimal,
}

/// One user's balances in a single pool. Owned by the account loader;
/// read-only to the engine.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PoolPosition {
    pub denom: String,
    pub deposit_balance: TokenAmount,
    pub loan_balance: TokenAmount,
    /// Debt drawn but not yet settled on chain. The account loader already
    /// counts it towards the summary's borrowed value.
    pub pending_debt: TokenAmount,
    pub wallet_balance: TokenAmount,
    /// Per-action ceilings, recomputed by the engine whenever the position
    /// or pool state changes. A cache for the UI; the engine itself always
    /// resolves ceilings from first principles.
    pub max_trade_amounts: MaxTradeAmounts,
}

/// The largest amount a user may submit for each action at one moment.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct MaxTradeAmounts {
    pub deposit: TokenAmount,
    pub withdraw: TokenAmount,
    pub borrow: TokenAmount,
    pub repay: TokenAmount,
}

impl MaxTradeAmounts {
    pub fn zero(decimals: u32) -> Self {
        Self {
            deposit: TokenAmount::zero(decimals),
            withdraw: TokenAmount::zero(decimals),
            borrow: TokenAmount::zero(decimals),
            repay: TokenAmount::zero(decimals),
        }
    }

    pub fn get(&self, action: crate::trade::TradeAction) -> TokenAmount {
        use crate::trade::TradeAction;
        match action {
            TradeAction::Deposit => self.deposit,
            TradeAction::Withdraw => self.withdraw,
            TradeAction::Borrow => self.borrow,
            TradeAction::Repay => self.repay,
        }
    }
}

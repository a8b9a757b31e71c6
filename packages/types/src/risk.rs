use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CheckedFromRatioError, Decimal};
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::error::{AmountResult, ValidationError};

/// Ceiling for the risk indicator once collateral is exhausted while debt is
/// still outstanding. Keeps the projection total and monotonic instead of
/// dividing by zero.
pub const MAX_RISK_INDICATOR: Decimal = Decimal::raw(100_000_000_000_000_000_000);

/// Aggregate account state in the USD numeraire, plus the dimensionless risk
/// indicator derived from it. Higher risk means closer to liquidation.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct AccountSummary {
    pub deposited_value: Decimal,
    pub borrowed_value: Decimal,
    pub risk_indicator: Decimal,
}

impl AccountSummary {
    pub fn from_values(deposited_value: Decimal, borrowed_value: Decimal) -> AmountResult<Self> {
        Ok(Self {
            deposited_value,
            borrowed_value,
            risk_indicator: Self::risk_ratio(deposited_value, borrowed_value)?,
        })
    }

    /// The canonical risk ratio: borrowed value over deposited value. Zero
    /// when debt-free, saturating at [`MAX_RISK_INDICATOR`] when collateral
    /// is gone.
    pub fn risk_ratio(deposited_value: Decimal, borrowed_value: Decimal) -> AmountResult<Decimal> {
        if borrowed_value.is_zero() {
            return Ok(Decimal::zero());
        }
        if deposited_value.is_zero() {
            return Ok(MAX_RISK_INDICATOR);
        }
        match Decimal::checked_from_ratio(borrowed_value.atomics(), deposited_value.atomics()) {
            Ok(ratio) => Ok(ratio.min(MAX_RISK_INDICATOR)),
            // A ratio too large for Decimal is as liquidatable as it gets
            Err(CheckedFromRatioError::Overflow) => Ok(MAX_RISK_INDICATOR),
            Err(err) => Err(err.into()),
        }
    }
}

/// The three thresholds partitioning the risk domain. Injected configuration;
/// the invariant `warning < critical <= liquidation` is enforced by
/// [`RiskThresholds::validate`].
#[cw_serde]
#[derive(Copy, Eq)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct RiskThresholds {
    pub warning: Decimal,
    pub critical: Decimal,
    pub liquidation: Decimal,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            warning: Decimal::one(),
            liquidation: Decimal::percent(150),
            critical: Decimal::percent(125),
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.warning >= self.critical || self.critical > self.liquidation {
            return Err(ValidationError::InvalidParam {
                param_name: "risk_thresholds".to_string(),
                invalid_value: format!(
                    "{}/{}/{}",
                    self.warning, self.critical, self.liquidation
                ),
                predicate: "warning < critical <= liquidation".to_string(),
            });
        }
        Ok(())
    }

    pub fn standing(&self, risk_indicator: Decimal) -> RiskStanding {
        if risk_indicator >= self.liquidation {
            RiskStanding::Liquidatable
        } else if risk_indicator >= self.critical {
            RiskStanding::Critical
        } else if risk_indicator >= self.warning {
            RiskStanding::Moderate
        } else {
            RiskStanding::Good
        }
    }
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum RiskStanding {
    Good,
    Moderate,
    Critical,
    Liquidatable,
}

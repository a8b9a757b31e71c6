use std::{cmp::Ordering, fmt};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{DivideByZeroError, Uint128, Uint256};
#[cfg(feature = "javascript")]
use tsify::Tsify;

use crate::error::{AmountError, AmountResult};

/// `Decimal` carries 18 fractional digits, so token amounts above that
/// precision cannot be priced.
pub const MAX_DECIMALS: u32 = 18;

/// A quantity of one token, held as an integer count of the token's smallest
/// indivisible unit. All arithmetic is defined only between amounts of the
/// same token, i.e. the same number of decimal places; mixing scales is a
/// programming error and fails with [`AmountError::DecimalMismatch`].
#[cw_serde]
#[derive(Copy, Eq)]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub struct TokenAmount {
    pub units: Uint128,
    pub decimals: u32,
}

impl TokenAmount {
    pub const fn zero(decimals: u32) -> Self {
        Self {
            units: Uint128::zero(),
            decimals,
        }
    }

    pub fn from_base_units(units: impl Into<Uint128>, decimals: u32) -> Self {
        Self {
            units: units.into(),
            decimals,
        }
    }

    /// Parse a human decimal string into base units, shifting the decimal
    /// point by `decimals` places. Accepts thousands separators (`,` and `_`)
    /// and exponential notation. Fractional digits beyond `decimals` are
    /// rounded half-up. Negative input is rejected.
    pub fn from_decimal_str(input: &str, decimals: u32) -> AmountResult<Self> {
        if decimals > MAX_DECIMALS {
            return Err(AmountError::UnsupportedDecimals {
                decimals,
            });
        }

        let invalid = || AmountError::InvalidInput {
            input: input.to_string(),
        };
        let too_large = || AmountError::AmountTooLarge {
            input: input.to_string(),
            decimals,
        };

        let cleaned: String = input.trim().chars().filter(|c| !matches!(c, ',' | '_')).collect();
        let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
        if cleaned.is_empty() || cleaned.starts_with('-') {
            return Err(invalid());
        }

        let (mantissa, exponent) = match cleaned.split_once(['e', 'E']) {
            Some((m, e)) => (m, e.parse::<i64>().map_err(|_| invalid())?),
            None => (cleaned, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        if digits.bytes().all(|b| b == b'0') {
            return Ok(Self::zero(decimals));
        }

        // Index into `digits` of the last digit that still counts towards the
        // base-unit integer, i.e. the decimal point shifted by `decimals`.
        // Checked arithmetic: a typed-in exponent can sit anywhere in i64.
        let keep = (int_part.len() as i64)
            .checked_add(exponent)
            .and_then(|k| k.checked_add(decimals as i64))
            .ok_or_else(too_large)?;
        if keep > 77 {
            return Err(too_large());
        }

        let mut units = if keep <= 0 {
            0u128
        } else {
            let keep = keep as usize;
            let kept = if keep >= digits.len() {
                format!("{digits}{}", "0".repeat(keep - digits.len()))
            } else {
                digits[..keep].to_string()
            };
            let kept = kept.trim_start_matches('0');
            if kept.is_empty() {
                0
            } else {
                kept.parse::<u128>().map_err(|_| too_large())?
            }
        };

        // Half-up rounding on the first dropped digit.
        if keep >= 0 && (keep as usize) < digits.len() && digits.as_bytes()[keep as usize] >= b'5' {
            units = units.checked_add(1).ok_or_else(too_large)?;
        }

        Ok(Self {
            units: Uint128::new(units),
            decimals,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    /// Render for a token balance: trailing zeros trimmed, integer part
    /// grouped by thousands.
    pub fn to_decimal_string(&self) -> String {
        let raw = self.units.u128().to_string();
        let d = self.decimals as usize;
        let (int_part, frac_part) = if d == 0 {
            (raw.clone(), String::new())
        } else if raw.len() > d {
            let (i, f) = raw.split_at(raw.len() - d);
            (i.to_string(), f.to_string())
        } else {
            ("0".to_string(), format!("{}{raw}", "0".repeat(d - raw.len())))
        };

        let frac = frac_part.trim_end_matches('0');
        if frac.is_empty() {
            group_thousands(&int_part)
        } else {
            format!("{}.{frac}", group_thousands(&int_part))
        }
    }

    /// Render for a fiat value: grouped, always exactly two fractional
    /// digits, rounded half-up.
    pub fn to_fiat_string(&self) -> String {
        let scale = Uint256::from(10u128.pow(self.decimals));
        let half = Uint256::from(10u128.pow(self.decimals) / 2);
        let cents = (self.units.full_mul(Uint128::new(100)) + half) / scale;
        let cents = cents.to_string();
        let (int_part, frac_part) = if cents.len() > 2 {
            let (i, f) = cents.split_at(cents.len() - 2);
            (i.to_string(), f.to_string())
        } else {
            ("0".to_string(), format!("{:0>2}", cents))
        };
        format!("{}.{frac_part}", group_thousands(&int_part))
    }

    /// Lossy conversion for display purposes only; never feed this back into
    /// arithmetic.
    pub fn to_f64(&self) -> f64 {
        self.units.u128() as f64 / 10f64.powi(self.decimals as i32)
    }

    pub fn checked_add(self, other: Self) -> AmountResult<Self> {
        self.ensure_same_decimals(other)?;
        Ok(Self {
            units: self.units.checked_add(other.units)?,
            decimals: self.decimals,
        })
    }

    pub fn checked_sub(self, other: Self) -> AmountResult<Self> {
        self.ensure_same_decimals(other)?;
        Ok(Self {
            units: self.units.checked_sub(other.units)?,
            decimals: self.decimals,
        })
    }

    /// Fixed-point multiply: `(a * b) / 10^decimals`, flooring.
    pub fn checked_mul(self, other: Self) -> AmountResult<Self> {
        self.ensure_same_decimals(other)?;
        let scaled = self.units.full_mul(other.units) / Uint256::from(10u128.pow(self.decimals));
        Ok(Self {
            units: scaled.try_into()?,
            decimals: self.decimals,
        })
    }

    /// Fixed-point divide: `(a * 10^decimals) / b`, flooring.
    pub fn checked_div(self, other: Self) -> AmountResult<Self> {
        self.ensure_same_decimals(other)?;
        if other.units.is_zero() {
            return Err(DivideByZeroError::new(self.units).into());
        }
        let scaled =
            self.units.full_mul(Uint128::new(10u128.pow(self.decimals))) / Uint256::from(other.units);
        Ok(Self {
            units: scaled.try_into()?,
            decimals: self.decimals,
        })
    }

    pub fn min(self, other: Self) -> AmountResult<Self> {
        self.ensure_same_decimals(other)?;
        Ok(if self.units <= other.units {
            self
        } else {
            other
        })
    }

    pub fn max(self, other: Self) -> AmountResult<Self> {
        self.ensure_same_decimals(other)?;
        Ok(if self.units >= other.units {
            self
        } else {
            other
        })
    }

    pub fn lt(&self, other: &Self) -> AmountResult<bool> {
        self.ensure_same_decimals(*other)?;
        Ok(self.units < other.units)
    }

    pub fn le(&self, other: &Self) -> AmountResult<bool> {
        self.ensure_same_decimals(*other)?;
        Ok(self.units <= other.units)
    }

    pub fn gt(&self, other: &Self) -> AmountResult<bool> {
        self.ensure_same_decimals(*other)?;
        Ok(self.units > other.units)
    }

    pub fn ge(&self, other: &Self) -> AmountResult<bool> {
        self.ensure_same_decimals(*other)?;
        Ok(self.units >= other.units)
    }

    fn ensure_same_decimals(&self, other: Self) -> AmountResult<()> {
        if self.decimals == other.decimals {
            Ok(())
        } else {
            Err(AmountError::DecimalMismatch {
                left: self.decimals,
                right: other.decimals,
            })
        }
    }
}

impl PartialOrd for TokenAmount {
    /// Amounts of different tokens are not comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.decimals == other.decimals).then(|| self.units.cmp(&other.units))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

//! Fixed-point decimal type used for rates and provisions.
//!
//! Values are stored as integers (u128) scaled by 10^18 to avoid floating-point
//! errors, and travel as decimal strings (`"0.130000000000000000"`).

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by [`Dec`].
pub const DEC_PRECISION: u32 = 18;

/// 10^18, the raw representation of `1.0`.
pub const DEC_ONE: u128 = 1_000_000_000_000_000_000;

/// A non-negative 18-decimal fixed-point number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(u128);

impl Dec {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(DEC_ONE);

    /// Build from raw units (value × 10^18).
    pub fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Build from a whole number.
    pub fn from_int(value: u64) -> Self {
        Self(value as u128 * DEC_ONE)
    }

    /// Build from `numerator / 10^decimals`, e.g. `Dec::with_prec(13, 2)` is `0.13`.
    pub fn with_prec(numerator: u64, decimals: u32) -> Self {
        let decimals = decimals.min(DEC_PRECISION);
        Self(numerator as u128 * 10u128.pow(DEC_PRECISION - decimals))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / DEC_ONE, self.0 % DEC_ONE)
    }
}

impl FromStr for Dec {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(TypesError::InvalidDecimal(s.to_string()));
        }
        if frac_part.len() > DEC_PRECISION as usize {
            return Err(TypesError::InvalidDecimal(format!(
                "{s}: more than {DEC_PRECISION} fractional digits"
            )));
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(TypesError::InvalidDecimal(s.to_string()));
        }

        let int: u128 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| TypesError::DecimalOverflow(s.to_string()))?
        };
        let frac: u128 = if frac_part.is_empty() {
            0
        } else {
            let scale = 10u128.pow(DEC_PRECISION - frac_part.len() as u32);
            frac_part
                .parse::<u128>()
                .map_err(|_| TypesError::InvalidDecimal(s.to_string()))?
                * scale
        };

        int.checked_mul(DEC_ONE)
            .and_then(|v| v.checked_add(frac))
            .map(Self)
            .ok_or_else(|| TypesError::DecimalOverflow(s.to_string()))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

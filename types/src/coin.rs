//! Token amounts tagged with a denomination.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of a single denomination, in base units.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// A denomination must be 3-128 characters, start with a letter, and
    /// contain only alphanumerics or `/:._-`.
    pub fn validate(&self) -> Result<(), TypesError> {
        let denom = self.denom.as_bytes();
        let valid_len = (3..=128).contains(&denom.len());
        let starts_alpha = denom.first().is_some_and(|b| b.is_ascii_alphabetic());
        let valid_chars = denom
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || b"/:._-".contains(b));
        if valid_len && starts_alpha && valid_chars {
            Ok(())
        } else {
            Err(TypesError::InvalidCoin(format!("invalid denom: {}", self.denom)))
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_amount_then_denom() {
        assert_eq!(Coin::new("ppica", 1_000).to_string(), "1000ppica");
    }

    #[test]
    fn validates_denominations() {
        assert!(Coin::new("ppica", 1).validate().is_ok());
        assert!(Coin::new("ibc/27394FB092D2ECCD", 1).validate().is_ok());
        assert!(Coin::new("ab", 1).validate().is_err());
        assert!(Coin::new("1abc", 1).validate().is_err());
        assert!(Coin::new("abc def", 1).validate().is_err());
    }
}

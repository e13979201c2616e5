//! Mint module records.

use crate::error::MintError;
use centauri_types::Dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current inflation state of the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minter {
    /// Current annual inflation rate.
    pub inflation: Dec,
    /// Current annual expected provisions.
    pub annual_provisions: Dec,
}

impl Minter {
    pub fn new(inflation: Dec, annual_provisions: Dec) -> Self {
        Self {
            inflation,
            annual_provisions,
        }
    }

    /// Genesis minter: 13% inflation, no provisions yet.
    pub fn initial() -> Self {
        Self::new(Dec::with_prec(13, 2), Dec::ZERO)
    }

    pub fn validate(&self) -> Result<(), MintError> {
        if self.inflation > Dec::ONE {
            return Err(MintError::InvalidMinter(format!(
                "mint parameter Inflation should be <= 1, is {}",
                self.inflation
            )));
        }
        Ok(())
    }
}

impl Default for Minter {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Minter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inflation:{} annual_provisions:{}",
            self.inflation, self.annual_provisions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflation_above_one_is_invalid() {
        assert!(Minter::initial().validate().is_ok());
        assert!(matches!(
            Minter::new(Dec::from_int(2), Dec::ZERO).validate(),
            Err(MintError::InvalidMinter(_))
        ));
    }
}

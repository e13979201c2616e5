//! Error type for parsing and validating fundamental types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("decimal out of range: {0}")]
    DecimalOverflow(String),

    #[error("invalid coin: {0}")]
    InvalidCoin(String),
}

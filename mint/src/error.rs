use centauri_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MintError {
    #[error("minter not set")]
    MinterNotFound,

    #[error("invalid minter: {0}")]
    InvalidMinter(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("codec error: {0}")]
    Codec(String),
}

/// Errors of the simulation store decoder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty mint store key")]
    EmptyKey,

    #[error("invalid mint key prefix {0:02X}")]
    UnknownPrefix(u8),

    #[error("cannot decode {record}: {reason}")]
    Codec {
        record: &'static str,
        reason: String,
    },
}

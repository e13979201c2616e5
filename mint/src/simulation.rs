//! Store decoder for simulation runs.
//!
//! When two simulated runs disagree, the harness hands the decoder the
//! diverging raw entries of the mint store and prints the decoded records.

use crate::error::DecodeError;
use crate::keys::MINTER_KEY;
use crate::types::Minter;
use centauri_store::KvPair;
use serde::de::DeserializeOwned;

/// Decode two mint store entries into a human-readable comparison.
///
/// The record type is chosen by the first byte of `kv_a`'s key; only the
/// minter record is known. Any other prefix is an error.
pub fn decode_store(kv_a: &KvPair, kv_b: &KvPair) -> Result<String, DecodeError> {
    let prefix = kv_a.prefix().ok_or(DecodeError::EmptyKey)?;
    tracing::debug!(prefix, "decoding mint store entry");
    match prefix {
        MINTER_KEY => {
            let minter_a: Minter = decode("minter", &kv_a.value)?;
            let minter_b: Minter = decode("minter", &kv_b.value)?;
            Ok(format!("{minter_a}\n{minter_b}"))
        }
        other => Err(DecodeError::UnknownPrefix(other)),
    }
}

/// [`decode_store`] as a value, for harnesses that keep one decoder per module.
pub fn new_decode_store() -> impl Fn(&KvPair, &KvPair) -> Result<String, DecodeError> {
    decode_store
}

fn decode<T: DeserializeOwned>(record: &'static str, raw: &[u8]) -> Result<T, DecodeError> {
    bincode::deserialize(raw).map_err(|e| DecodeError::Codec {
        record,
        reason: e.to_string(),
    })
}

//! Store key layout of the staking module.
//!
//! Since consensus version 2 every address inside a key is length-prefixed
//! with a single byte. Version 1 stored fixed 20-byte addresses.

use crate::error::StakingError;

pub const VALIDATORS_KEY: u8 = 0x21;
pub const DELEGATION_KEY: u8 = 0x31;
pub const UNBONDING_DELEGATION_KEY: u8 = 0x32;
pub const PARAMS_KEY: u8 = 0x51;
pub const PENDING_DELEGATION_KEY: u8 = 0xA1;

/// Address length used by version-1 keys.
pub const LEGACY_ADDR_LEN: usize = 20;

/// Prefixes whose keys embed addresses, with the number of addresses each holds.
pub const ADDRESS_KEYED_PREFIXES: &[(u8, usize)] = &[
    (VALIDATORS_KEY, 1),
    (DELEGATION_KEY, 2),
    (UNBONDING_DELEGATION_KEY, 2),
];

/// `len(addr) || addr`.
pub fn length_prefixed(addr: &[u8]) -> Result<Vec<u8>, StakingError> {
    let len = u8::try_from(addr.len())
        .map_err(|_| StakingError::InvalidAddress(String::from_utf8_lossy(addr).into_owned()))?;
    if len == 0 {
        return Err(StakingError::InvalidAddress(String::new()));
    }
    let mut out = Vec::with_capacity(addr.len() + 1);
    out.push(len);
    out.extend_from_slice(addr);
    Ok(out)
}

pub fn validator_key(operator: &str) -> Result<Vec<u8>, StakingError> {
    let mut key = vec![VALIDATORS_KEY];
    key.extend(length_prefixed(operator.as_bytes())?);
    Ok(key)
}

pub fn delegation_key(delegator: &str, validator: &str) -> Result<Vec<u8>, StakingError> {
    pair_key(DELEGATION_KEY, delegator, validator)
}

pub fn unbonding_delegation_key(delegator: &str, validator: &str) -> Result<Vec<u8>, StakingError> {
    pair_key(UNBONDING_DELEGATION_KEY, delegator, validator)
}

fn pair_key(prefix: u8, a: &str, b: &str) -> Result<Vec<u8>, StakingError> {
    let mut key = vec![prefix];
    key.extend(length_prefixed(a.as_bytes())?);
    key.extend(length_prefixed(b.as_bytes())?);
    Ok(key)
}

pub fn pending_delegation_key(seq: u64) -> Vec<u8> {
    let mut key = vec![PENDING_DELEGATION_KEY];
    key.extend_from_slice(&seq.to_be_bytes());
    key
}

/// Rewrite a version-1 key (`prefix || addr20 * count`) into the
/// length-prefixed layout.
pub fn migrate_legacy_key(key: &[u8], address_count: usize) -> Result<Vec<u8>, StakingError> {
    let (prefix, rest) = key.split_first().ok_or_else(|| StakingError::CorruptKey {
        key: String::new(),
        reason: "empty key".into(),
    })?;
    if rest.len() != address_count * LEGACY_ADDR_LEN {
        return Err(StakingError::CorruptKey {
            key: hex::encode(key),
            reason: format!(
                "expected {} address bytes, found {}",
                address_count * LEGACY_ADDR_LEN,
                rest.len()
            ),
        });
    }
    let mut out = vec![*prefix];
    for addr in rest.chunks(LEGACY_ADDR_LEN) {
        out.extend(length_prefixed(addr)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegation_key_length_prefixes_both_addresses() {
        let key = delegation_key("ab", "xyz").unwrap();
        assert_eq!(key, vec![DELEGATION_KEY, 2, b'a', b'b', 3, b'x', b'y', b'z']);
    }

    #[test]
    fn empty_address_is_rejected() {
        assert!(validator_key("").is_err());
    }

    #[test]
    fn legacy_key_migrates_to_length_prefixed() {
        let mut legacy = vec![DELEGATION_KEY];
        legacy.extend([1u8; 20]);
        legacy.extend([2u8; 20]);
        let migrated = migrate_legacy_key(&legacy, 2).unwrap();
        assert_eq!(migrated.len(), 1 + 21 + 21);
        assert_eq!(migrated[1], 20);
        assert_eq!(migrated[22], 20);
        assert_eq!(&migrated[23..], &[2u8; 20]);
    }

    #[test]
    fn legacy_key_with_wrong_length_is_corrupt() {
        let legacy = vec![VALIDATORS_KEY, 1, 2, 0xab];
        match migrate_legacy_key(&legacy, 1) {
            Err(StakingError::CorruptKey { key, .. }) => assert_eq!(key, "210102ab"),
            other => panic!("expected corrupt key, got {other:?}"),
        }
    }

    #[test]
    fn pending_keys_sort_by_sequence() {
        assert!(pending_delegation_key(1) < pending_delegation_key(2));
        assert!(pending_delegation_key(255) < pending_delegation_key(256));
    }
}

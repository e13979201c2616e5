use proptest::prelude::*;

use centauri_mint::{decode_store, DecodeError, Minter};
use centauri_store::KvPair;
use centauri_types::Dec;

fn minter_entry(inflation: u128, provisions: u128) -> (Minter, KvPair) {
    let minter = Minter::new(Dec::from_raw(inflation), Dec::from_raw(provisions));
    let pair = KvPair::new(vec![0x00], bincode::serialize(&minter).unwrap());
    (minter, pair)
}

proptest! {
    /// Every prefix other than the minter key is rejected, whatever the value.
    #[test]
    fn non_minter_prefixes_are_rejected(
        prefix in 1u8..=255,
        rest in prop::collection::vec(any::<u8>(), 0..8),
        value in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut key = vec![prefix];
        key.extend(rest);
        let pair = KvPair::new(key, value);
        prop_assert_eq!(decode_store(&pair, &pair), Err(DecodeError::UnknownPrefix(prefix)));
    }

    /// Minter entries decode to one line per side, in argument order.
    #[test]
    fn minter_entries_decode_in_order(
        a in (0u128..u64::MAX as u128, 0u128..u64::MAX as u128),
        b in (0u128..u64::MAX as u128, 0u128..u64::MAX as u128),
    ) {
        let (minter_a, pair_a) = minter_entry(a.0, a.1);
        let (minter_b, pair_b) = minter_entry(b.0, b.1);
        let out = decode_store(&pair_a, &pair_b).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        prop_assert_eq!(lines.len(), 2);
        prop_assert_eq!(lines[0], minter_a.to_string());
        prop_assert_eq!(lines[1], minter_b.to_string());
    }
}

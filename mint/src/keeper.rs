//! Mint state access.

use crate::error::MintError;
use crate::keys::MINTER_KEY;
use crate::types::Minter;
use centauri_store::KvStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct MintKeeper {
    store: Arc<dyn KvStore>,
}

impl MintKeeper {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn minter(&self) -> Result<Minter, MintError> {
        let raw = self
            .store
            .get(&[MINTER_KEY])?
            .ok_or(MintError::MinterNotFound)?;
        bincode::deserialize(&raw).map_err(|e| MintError::Codec(e.to_string()))
    }

    pub fn set_minter(&self, minter: &Minter) -> Result<(), MintError> {
        minter.validate()?;
        let raw = bincode::serialize(minter).map_err(|e| MintError::Codec(e.to_string()))?;
        self.store.set(&[MINTER_KEY], &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centauri_nullables::NullStore;
    use centauri_types::Dec;

    #[test]
    fn minter_must_be_set_before_reading() {
        let keeper = MintKeeper::new(Arc::new(NullStore::new()));
        assert!(matches!(keeper.minter(), Err(MintError::MinterNotFound)));
        keeper.set_minter(&Minter::initial()).unwrap();
        assert_eq!(keeper.minter().unwrap(), Minter::initial());
    }

    #[test]
    fn rejects_inflation_above_one() {
        let keeper = MintKeeper::new(Arc::new(NullStore::new()));
        let minter = Minter::new(Dec::from_int(2), Dec::ZERO);
        assert!(matches!(
            keeper.set_minter(&minter),
            Err(MintError::InvalidMinter(_))
        ));
    }
}

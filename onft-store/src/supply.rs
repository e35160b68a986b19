use crate::batch::StoreBatch;
use crate::codec;
use crate::keys;
use crate::kv::KvRead;
use onft_core::error::StorageError;

/// Read access to per-denom supply counters.
pub trait SupplyStore: KvRead {
    /// Number of live oNFTs in a denom. Absent counter means zero.
    fn get_supply(&self, denom_id: &str) -> Result<u64, StorageError> {
        match self.get(&keys::supply_key(denom_id))? {
            Some(bytes) => codec::decode(&bytes),
            None => Ok(0),
        }
    }
}

impl<T: KvRead + ?Sized> SupplyStore for T {}

impl StoreBatch<'_> {
    /// Bump a denom's supply counter by one.
    pub fn increase_supply(&mut self, denom_id: &str) -> Result<(), StorageError> {
        let supply = self.get_supply(denom_id)?.saturating_add(1);
        self.set(keys::supply_key(denom_id), codec::encode(&supply)?);
        Ok(())
    }

    /// Drop a denom's supply counter by one, removing the counter key
    /// entirely when it reaches zero.
    pub fn decrease_supply(&mut self, denom_id: &str) -> Result<(), StorageError> {
        let supply = self.get_supply(denom_id)?.saturating_sub(1);
        if supply == 0 {
            self.delete(&keys::supply_key(denom_id));
        } else {
            self.set(keys::supply_key(denom_id), codec::encode(&supply)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;

    #[test]
    fn test_supply_counts_up_and_down() {
        let mut store = MemoryKvStore::new();
        assert_eq!(store.get_supply("gallery").unwrap(), 0);

        let mut batch = StoreBatch::new(&mut store);
        batch.increase_supply("gallery").unwrap();
        batch.increase_supply("gallery").unwrap();
        batch.commit().unwrap();
        assert_eq!(store.get_supply("gallery").unwrap(), 2);

        let mut batch = StoreBatch::new(&mut store);
        batch.decrease_supply("gallery").unwrap();
        batch.commit().unwrap();
        assert_eq!(store.get_supply("gallery").unwrap(), 1);
    }

    #[test]
    fn test_counter_key_is_removed_at_zero() {
        let mut store = MemoryKvStore::new();
        let mut batch = StoreBatch::new(&mut store);
        batch.increase_supply("gallery").unwrap();
        batch.decrease_supply("gallery").unwrap();
        batch.commit().unwrap();

        assert_eq!(store.get_supply("gallery").unwrap(), 0);
        assert_eq!(store.get(&keys::supply_key("gallery")).unwrap(), None);
    }

    #[test]
    fn test_counters_are_per_denom() {
        let mut store = MemoryKvStore::new();
        let mut batch = StoreBatch::new(&mut store);
        batch.increase_supply("gallery").unwrap();
        batch.increase_supply("zoo").unwrap();
        batch.increase_supply("zoo").unwrap();
        batch.commit().unwrap();

        assert_eq!(store.get_supply("gallery").unwrap(), 1);
        assert_eq!(store.get_supply("zoo").unwrap(), 2);
    }
}

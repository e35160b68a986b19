use crate::batch::StoreBatch;
use crate::codec;
use crate::keys;
use crate::kv::KvRead;
use onft_core::error::{RegistryError, StorageError};
use onft_core::Onft;

/// Read access to oNFT records. Implemented for every `KvRead`.
pub trait OnftStore: KvRead {
    /// Get an oNFT record by denom and ID
    fn get_onft(&self, denom_id: &str, onft_id: &str) -> Result<Option<Onft>, StorageError> {
        match self.get(&keys::onft_key(denom_id, onft_id))? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn has_onft(&self, denom_id: &str, onft_id: &str) -> Result<bool, StorageError> {
        Ok(self.get(&keys::onft_key(denom_id, onft_id))?.is_some())
    }

    /// Iterate all oNFTs of a denom in ID order
    fn iter_onfts(
        &self,
        denom_id: &str,
    ) -> Box<dyn Iterator<Item = Result<Onft, StorageError>> + '_> {
        Box::new(
            self.scan_prefix(&keys::onft_prefix(denom_id))
                .map(|entry| entry.and_then(|(_, v)| codec::decode(&v))),
        )
    }
}

impl<T: KvRead + ?Sized> OnftStore for T {}

impl StoreBatch<'_> {
    /// Write a freshly minted oNFT, enforcing per-denom ID uniqueness.
    pub fn save_onft(&mut self, denom_id: &str, onft: &Onft) -> Result<(), RegistryError> {
        if self.has_onft(denom_id, &onft.id)? {
            return Err(RegistryError::OnftAlreadyExists {
                denom_id: denom_id.to_string(),
                onft_id: onft.id.clone(),
            });
        }
        self.set(keys::onft_key(denom_id, &onft.id), codec::encode(onft)?);
        Ok(())
    }

    /// Overwrite an existing oNFT record (edit or owner change).
    pub fn update_onft(&mut self, denom_id: &str, onft: &Onft) -> Result<(), RegistryError> {
        self.set(keys::onft_key(denom_id, &onft.id), codec::encode(onft)?);
        Ok(())
    }

    /// Remove an oNFT record.
    pub fn remove_onft(&mut self, denom_id: &str, onft_id: &str) {
        self.delete(&keys::onft_key(denom_id, onft_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;
    use chrono::{TimeZone, Utc};
    use onft_core::{Address, Metadata, RoyaltyShare};

    fn onft(id: &str) -> Onft {
        Onft::new(
            id,
            Metadata::new("Art", "", "ipfs://media", ""),
            "{}",
            Address::new("addrb").unwrap(),
            true,
            true,
            false,
            RoyaltyShare::zero(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_save_get_remove_onft() {
        let mut store = MemoryKvStore::new();
        let mut batch = StoreBatch::new(&mut store);
        batch.save_onft("gallery", &onft("art001")).unwrap();
        batch.commit().unwrap();

        assert!(store.has_onft("gallery", "art001").unwrap());
        let loaded = store.get_onft("gallery", "art001").unwrap().unwrap();
        assert_eq!(loaded.id, "art001");
        // same ID in another denom is a different slot
        assert!(!store.has_onft("gallerytwo", "art001").unwrap());

        let mut batch = StoreBatch::new(&mut store);
        batch.remove_onft("gallery", "art001");
        batch.commit().unwrap();
        assert!(store.get_onft("gallery", "art001").unwrap().is_none());
    }

    #[test]
    fn test_save_onft_rejects_duplicate_slot() {
        let mut store = MemoryKvStore::new();
        let mut batch = StoreBatch::new(&mut store);
        batch.save_onft("gallery", &onft("art001")).unwrap();
        assert!(matches!(
            batch.save_onft("gallery", &onft("art001")),
            Err(RegistryError::OnftAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_iter_onfts_is_id_ordered_per_denom() {
        let mut store = MemoryKvStore::new();
        let mut batch = StoreBatch::new(&mut store);
        batch.save_onft("gallery", &onft("art002")).unwrap();
        batch.save_onft("gallery", &onft("art001")).unwrap();
        batch.save_onft("gallerytwo", &onft("zzz999")).unwrap();
        batch.commit().unwrap();

        let ids: Vec<String> = store
            .iter_onfts("gallery")
            .map(|o| o.unwrap().id)
            .collect();
        assert_eq!(ids, vec!["art001".to_string(), "art002".to_string()]);
    }
}

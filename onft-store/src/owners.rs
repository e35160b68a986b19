use crate::batch::StoreBatch;
use crate::keys;
use crate::kv::KvRead;
use onft_core::error::StorageError;
use onft_core::Address;

/// Read access to the ownership index.
///
/// The index is derived state: it has no authority of its own and
/// performs no cross-checks against the primary store. The registry
/// keeps it consistent by pairing every index call with the matching
/// primary-store mutation inside one batch.
pub trait OwnerIndex: KvRead {
    /// Iterate the (denomId, onftId) pairs held by an owner, optionally
    /// narrowed to one denom, in key-sort order
    fn iter_owned(
        &self,
        owner: &Address,
        denom_id: Option<&str>,
    ) -> Box<dyn Iterator<Item = Result<(String, String), StorageError>> + '_> {
        let prefix = keys::owner_prefix(owner.as_str(), denom_id);
        Box::new(self.scan_prefix(&prefix).map(|entry| {
            entry.and_then(|(key, _)| {
                let (_, denom_id, onft_id) = keys::split_owner_key(&key)?;
                Ok((denom_id, onft_id))
            })
        }))
    }

    /// Number of oNFTs an owner holds in one denom
    fn owned_count(&self, owner: &Address, denom_id: &str) -> Result<u64, StorageError> {
        let mut count = 0u64;
        for entry in self.scan_prefix(&keys::owner_prefix(owner.as_str(), Some(denom_id))) {
            entry?;
            count += 1;
        }
        Ok(count)
    }

    /// Whether the index holds an entry for this exact (owner, denom, id)
    fn is_indexed_owner(
        &self,
        owner: &Address,
        denom_id: &str,
        onft_id: &str,
    ) -> Result<bool, StorageError> {
        Ok(self
            .get(&keys::owner_key(owner.as_str(), denom_id, onft_id))?
            .is_some())
    }
}

impl<T: KvRead + ?Sized> OwnerIndex for T {}

impl StoreBatch<'_> {
    /// Record that `owner` holds `(denom_id, onft_id)`.
    pub fn index_owner(&mut self, owner: &Address, denom_id: &str, onft_id: &str) {
        self.set(
            keys::owner_key(owner.as_str(), denom_id, onft_id),
            Vec::new(),
        );
    }

    /// Remove the index entry for `(owner, denom_id, onft_id)`.
    pub fn unindex_owner(&mut self, owner: &Address, denom_id: &str, onft_id: &str) {
        self.delete(&keys::owner_key(owner.as_str(), denom_id, onft_id));
    }

    /// Move an index entry from one owner to another. Staged as one
    /// remove+add pair in the same batch, so no committed state can ever
    /// show the entry under neither or both owners.
    pub fn swap_owner(
        &mut self,
        denom_id: &str,
        onft_id: &str,
        old_owner: &Address,
        new_owner: &Address,
    ) {
        self.unindex_owner(old_owner, denom_id, onft_id);
        self.index_owner(new_owner, denom_id, onft_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_index_and_list_by_owner() {
        let mut store = MemoryKvStore::new();
        let owner = addr("addrb");

        let mut batch = StoreBatch::new(&mut store);
        batch.index_owner(&owner, "gallery", "art002");
        batch.index_owner(&owner, "gallery", "art001");
        batch.index_owner(&owner, "zoo", "ape001");
        batch.commit().unwrap();

        let all: Vec<(String, String)> = store
            .iter_owned(&owner, None)
            .map(|e| e.unwrap())
            .collect();
        assert_eq!(
            all,
            vec![
                ("gallery".to_string(), "art001".to_string()),
                ("gallery".to_string(), "art002".to_string()),
                ("zoo".to_string(), "ape001".to_string()),
            ]
        );

        let gallery_only: Vec<(String, String)> = store
            .iter_owned(&owner, Some("gallery"))
            .map(|e| e.unwrap())
            .collect();
        assert_eq!(gallery_only.len(), 2);
        assert_eq!(store.owned_count(&owner, "gallery").unwrap(), 2);
        assert_eq!(store.owned_count(&owner, "zoo").unwrap(), 1);
        assert_eq!(store.owned_count(&addr("addrc"), "gallery").unwrap(), 0);
    }

    #[test]
    fn test_swap_owner_moves_the_entry() {
        let mut store = MemoryKvStore::new();
        let from = addr("addrb");
        let to = addr("addrc");

        let mut batch = StoreBatch::new(&mut store);
        batch.index_owner(&from, "gallery", "art001");
        batch.commit().unwrap();

        let mut batch = StoreBatch::new(&mut store);
        batch.swap_owner("gallery", "art001", &from, &to);
        batch.commit().unwrap();

        assert!(!store.is_indexed_owner(&from, "gallery", "art001").unwrap());
        assert!(store.is_indexed_owner(&to, "gallery", "art001").unwrap());
    }

    #[test]
    fn test_unindex_owner() {
        let mut store = MemoryKvStore::new();
        let owner = addr("addrb");

        let mut batch = StoreBatch::new(&mut store);
        batch.index_owner(&owner, "gallery", "art001");
        batch.commit().unwrap();

        let mut batch = StoreBatch::new(&mut store);
        batch.unindex_owner(&owner, "gallery", "art001");
        batch.commit().unwrap();

        assert_eq!(store.iter_owned(&owner, None).count(), 0);
    }
}

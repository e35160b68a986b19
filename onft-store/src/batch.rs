use crate::kv::{KvRead, KvStore};
use log::debug;
use onft_core::error::StorageError;
use std::collections::BTreeMap;

/// Copy-on-write overlay giving one registry operation a
/// transaction-scoped view of the store.
///
/// Reads see the base store with staged writes applied on top; nothing
/// reaches the base until `commit`. Dropping the batch discards every
/// staged write, which is how a failed operation leaves the base store
/// byte-identical to its state before the call.
pub struct StoreBatch<'a> {
    base: &'a mut dyn KvStore,
    // key -> Some(value) for staged writes, None for staged deletes
    staged: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> StoreBatch<'a> {
    pub fn new(base: &'a mut dyn KvStore) -> Self {
        Self {
            base,
            staged: BTreeMap::new(),
        }
    }

    /// Stage a write
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.staged.insert(key, Some(value));
    }

    /// Stage a delete
    pub fn delete(&mut self, key: &[u8]) {
        self.staged.insert(key.to_vec(), None);
    }

    /// Number of staged writes and deletes
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Apply every staged write to the base store.
    pub fn commit(self) -> Result<(), StorageError> {
        let count = self.staged.len();
        for (key, entry) in self.staged {
            match entry {
                Some(value) => self.base.set(key, value)?,
                None => self.base.delete(&key)?,
            }
        }
        debug!("committed {} staged store writes", count);
        Ok(())
    }
}

impl KvRead for StoreBatch<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        match self.staged.get(key) {
            Some(entry) => Ok(entry.clone()),
            None => self.base.get(key),
        }
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> Box<dyn Iterator<Item = Result<(Vec<u8>, Vec<u8>), StorageError>> + '_> {
        // Merge the base scan with the staged range. The merged view is
        // materialized: batches live for one operation over a bounded
        // working set, unlike the lazy scans of the base store.
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> = BTreeMap::new();
        for entry in self.base.scan_prefix(prefix) {
            match entry {
                Ok((k, v)) => {
                    merged.insert(k, v);
                }
                Err(e) => return Box::new(std::iter::once(Err(e))),
            }
        }
        for (key, entry) in self
            .staged
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
        {
            match entry {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        Box::new(merged.into_iter().map(Ok))
    }
}

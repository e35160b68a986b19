use onft_core::error::StorageError;
use std::collections::BTreeMap;

/// Read-only view over a key/value store.
///
/// Prefix scans are finite, restartable (each call starts a fresh pass
/// over the key range) and yield entries in key-sort order, which is the
/// deterministic ordering every listing and pagination cursor in the
/// registry is defined against.
pub trait KvRead {
    /// Get the value stored under a key
    ///
    /// # Returns
    /// Some(value) if present, None otherwise
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Iterate over all entries whose key starts with `prefix`, in
    /// ascending key order
    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> Box<dyn Iterator<Item = Result<(Vec<u8>, Vec<u8>), StorageError>> + '_>;
}

/// Mutable key/value store the registry persists into.
///
/// Callers never mutate a `KvStore` directly during an operation; all
/// writes go through a `StoreBatch` so a failed operation leaves the
/// store untouched.
pub trait KvStore: KvRead {
    /// Store a value under a key, replacing any previous value
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), StorageError>;
}

/// In-memory store backed by a BTreeMap.
///
/// This is the backend used in tests and by hosts that keep the
/// authoritative state elsewhere; reads hand out structural copies, so
/// no caller can mutate stored bytes out-of-band.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries, across all key prefixes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the full contents, for byte-level state comparisons in
    /// tests
    pub fn dump(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl KvRead for MemoryKvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> Box<dyn Iterator<Item = Result<(Vec<u8>, Vec<u8>), StorageError>> + '_> {
        let prefix = prefix.to_vec();
        Box::new(
            self.entries
                .range(prefix.clone()..)
                .take_while(move |(k, _)| k.starts_with(&prefix))
                .map(|(k, v)| Ok((k.clone(), v.clone()))),
        )
    }
}

impl KvStore for MemoryKvStore {
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<(), StorageError> {
        self.entries.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

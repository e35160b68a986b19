use crate::kv::{KvRead, KvStore};
use log::debug;
use onft_core::error::StorageError;
use rocksdb::{Direction, IteratorMode, Options, DB};
use std::path::Path;

/// Persistent key/value backend over RocksDB.
///
/// RocksDB iterates in byte-sorted key order, so prefix scans satisfy
/// the same deterministic-ordering contract as the in-memory store.
pub struct RocksDbStorage {
    db: DB,
}

impl RocksDbStorage {
    /// Open (creating if needed) a RocksDB database at the given path
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let mut options = Options::default();
        options.create_if_missing(true);
        let db = DB::open(&options, path)
            .map_err(|e| StorageError::Database(e.to_string()))?;
        debug!("opened RocksDB store at {}", path.display());
        Ok(Self { db })
    }
}

impl KvRead for RocksDbStorage {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        self.db
            .get(key)
            .map_err(|e| StorageError::Database(e.to_string()))
    }

    fn scan_prefix(
        &self,
        prefix: &[u8],
    ) -> Box<dyn Iterator<Item = Result<(Vec<u8>, Vec<u8>), StorageError>> + '_> {
        let prefix = prefix.to_vec();
        let iter = self
            .db
            .iterator(IteratorMode::From(&prefix, Direction::Forward));
        Box::new(
            iter.map(|entry| {
                entry
                    .map(|(k, v)| (k.to_vec(), v.to_vec()))
                    .map_err(|e| StorageError::Database(e.to_string()))
            })
            .take_while(move |entry| match entry {
                Ok((k, _)) => k.starts_with(&prefix),
                Err(_) => true,
            }),
        )
    }
}

impl KvStore for RocksDbStorage {
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<(), StorageError> {
        self.db
            .put(key, value)
            .map_err(|e| StorageError::Database(e.to_string()))
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StorageError> {
        self.db
            .delete(key)
            .map_err(|e| StorageError::Database(e.to_string()))
    }
}

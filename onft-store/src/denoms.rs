use crate::batch::StoreBatch;
use crate::codec;
use crate::keys;
use crate::kv::KvRead;
use onft_core::error::{RegistryError, StorageError};
use onft_core::Denom;

/// Read access to denom records. Implemented for every `KvRead`, so the
/// same accessors work against a live batch and a read-only snapshot.
pub trait DenomStore: KvRead {
    /// Get a denom record by ID
    fn get_denom(&self, denom_id: &str) -> Result<Option<Denom>, StorageError> {
        match self.get(&keys::denom_key(denom_id))? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn has_denom(&self, denom_id: &str) -> Result<bool, StorageError> {
        Ok(self.get(&keys::denom_key(denom_id))?.is_some())
    }

    fn has_denom_symbol(&self, symbol: &str) -> Result<bool, StorageError> {
        Ok(self.get(&keys::denom_symbol_key(symbol))?.is_some())
    }

    /// Iterate all denom records in ID order
    fn iter_denoms(&self) -> Box<dyn Iterator<Item = Result<Denom, StorageError>> + '_> {
        Box::new(
            self.scan_prefix(&keys::denom_prefix())
                .map(|entry| entry.and_then(|(_, v)| codec::decode(&v))),
        )
    }
}

impl<T: KvRead + ?Sized> DenomStore for T {}

impl StoreBatch<'_> {
    /// Write a brand-new denom, enforcing ID and symbol uniqueness.
    pub fn save_denom(&mut self, denom: &Denom) -> Result<(), RegistryError> {
        if self.has_denom(&denom.id)? {
            return Err(RegistryError::DenomAlreadyExists(denom.id.clone()));
        }
        if self.has_denom_symbol(&denom.symbol)? {
            return Err(RegistryError::SymbolAlreadyExists(denom.symbol.clone()));
        }
        self.set(keys::denom_key(&denom.id), codec::encode(denom)?);
        self.set(
            keys::denom_symbol_key(&denom.symbol),
            denom.id.as_bytes().to_vec(),
        );
        Ok(())
    }

    /// Overwrite an existing denom record. The caller has already checked
    /// existence; `id` and `symbol` never change after creation, so the
    /// symbol index needs no maintenance here.
    pub fn update_denom(&mut self, denom: &Denom) -> Result<(), RegistryError> {
        self.set(keys::denom_key(&denom.id), codec::encode(denom)?);
        Ok(())
    }
}

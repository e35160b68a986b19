use crate::batch::StoreBatch;
use crate::codec;
use crate::keys;
use crate::kv::KvRead;
use onft_core::error::StorageError;
use onft_core::Params;

/// Read access to the registry parameters.
pub trait ParamsStore: KvRead {
    /// Get the stored parameters, falling back to defaults when the
    /// params key has never been written.
    fn get_params(&self) -> Result<Params, StorageError> {
        match self.get(&keys::params_key())? {
            Some(bytes) => codec::decode(&bytes),
            None => Ok(Params::default()),
        }
    }
}

impl<T: KvRead + ?Sized> ParamsStore for T {}

impl StoreBatch<'_> {
    /// Persist the registry parameters.
    pub fn set_params(&mut self, params: &Params) -> Result<(), StorageError> {
        self.set(keys::params_key(), codec::encode(params)?);
        Ok(())
    }
}

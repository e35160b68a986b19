use onft_core::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a store value with bincode.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
    Ok(bincode::serialize(value)?)
}

/// Decode a store value with bincode.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StorageError> {
    Ok(bincode::deserialize(bytes)?)
}

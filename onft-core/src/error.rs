use std::io;
use thiserror::Error;

/// Represents errors raised by the byte-level storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO errors that occur when reading/writing files
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Database errors that occur with the underlying storage backend
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Errors raised when a stored key does not follow the composite key layout
    #[error("Corrupt key: {0}")]
    CorruptKey(String),

    /// Anyhow error wrapper for error context
    #[error(transparent)]
    Context(#[from] anyhow::Error),
}

impl From<bincode::Error> for StorageError {
    fn from(err: bincode::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Represents all domain errors returned by registry operations and queries
///
/// Every failure is terminal for the operation that raised it: the
/// transaction batch is discarded and the base store is left untouched.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed denom ID (length or charset)
    #[error("invalid denom ID {id}: {reason}")]
    InvalidDenomId { id: String, reason: String },

    /// Malformed denom symbol (length or charset)
    #[error("invalid denom symbol {symbol}: {reason}")]
    InvalidDenomSymbol { symbol: String, reason: String },

    /// Malformed oNFT ID (length or charset)
    #[error("invalid oNFT ID {id}: {reason}")]
    InvalidOnftId { id: String, reason: String },

    /// Name exceeds the configured length bound
    #[error("invalid name: length must be at most {max} characters")]
    InvalidName { max: usize },

    /// Description exceeds the configured length bound
    #[error("invalid description: length must be at most {max} characters")]
    InvalidDescription { max: usize },

    /// URI exceeds the configured length bound
    #[error("invalid URI {uri}: length must be at most {max} characters")]
    InvalidUri { uri: String, max: usize },

    /// Media URI is mandatory and must be non-empty
    #[error("invalid media URI: must not be empty")]
    EmptyMediaUri,

    /// Malformed account address
    #[error("invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Royalty share outside the permitted range
    #[error("invalid royalty share {share}: must be at most {max} basis points")]
    InvalidRoyaltyShare { share: u32, max: u32 },

    /// Denom ID collision on create
    #[error("denom {0} already exists")]
    DenomAlreadyExists(String),

    /// Denom symbol collision on create
    #[error("denom symbol {0} already exists")]
    SymbolAlreadyExists(String),

    /// Referenced denom does not exist
    #[error("denom {0} not found")]
    DenomNotFound(String),

    /// Mint into an occupied (denom, oNFT) slot
    #[error("oNFT {onft_id} already exists in denom {denom_id}")]
    OnftAlreadyExists { denom_id: String, onft_id: String },

    /// Referenced oNFT does not exist in the denom
    #[error("oNFT {onft_id} not found in denom {denom_id}")]
    OnftNotFound { denom_id: String, onft_id: String },

    /// Caller is not the denom creator or oNFT owner required for the mutation
    #[error("unauthorized address {0}")]
    Unauthorized(String),

    /// Transfer attempted on a non-transferable oNFT
    #[error("oNFT {0} is not transferable")]
    NotTransferable(String),

    /// Governance-gated flag edit attempted while the owner is not the creator
    #[error("oNFT {onft_id}: {flag} can be modified only when the denom creator owns the oNFT")]
    NotEditable { onft_id: String, flag: String },

    /// Metadata or data edit attempted on a non-extensible oNFT
    #[error("oNFT {0} is not extensible")]
    NotExtensible(String),

    /// Textual flag outside its recognized token set
    #[error("{0} is not a valid option, expected \"yes\" or \"no\"")]
    InvalidOption(String),

    /// Genesis state failed validation
    #[error("invalid genesis: {0}")]
    InvalidGenesis(String),

    /// Errors bubbled up from the storage layer
    #[error(transparent)]
    Store(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_bridges_into_registry_error() {
        let err = StorageError::Database("backend unavailable".to_string());
        let registry_err: RegistryError = err.into();
        assert!(matches!(registry_err, RegistryError::Store(_)));
        assert!(registry_err.to_string().contains("backend unavailable"));
    }

    #[test]
    fn test_error_messages_carry_identifiers() {
        let err = RegistryError::OnftAlreadyExists {
            denom_id: "artgallery1".to_string(),
            onft_id: "art001".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("artgallery1"));
        assert!(msg.contains("art001"));
    }
}

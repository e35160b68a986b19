use crate::denom::Denom;
use crate::error::RegistryError;
use crate::onft::Onft;
use crate::params::Params;
use serde::{Deserialize, Serialize};

/// A denom together with all its live oNFTs, as used by collection
/// queries and genesis import/export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub denom: Denom,
    pub onfts: Vec<Onft>,
}

impl Collection {
    pub fn new(denom: Denom, onfts: Vec<Onft>) -> Self {
        Self { denom, onfts }
    }
}

/// The full registry state consumed at process start and produced at
/// snapshot time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub params: Params,
}

impl GenesisState {
    pub fn new(collections: Vec<Collection>, params: Params) -> Self {
        Self {
            collections,
            params,
        }
    }

    /// Decode a genesis state from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(json)
            .map_err(|e| RegistryError::InvalidGenesis(format!("malformed JSON: {}", e)))
    }

    /// Encode the genesis state as JSON.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RegistryError::InvalidGenesis(format!("encoding failed: {}", e)))
    }
}

/// Validate a genesis state with the same checks live traffic gets.
pub fn validate_genesis(state: &GenesisState) -> Result<(), RegistryError> {
    for collection in &state.collections {
        collection.denom.validate()?;
        for onft in &collection.onfts {
            onft.validate()?;
        }
    }
    Ok(())
}

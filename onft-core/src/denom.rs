use crate::address::Address;
use crate::error::RegistryError;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Denom is a named collection of oNFTs.
///
/// The `id` and `symbol` are globally unique and immutable after
/// creation, as is the metadata `schema`. The display fields can be
/// changed by the creator, and the creator role itself can be handed
/// over with an explicit ownership transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denom {
    /// Globally unique collection identifier
    pub id: String,

    /// Globally unique ticker-style symbol
    pub symbol: String,

    /// Display name
    pub name: String,

    /// Free-form schema describing the shape of oNFT metadata in this denom
    pub schema: String,

    /// The account that administers this denom
    pub creator: Address,

    /// Display description
    pub description: String,

    /// Preview image URI
    pub preview_uri: String,

    /// Collection-level URI
    pub uri: String,

    /// Opaque caller-defined payload
    pub data: String,
}

impl Denom {
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        schema: impl Into<String>,
        creator: Address,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            schema: schema.into(),
            creator,
            description: String::new(),
            preview_uri: String::new(),
            uri: String::new(),
            data: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_preview_uri(mut self, preview_uri: impl Into<String>) -> Self {
        self.preview_uri = preview_uri.into();
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Check every field against the registry's well-formedness rules.
    pub fn validate(&self) -> Result<(), RegistryError> {
        validation::validate_denom_id(&self.id)?;
        validation::validate_denom_symbol(&self.symbol)?;
        validation::validate_name(&self.name)?;
        validation::validate_description(&self.description)?;
        validation::validate_uri(&self.preview_uri)?;
        validation::validate_uri(&self.uri)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator() -> Address {
        Address::new("addra").unwrap()
    }

    #[test]
    fn test_builder_fields() {
        let denom = Denom::new("artgallery1", "ART", "Art Gallery", "{}", creator())
            .with_description("curated art")
            .with_preview_uri("ipfs://preview")
            .with_uri("ipfs://collection")
            .with_data("{\"curator\":\"addra\"}");
        assert_eq!(denom.id, "artgallery1");
        assert_eq!(denom.symbol, "ART");
        assert_eq!(denom.description, "curated art");
        assert_eq!(denom.creator, creator());
        assert!(denom.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let denom = Denom::new("a", "ART", "Art", "{}", creator());
        assert!(denom.validate().is_err());

        let denom = Denom::new("artgallery1", "ART1", "Art", "{}", creator());
        assert!(denom.validate().is_err());
    }
}

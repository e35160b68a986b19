use crate::address::Address;
use crate::error::RegistryError;
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of a royalty share, in basis points (100% = 10_000)
pub const MAX_ROYALTY_SHARE_BPS: u32 = 10_000;

/// RoyaltyShare is a fixed-point fraction of a sale owed to the creator,
/// expressed in basis points so it stays exact under replay.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoyaltyShare(u32);

impl RoyaltyShare {
    /// Create a royalty share from basis points (0..=10_000).
    pub fn from_bps(bps: u32) -> Result<Self, RegistryError> {
        if bps > MAX_ROYALTY_SHARE_BPS {
            return Err(RegistryError::InvalidRoyaltyShare {
                share: bps,
                max: MAX_ROYALTY_SHARE_BPS,
            });
        }
        Ok(RoyaltyShare(bps))
    }

    /// A zero royalty share
    pub fn zero() -> Self {
        RoyaltyShare(0)
    }

    pub fn bps(&self) -> u32 {
        self.0
    }
}

/// Display metadata of one oNFT. The media URI is the only mandatory
/// field and must be non-empty at mint time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    pub media_uri: String,
    pub preview_uri: String,
}

impl Metadata {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        media_uri: impl Into<String>,
        preview_uri: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            media_uri: media_uri.into(),
            preview_uri: preview_uri.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        validation::validate_name(&self.name)?;
        validation::validate_description(&self.description)?;
        validation::validate_media_uri(&self.media_uri)?;
        validation::validate_uri(&self.preview_uri)?;
        Ok(())
    }
}

/// Onft is one non-fungible item inside exactly one denom.
///
/// `id`, `created_at` and (outside of transfers) `owner` are immutable;
/// the remaining fields can be edited by the owner subject to the
/// denom's authorization rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Onft {
    /// Identifier, unique within the denom (not globally)
    pub id: String,

    /// Display metadata
    pub metadata: Metadata,

    /// Opaque caller-defined payload
    pub data: String,

    /// Current holder
    pub owner: Address,

    /// Whether the oNFT can change owners
    pub transferable: bool,

    /// Whether metadata and data edits are permitted
    pub extensible: bool,

    /// Not-safe-for-work display hint
    pub nsfw: bool,

    /// Creator royalty on secondary sales
    pub royalty_share: RoyaltyShare,

    /// Ledger time at mint, immutable
    pub created_at: DateTime<Utc>,
}

impl Onft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        metadata: Metadata,
        data: impl Into<String>,
        owner: Address,
        transferable: bool,
        extensible: bool,
        nsfw: bool,
        royalty_share: RoyaltyShare,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            metadata,
            data: data.into(),
            owner,
            transferable,
            extensible,
            nsfw,
            royalty_share,
            created_at,
        }
    }

    pub fn is_transferable(&self) -> bool {
        self.transferable
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    /// Check identifier and metadata against the well-formedness rules.
    pub fn validate(&self) -> Result<(), RegistryError> {
        validation::validate_onft_id(&self.id)?;
        self.metadata.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn owner() -> Address {
        Address::new("addrb").unwrap()
    }

    fn mint_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_royalty_share_bounds() {
        assert!(RoyaltyShare::from_bps(0).is_ok());
        assert!(RoyaltyShare::from_bps(10_000).is_ok());
        assert!(RoyaltyShare::from_bps(10_001).is_err());
        assert_eq!(RoyaltyShare::from_bps(250).unwrap().bps(), 250);
        assert_eq!(RoyaltyShare::zero().bps(), 0);
    }

    #[test]
    fn test_onft_fields() {
        let onft = Onft::new(
            "art001",
            Metadata::new("Art 1", "first piece", "ipfs://media", "ipfs://preview"),
            "{}",
            owner(),
            true,
            false,
            false,
            RoyaltyShare::zero(),
            mint_time(),
        );
        assert!(onft.is_transferable());
        assert!(!onft.is_extensible());
        assert_eq!(onft.created_at, mint_time());
        assert!(onft.validate().is_ok());
    }

    #[test]
    fn test_onft_validate_requires_media_uri() {
        let onft = Onft::new(
            "art001",
            Metadata::new("Art 1", "", "", ""),
            "",
            owner(),
            true,
            true,
            false,
            RoyaltyShare::zero(),
            mint_time(),
        );
        assert!(matches!(
            onft.validate(),
            Err(RegistryError::EmptyMediaUri)
        ));
    }
}

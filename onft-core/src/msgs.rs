use crate::address::Address;
use crate::error::RegistryError;
use crate::onft::{Metadata, RoyaltyShare};
use crate::validation;
use serde::{Deserialize, Serialize};

/// Parse a textual boolean flag as supplied by command-line style callers.
///
/// Only "yes" and "no" (case-insensitive) are recognized; anything else
/// is rejected with `InvalidOption` rather than defaulting.
pub fn parse_flag(value: &str) -> Result<bool, RegistryError> {
    match value.to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(RegistryError::InvalidOption(value.to_string())),
    }
}

/// Request to create a new denom. The denom-creation fee is escrowed by
/// an external collaborator before this message reaches the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateDenom {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub schema: String,
    pub description: String,
    pub preview_uri: String,
    pub uri: String,
    pub data: String,
    pub sender: Address,
}

impl MsgCreateDenom {
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        validation::validate_denom_id(&self.id)?;
        validation::validate_denom_symbol(&self.symbol)?;
        validation::validate_name(&self.name)?;
        validation::validate_description(&self.description)?;
        validation::validate_uri(&self.preview_uri)?;
        validation::validate_uri(&self.uri)?;
        Ok(())
    }
}

/// Request to update a denom's display fields. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateDenom {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub preview_uri: Option<String>,
    pub uri: Option<String>,
    pub sender: Address,
}

impl MsgUpdateDenom {
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        validation::validate_denom_id(&self.id)?;
        if let Some(name) = &self.name {
            validation::validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validation::validate_description(description)?;
        }
        if let Some(preview_uri) = &self.preview_uri {
            validation::validate_uri(preview_uri)?;
        }
        if let Some(uri) = &self.uri {
            validation::validate_uri(uri)?;
        }
        Ok(())
    }
}

/// Request to hand a denom's administration over to a new creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTransferDenom {
    pub id: String,
    pub sender: Address,
    pub recipient: Address,
}

impl MsgTransferDenom {
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        validation::validate_denom_id(&self.id)
    }
}

/// Request to mint a new oNFT into a denom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMintOnft {
    pub id: String,
    pub denom_id: String,
    pub metadata: Metadata,
    pub data: String,
    pub transferable: bool,
    pub extensible: bool,
    pub nsfw: bool,
    pub royalty_share: RoyaltyShare,
    pub sender: Address,
    pub recipient: Address,
}

impl MsgMintOnft {
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        validation::validate_onft_id(&self.id)?;
        validation::validate_denom_id(&self.denom_id)?;
        self.metadata.validate()?;
        Ok(())
    }
}

/// Request to edit an oNFT. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgEditOnft {
    pub id: String,
    pub denom_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub media_uri: Option<String>,
    pub preview_uri: Option<String>,
    pub data: Option<String>,
    pub transferable: Option<bool>,
    pub extensible: Option<bool>,
    pub nsfw: Option<bool>,
    pub royalty_share: Option<RoyaltyShare>,
    pub sender: Address,
}

impl MsgEditOnft {
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        validation::validate_onft_id(&self.id)?;
        validation::validate_denom_id(&self.denom_id)?;
        if let Some(name) = &self.name {
            validation::validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validation::validate_description(description)?;
        }
        if let Some(media_uri) = &self.media_uri {
            validation::validate_media_uri(media_uri)?;
        }
        if let Some(preview_uri) = &self.preview_uri {
            validation::validate_uri(preview_uri)?;
        }
        Ok(())
    }
}

/// Request to move an oNFT to a new owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTransferOnft {
    pub id: String,
    pub denom_id: String,
    pub sender: Address,
    pub recipient: Address,
}

impl MsgTransferOnft {
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        validation::validate_onft_id(&self.id)?;
        validation::validate_denom_id(&self.denom_id)?;
        Ok(())
    }
}

/// Request to destroy an oNFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBurnOnft {
    pub id: String,
    pub denom_id: String,
    pub sender: Address,
}

impl MsgBurnOnft {
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        validation::validate_onft_id(&self.id)?;
        validation::validate_denom_id(&self.denom_id)?;
        Ok(())
    }
}

/// The seven registry operations as one tagged union, dispatched by the
/// registry through a single match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryMsg {
    CreateDenom(MsgCreateDenom),
    UpdateDenom(MsgUpdateDenom),
    TransferDenom(MsgTransferDenom),
    MintOnft(MsgMintOnft),
    EditOnft(MsgEditOnft),
    TransferOnft(MsgTransferOnft),
    BurnOnft(MsgBurnOnft),
}

impl RegistryMsg {
    /// Run the message's own self-consistency check.
    pub fn validate_basic(&self) -> Result<(), RegistryError> {
        match self {
            RegistryMsg::CreateDenom(msg) => msg.validate_basic(),
            RegistryMsg::UpdateDenom(msg) => msg.validate_basic(),
            RegistryMsg::TransferDenom(msg) => msg.validate_basic(),
            RegistryMsg::MintOnft(msg) => msg.validate_basic(),
            RegistryMsg::EditOnft(msg) => msg.validate_basic(),
            RegistryMsg::TransferOnft(msg) => msg.validate_basic(),
            RegistryMsg::BurnOnft(msg) => msg.validate_basic(),
        }
    }

    /// The signer whose authorization the operation is checked against.
    pub fn sender(&self) -> &Address {
        match self {
            RegistryMsg::CreateDenom(msg) => &msg.sender,
            RegistryMsg::UpdateDenom(msg) => &msg.sender,
            RegistryMsg::TransferDenom(msg) => &msg.sender,
            RegistryMsg::MintOnft(msg) => &msg.sender,
            RegistryMsg::EditOnft(msg) => &msg.sender,
            RegistryMsg::TransferOnft(msg) => &msg.sender,
            RegistryMsg::BurnOnft(msg) => &msg.sender,
        }
    }
}

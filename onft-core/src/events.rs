use crate::address::Address;
use serde::{Deserialize, Serialize};

/// The kind of mutation an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    CreateDenom,
    UpdateDenom,
    TransferDenom,
    MintOnft,
    EditOnft,
    TransferOnft,
    BurnOnft,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CreateDenom => "create_denom",
            EventKind::UpdateDenom => "update_denom",
            EventKind::TransferDenom => "transfer_denom",
            EventKind::MintOnft => "mint_onft",
            EventKind::EditOnft => "edit_onft",
            EventKind::TransferOnft => "transfer_onft",
            EventKind::BurnOnft => "burn_onft",
        }
    }
}

// Attribute keys shared by all event kinds
pub const ATTR_DENOM_ID: &str = "denom-id";
pub const ATTR_SYMBOL: &str = "symbol";
pub const ATTR_NAME: &str = "name";
pub const ATTR_CREATOR: &str = "creator";
pub const ATTR_ONFT_ID: &str = "onft-id";
pub const ATTR_MEDIA_URI: &str = "media-uri";
pub const ATTR_OWNER: &str = "owner";
pub const ATTR_SENDER: &str = "sender";
pub const ATTR_RECIPIENT: &str = "recipient";

/// One structured record per successful mutation, for external observers.
///
/// Emission is part of the mutation's atomic envelope but has no effect
/// on subsequent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub attributes: Vec<(String, String)>,
}

impl Event {
    fn new(kind: EventKind, attributes: Vec<(&str, String)>) -> Self {
        Self {
            kind,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    /// Look up the first attribute with the given key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn create_denom(denom_id: &str, symbol: &str, name: &str, creator: &Address) -> Self {
        Self::new(
            EventKind::CreateDenom,
            vec![
                (ATTR_DENOM_ID, denom_id.to_string()),
                (ATTR_SYMBOL, symbol.to_string()),
                (ATTR_NAME, name.to_string()),
                (ATTR_CREATOR, creator.to_string()),
            ],
        )
    }

    pub fn update_denom(denom_id: &str, symbol: &str, name: &str, creator: &Address) -> Self {
        Self::new(
            EventKind::UpdateDenom,
            vec![
                (ATTR_DENOM_ID, denom_id.to_string()),
                (ATTR_SYMBOL, symbol.to_string()),
                (ATTR_NAME, name.to_string()),
                (ATTR_CREATOR, creator.to_string()),
            ],
        )
    }

    pub fn transfer_denom(denom_id: &str, symbol: &str, sender: &Address, recipient: &Address) -> Self {
        Self::new(
            EventKind::TransferDenom,
            vec![
                (ATTR_DENOM_ID, denom_id.to_string()),
                (ATTR_SYMBOL, symbol.to_string()),
                (ATTR_SENDER, sender.to_string()),
                (ATTR_RECIPIENT, recipient.to_string()),
            ],
        )
    }

    pub fn mint_onft(denom_id: &str, onft_id: &str, media_uri: &str, owner: &Address) -> Self {
        Self::new(
            EventKind::MintOnft,
            vec![
                (ATTR_ONFT_ID, onft_id.to_string()),
                (ATTR_DENOM_ID, denom_id.to_string()),
                (ATTR_MEDIA_URI, media_uri.to_string()),
                (ATTR_OWNER, owner.to_string()),
            ],
        )
    }

    pub fn edit_onft(denom_id: &str, onft_id: &str, owner: &Address) -> Self {
        Self::new(
            EventKind::EditOnft,
            vec![
                (ATTR_ONFT_ID, onft_id.to_string()),
                (ATTR_DENOM_ID, denom_id.to_string()),
                (ATTR_OWNER, owner.to_string()),
            ],
        )
    }

    pub fn transfer_onft(denom_id: &str, onft_id: &str, sender: &Address, recipient: &Address) -> Self {
        Self::new(
            EventKind::TransferOnft,
            vec![
                (ATTR_ONFT_ID, onft_id.to_string()),
                (ATTR_DENOM_ID, denom_id.to_string()),
                (ATTR_SENDER, sender.to_string()),
                (ATTR_RECIPIENT, recipient.to_string()),
            ],
        )
    }

    pub fn burn_onft(denom_id: &str, onft_id: &str, owner: &Address) -> Self {
        Self::new(
            EventKind::BurnOnft,
            vec![
                (ATTR_ONFT_ID, onft_id.to_string()),
                (ATTR_DENOM_ID, denom_id.to_string()),
                (ATTR_OWNER, owner.to_string()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_attributes() {
        let sender = Address::new("addrb").unwrap();
        let recipient = Address::new("addrc").unwrap();
        let event = Event::transfer_onft("artgallery1", "art001", &sender, &recipient);
        assert_eq!(event.kind.as_str(), "transfer_onft");
        assert_eq!(event.attribute(ATTR_DENOM_ID), Some("artgallery1"));
        assert_eq!(event.attribute(ATTR_SENDER), Some("addrb"));
        assert_eq!(event.attribute(ATTR_RECIPIENT), Some("addrc"));
        assert_eq!(event.attribute("missing"), None);
    }
}

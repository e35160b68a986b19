use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of an account address
pub const MAX_ADDRESS_LEN: usize = 90;

// Address identifies an account on the host ledger. The host has already
// authenticated the signer; this type only enforces well-formedness so
// addresses can safely participate in composite store keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Parse and validate an address string.
    ///
    /// Addresses are 1-90 lowercase ASCII alphanumeric characters. The
    /// charset rule keeps the composite-key delimiter out of addresses.
    pub fn new(address: impl Into<String>) -> Result<Self, RegistryError> {
        let address = address.into();
        if address.is_empty() || address.len() > MAX_ADDRESS_LEN {
            return Err(RegistryError::InvalidAddress {
                address,
                reason: format!("length must be between [1, {}]", MAX_ADDRESS_LEN),
            });
        }
        if !address
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(RegistryError::InvalidAddress {
                address,
                reason: "only accepts lowercase alphanumeric characters".to_string(),
            });
        }
        Ok(Address(address))
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::new(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(Address::new("addra").is_ok());
        assert!(Address::new("cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu").is_ok());
        assert_eq!(Address::new("addra").unwrap().as_str(), "addra");
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(Address::new("").is_err());
        assert!(Address::new("ADDR").is_err());
        assert!(Address::new("addr/a").is_err());
        assert!(Address::new("addr a").is_err());
        assert!(Address::new("a".repeat(91)).is_err());
    }

    #[test]
    fn test_parse_from_str() {
        let addr: Address = "addrb".parse().unwrap();
        assert_eq!(addr.to_string(), "addrb");
    }
}

use crate::error::RegistryError;

/// Minimum length of a denom or oNFT identifier
pub const MIN_ID_LEN: usize = 3;
/// Maximum length of a denom or oNFT identifier
pub const MAX_ID_LEN: usize = 256;
/// Minimum length of a denom symbol
pub const MIN_SYMBOL_LEN: usize = 3;
/// Maximum length of a denom symbol
pub const MAX_SYMBOL_LEN: usize = 64;
/// Maximum length of a display name
pub const MAX_NAME_LEN: usize = 256;
/// Maximum length of a description
pub const MAX_DESCRIPTION_LEN: usize = 4096;
/// Maximum length of any URI field
pub const MAX_URI_LEN: usize = 256;

fn begins_with_alpha(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate a denom identifier.
///
/// Identifiers are 3-256 characters, begin with an ASCII letter and
/// contain only ASCII alphanumerics. The charset rule guarantees no
/// identifier can contain the composite-key delimiter.
pub fn validate_denom_id(id: &str) -> Result<(), RegistryError> {
    if id.len() < MIN_ID_LEN || id.len() > MAX_ID_LEN {
        return Err(RegistryError::InvalidDenomId {
            id: id.to_string(),
            reason: format!("length must be between [{}, {}]", MIN_ID_LEN, MAX_ID_LEN),
        });
    }
    if !begins_with_alpha(id) || !is_alphanumeric(id) {
        return Err(RegistryError::InvalidDenomId {
            id: id.to_string(),
            reason: "only accepts alphanumeric characters beginning with a letter".to_string(),
        });
    }
    Ok(())
}

/// Validate an oNFT identifier. Same rule as denom identifiers.
pub fn validate_onft_id(id: &str) -> Result<(), RegistryError> {
    if id.len() < MIN_ID_LEN || id.len() > MAX_ID_LEN {
        return Err(RegistryError::InvalidOnftId {
            id: id.to_string(),
            reason: format!("length must be between [{}, {}]", MIN_ID_LEN, MAX_ID_LEN),
        });
    }
    if !begins_with_alpha(id) || !is_alphanumeric(id) {
        return Err(RegistryError::InvalidOnftId {
            id: id.to_string(),
            reason: "only accepts alphanumeric characters beginning with a letter".to_string(),
        });
    }
    Ok(())
}

/// Validate a denom symbol: 3-64 characters, ASCII letters only.
pub fn validate_denom_symbol(symbol: &str) -> Result<(), RegistryError> {
    if symbol.len() < MIN_SYMBOL_LEN || symbol.len() > MAX_SYMBOL_LEN {
        return Err(RegistryError::InvalidDenomSymbol {
            symbol: symbol.to_string(),
            reason: format!(
                "length must be between [{}, {}]",
                MIN_SYMBOL_LEN, MAX_SYMBOL_LEN
            ),
        });
    }
    if !is_alphabetic(symbol) {
        return Err(RegistryError::InvalidDenomSymbol {
            symbol: symbol.to_string(),
            reason: "only accepts alphabetic characters".to_string(),
        });
    }
    Ok(())
}

/// Validate a display name. Empty names are allowed.
pub fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.len() > MAX_NAME_LEN {
        return Err(RegistryError::InvalidName { max: MAX_NAME_LEN });
    }
    Ok(())
}

/// Validate a description. Empty descriptions are allowed.
pub fn validate_description(description: &str) -> Result<(), RegistryError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(RegistryError::InvalidDescription {
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

/// Validate an optional URI field. Empty URIs are allowed.
pub fn validate_uri(uri: &str) -> Result<(), RegistryError> {
    if uri.len() > MAX_URI_LEN {
        return Err(RegistryError::InvalidUri {
            uri: uri.to_string(),
            max: MAX_URI_LEN,
        });
    }
    Ok(())
}

/// Validate a media URI. Unlike other URI fields the media URI is
/// mandatory, and an empty value is a distinct error from a too-long one.
pub fn validate_media_uri(uri: &str) -> Result<(), RegistryError> {
    if uri.is_empty() {
        return Err(RegistryError::EmptyMediaUri);
    }
    if uri.len() > MAX_URI_LEN {
        return Err(RegistryError::InvalidUri {
            uri: uri.to_string(),
            max: MAX_URI_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(validate_denom_id("artgallery1").is_ok());
        assert!(validate_onft_id("art001").is_ok());
        assert!(validate_denom_id("abc").is_ok());
        assert!(validate_denom_id(&format!("a{}", "b".repeat(255))).is_ok());
    }

    #[test]
    fn test_id_length_bounds() {
        assert!(validate_denom_id("ab").is_err());
        assert!(validate_denom_id(&"a".repeat(257)).is_err());
        assert!(validate_onft_id("x1").is_err());
    }

    #[test]
    fn test_id_charset() {
        // must begin with a letter
        assert!(validate_denom_id("1abc").is_err());
        // alphanumeric only: no separators of any kind
        assert!(validate_denom_id("art/gallery").is_err());
        assert!(validate_denom_id("art gallery").is_err());
        assert!(validate_denom_id("art-gallery").is_err());
        assert!(validate_onft_id("art_001").is_err());
    }

    #[test]
    fn test_symbol_rules() {
        assert!(validate_denom_symbol("ART").is_ok());
        assert!(validate_denom_symbol("ab").is_err());
        assert!(validate_denom_symbol(&"a".repeat(65)).is_err());
        assert!(validate_denom_symbol("ART1").is_err());
    }

    #[test]
    fn test_media_uri_empty_is_distinct_from_too_long() {
        assert!(matches!(
            validate_media_uri(""),
            Err(RegistryError::EmptyMediaUri)
        ));
        assert!(matches!(
            validate_media_uri(&"u".repeat(257)),
            Err(RegistryError::InvalidUri { .. })
        ));
        assert!(validate_media_uri("ipfs://x").is_ok());
    }

    #[test]
    fn test_name_and_description_bounds() {
        assert!(validate_name(&"n".repeat(256)).is_ok());
        assert!(validate_name(&"n".repeat(257)).is_err());
        assert!(validate_description(&"d".repeat(4096)).is_ok());
        assert!(validate_description(&"d".repeat(4097)).is_err());
        // empty display fields are fine
        assert!(validate_name("").is_ok());
        assert!(validate_uri("").is_ok());
    }
}

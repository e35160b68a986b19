use onft_core::error::StorageError;

// Composite key layout. Every key is a single-byte prefix followed by
// '/'-joined components. The delimiter is unambiguous because the ID and
// address charsets cannot contain '/'.
pub const PREFIX_ONFT: u8 = 0x01;
pub const PREFIX_OWNERS: u8 = 0x02;
pub const PREFIX_SUPPLY: u8 = 0x03;
pub const PREFIX_DENOM: u8 = 0x04;
pub const PREFIX_DENOM_SYMBOL: u8 = 0x05;
pub const PREFIX_PARAMS: u8 = 0x06;

pub const DELIMITER: u8 = b'/';

fn key_with_components(prefix: u8, components: &[&str]) -> Vec<u8> {
    let mut key = vec![prefix];
    for component in components {
        key.push(DELIMITER);
        key.extend_from_slice(component.as_bytes());
    }
    key
}

/// `0x04/denomId` -> Denom record
pub fn denom_key(denom_id: &str) -> Vec<u8> {
    key_with_components(PREFIX_DENOM, &[denom_id])
}

/// Prefix under which all denom records live
pub fn denom_prefix() -> Vec<u8> {
    key_with_components(PREFIX_DENOM, &[""])
}

/// `0x05/symbol` -> denom id (symbol uniqueness index)
pub fn denom_symbol_key(symbol: &str) -> Vec<u8> {
    key_with_components(PREFIX_DENOM_SYMBOL, &[symbol])
}

/// `0x01/denomId/onftId` -> Onft record
pub fn onft_key(denom_id: &str, onft_id: &str) -> Vec<u8> {
    key_with_components(PREFIX_ONFT, &[denom_id, onft_id])
}

/// Prefix under which all oNFTs of one denom live
pub fn onft_prefix(denom_id: &str) -> Vec<u8> {
    key_with_components(PREFIX_ONFT, &[denom_id, ""])
}

/// `0x02/owner/denomId/onftId` -> ownership-index marker
pub fn owner_key(owner: &str, denom_id: &str, onft_id: &str) -> Vec<u8> {
    key_with_components(PREFIX_OWNERS, &[owner, denom_id, onft_id])
}

/// Prefix of one owner's index entries, optionally narrowed to a denom
pub fn owner_prefix(owner: &str, denom_id: Option<&str>) -> Vec<u8> {
    match denom_id {
        Some(denom_id) => key_with_components(PREFIX_OWNERS, &[owner, denom_id, ""]),
        None => key_with_components(PREFIX_OWNERS, &[owner, ""]),
    }
}

/// `0x03/denomId` -> supply counter
pub fn supply_key(denom_id: &str) -> Vec<u8> {
    key_with_components(PREFIX_SUPPLY, &[denom_id])
}

/// `0x06` -> Params record
pub fn params_key() -> Vec<u8> {
    vec![PREFIX_PARAMS]
}

fn utf8_component(bytes: &[u8], key: &[u8]) -> Result<String, StorageError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| StorageError::CorruptKey(hex::encode(key)))
}

/// Split an ownership-index key back into (owner, denomId, onftId).
pub fn split_owner_key(key: &[u8]) -> Result<(String, String, String), StorageError> {
    let corrupt = || StorageError::CorruptKey(hex::encode(key));
    if key.first() != Some(&PREFIX_OWNERS) {
        return Err(corrupt());
    }
    // skip the prefix byte and its leading delimiter
    let body = key.get(2..).ok_or_else(corrupt)?;
    let parts: Vec<&[u8]> = body.split(|b| *b == DELIMITER).collect();
    if parts.len() != 3 {
        return Err(corrupt());
    }
    Ok((
        utf8_component(parts[0], key)?,
        utf8_component(parts[1], key)?,
        utf8_component(parts[2], key)?,
    ))
}

/// Split a `denomId/onftId` key suffix (the part after an owner prefix
/// with no denom filter).
pub fn split_denom_suffix(suffix: &[u8]) -> Result<(String, String), StorageError> {
    let corrupt = || StorageError::CorruptKey(hex::encode(suffix));
    let parts: Vec<&[u8]> = suffix.split(|b| *b == DELIMITER).collect();
    if parts.len() != 2 {
        return Err(corrupt());
    }
    Ok((
        utf8_component(parts[0], suffix)?,
        utf8_component(parts[1], suffix)?,
    ))
}

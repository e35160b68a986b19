use onft_core::error::{RegistryError, StorageError};
use onft_core::{Address, Collection, Denom, Onft};
use onft_store::{keys, DenomStore, KvRead, OnftStore, OwnerIndex, SupplyStore};
use serde::{Deserialize, Serialize};

/// Page size used when a request leaves the limit at zero
pub const DEFAULT_PAGE_LIMIT: usize = 100;
/// Hard ceiling on any single page
pub const MAX_PAGE_LIMIT: usize = 1000;

/// Cursor-based page request. The cursor is the opaque `next_key` of the
/// previous response; `None` starts from the beginning of the range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub start_after: Option<String>,
    /// Maximum entries to return; 0 selects the default
    pub limit: usize,
}

impl PageRequest {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            start_after: None,
            limit,
        }
    }

    pub fn after(cursor: impl Into<String>, limit: usize) -> Self {
        Self {
            start_after: Some(cursor.into()),
            limit,
        }
    }

    fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            self.limit.min(MAX_PAGE_LIMIT)
        }
    }
}

/// Continuation token for the next page; `None` means the range is
/// exhausted. Results over a fixed store snapshot are stable and
/// replayable because scans follow key-sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    pub next_key: Option<String>,
}

/// Walk one page of a prefix scan. Each entry's cursor is its key with
/// the scanned prefix stripped; entries at or before `start_after` are
/// skipped.
fn paginate<T>(
    iter: impl Iterator<Item = Result<(Vec<u8>, Vec<u8>), StorageError>>,
    prefix_len: usize,
    page: &PageRequest,
    mut decode_entry: impl FnMut(&[u8], &[u8]) -> Result<T, RegistryError>,
) -> Result<(Vec<T>, PageResponse), RegistryError> {
    let limit = page.effective_limit();
    let mut items = Vec::new();
    let mut last_suffix: Vec<u8> = Vec::new();
    let mut next_key = None;

    for entry in iter {
        let (key, value) = entry?;
        let suffix = &key[prefix_len.min(key.len())..];
        if let Some(start) = &page.start_after {
            if suffix <= start.as_bytes() {
                continue;
            }
        }
        if items.len() == limit {
            // one entry past the page: the range continues
            next_key = Some(
                String::from_utf8(last_suffix.clone())
                    .map_err(|_| StorageError::CorruptKey(hex::encode(&last_suffix)))?,
            );
            break;
        }
        items.push(decode_entry(suffix, &value)?);
        last_suffix = suffix.to_vec();
    }

    Ok((items, PageResponse { next_key }))
}

/// Get one denom record.
pub fn denom(store: &dyn KvRead, denom_id: &str) -> Result<Denom, RegistryError> {
    store
        .get_denom(denom_id)?
        .ok_or_else(|| RegistryError::DenomNotFound(denom_id.to_string()))
}

/// List all denoms in ID order, one page at a time.
pub fn denoms(
    store: &dyn KvRead,
    page: &PageRequest,
) -> Result<(Vec<Denom>, PageResponse), RegistryError> {
    let prefix = keys::denom_prefix();
    paginate(store.scan_prefix(&prefix), prefix.len(), page, |_, value| {
        Ok(onft_store::codec::decode(value)?)
    })
}

/// Get one oNFT record.
pub fn onft(store: &dyn KvRead, denom_id: &str, onft_id: &str) -> Result<Onft, RegistryError> {
    if !store.has_denom(denom_id)? {
        return Err(RegistryError::DenomNotFound(denom_id.to_string()));
    }
    store
        .get_onft(denom_id, onft_id)?
        .ok_or_else(|| RegistryError::OnftNotFound {
            denom_id: denom_id.to_string(),
            onft_id: onft_id.to_string(),
        })
}

/// Get a denom together with one page of its oNFTs, in ID order.
pub fn collection(
    store: &dyn KvRead,
    denom_id: &str,
    page: &PageRequest,
) -> Result<(Collection, PageResponse), RegistryError> {
    let denom = denom(store, denom_id)?;
    let prefix = keys::onft_prefix(denom_id);
    let (onfts, page_response) =
        paginate(store.scan_prefix(&prefix), prefix.len(), page, |_, value| {
            Ok(onft_store::codec::decode(value)?)
        })?;
    Ok((Collection::new(denom, onfts), page_response))
}

/// Total live supply of a denom, or one owner's held count in it.
///
/// An absent denom has zero supply; supply queries never fail on
/// unknown IDs.
pub fn supply(
    store: &dyn KvRead,
    denom_id: &str,
    owner: Option<&Address>,
) -> Result<u64, RegistryError> {
    match owner {
        Some(owner) => Ok(store.owned_count(owner, denom_id)?),
        None => Ok(store.get_supply(denom_id)?),
    }
}

/// The oNFT IDs an owner holds in one denom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCollection {
    pub denom_id: String,
    pub onft_ids: Vec<String>,
}

/// An owner's holdings across denoms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerHoldings {
    pub address: Address,
    pub id_collections: Vec<IdCollection>,
}

/// List the assets an owner holds, optionally narrowed to one denom,
/// grouped per denom. Pagination walks the ownership index directly, so
/// no scan of the primary store is needed.
pub fn owner_onfts(
    store: &dyn KvRead,
    owner: &Address,
    denom_id: Option<&str>,
    page: &PageRequest,
) -> Result<(OwnerHoldings, PageResponse), RegistryError> {
    let prefix = keys::owner_prefix(owner.as_str(), denom_id);
    let (pairs, page_response) = paginate(
        store.scan_prefix(&prefix),
        prefix.len(),
        page,
        |suffix, _| match denom_id {
            Some(denom_id) => {
                let onft_id = String::from_utf8(suffix.to_vec())
                    .map_err(|_| StorageError::CorruptKey(hex::encode(suffix)))?;
                Ok((denom_id.to_string(), onft_id))
            }
            None => Ok(keys::split_denom_suffix(suffix)?),
        },
    )?;

    let mut id_collections: Vec<IdCollection> = Vec::new();
    for (denom_id, onft_id) in pairs {
        match id_collections.last_mut() {
            Some(group) if group.denom_id == denom_id => group.onft_ids.push(onft_id),
            _ => id_collections.push(IdCollection {
                denom_id,
                onft_ids: vec![onft_id],
            }),
        }
    }

    Ok((
        OwnerHoldings {
            address: owner.clone(),
            id_collections,
        },
        page_response,
    ))
}

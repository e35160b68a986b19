use log::info;
use onft_core::error::RegistryError;
use onft_core::genesis::{validate_genesis, Collection, GenesisState};
use onft_core::Onft;
use onft_store::{DenomStore, KvRead, KvStore, OnftStore, ParamsStore, StoreBatch};

/// Load a genesis state into an empty store.
///
/// Every collection and oNFT goes through the same typed-store checks as
/// live traffic (minus fee preconditions), so an ID collision aborts the
/// whole import instead of silently merging. The import is staged in one
/// batch: a failed genesis leaves the store untouched.
pub fn init_genesis(store: &mut dyn KvStore, state: &GenesisState) -> Result<(), RegistryError> {
    validate_genesis(state)?;

    let mut batch = StoreBatch::new(store);
    let mut onft_count = 0usize;
    for collection in &state.collections {
        batch.save_denom(&collection.denom)?;
        for onft in &collection.onfts {
            batch.save_onft(&collection.denom.id, onft)?;
            batch.index_owner(&onft.owner, &collection.denom.id, &onft.id);
            batch.increase_supply(&collection.denom.id)?;
            onft_count += 1;
        }
    }
    batch.set_params(&state.params)?;
    batch.commit()?;

    info!(
        "imported genesis: {} denoms, {} oNFTs",
        state.collections.len(),
        onft_count
    );
    Ok(())
}

/// Snapshot the full registry state by enumerating the primary store.
pub fn export_genesis(store: &dyn KvRead) -> Result<GenesisState, RegistryError> {
    let mut collections = Vec::new();
    for denom in store.iter_denoms() {
        let denom = denom?;
        let onfts = store
            .iter_onfts(&denom.id)
            .collect::<Result<Vec<Onft>, _>>()?;
        collections.push(Collection::new(denom, onfts));
    }
    let params = store.get_params()?;
    Ok(GenesisState::new(collections, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use onft_core::{Address, Denom, Metadata, Onft, Params, RoyaltyShare};
    use onft_store::{MemoryKvStore, OwnerIndex, SupplyStore};

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    fn onft(id: &str, owner: &str) -> Onft {
        Onft::new(
            id,
            Metadata::new("Art", "", "ipfs://media", ""),
            "{}",
            addr(owner),
            true,
            false,
            false,
            RoyaltyShare::zero(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    fn sample_state() -> GenesisState {
        let gallery = Denom::new("artgallery1", "ART", "Art Gallery", "{}", addr("addra"));
        let zoo = Denom::new("zoo", "ZOO", "Zoo", "{}", addr("addrc"));
        GenesisState::new(
            vec![
                Collection::new(
                    gallery,
                    vec![onft("art001", "addrb"), onft("art002", "addrc")],
                ),
                Collection::new(zoo, vec![onft("ape001", "addrb")]),
            ],
            Params::default(),
        )
    }

    #[test]
    fn test_init_rebuilds_index_and_supply() {
        let mut store = MemoryKvStore::new();
        init_genesis(&mut store, &sample_state()).unwrap();

        assert_eq!(store.get_supply("artgallery1").unwrap(), 2);
        assert_eq!(store.get_supply("zoo").unwrap(), 1);
        assert!(store
            .is_indexed_owner(&addr("addrb"), "artgallery1", "art001")
            .unwrap());
        assert!(store
            .is_indexed_owner(&addr("addrc"), "artgallery1", "art002")
            .unwrap());
        assert_eq!(store.iter_owned(&addr("addrb"), None).count(), 2);
        assert_eq!(store.get_params().unwrap(), Params::default());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut store = MemoryKvStore::new();
        init_genesis(&mut store, &sample_state()).unwrap();

        let exported = export_genesis(&store).unwrap();

        let mut replica = MemoryKvStore::new();
        init_genesis(&mut replica, &exported).unwrap();

        // byte-identical stores, index and counters included
        assert_eq!(replica.dump(), store.dump());
    }

    #[test]
    fn test_init_rejects_id_collisions_atomically() {
        let gallery = Denom::new("artgallery1", "ART", "Art Gallery", "{}", addr("addra"));
        let state = GenesisState::new(
            vec![Collection::new(
                gallery,
                vec![onft("art001", "addrb"), onft("art001", "addrc")],
            )],
            Params::default(),
        );

        let mut store = MemoryKvStore::new();
        let result = init_genesis(&mut store, &state);
        assert!(matches!(
            result,
            Err(RegistryError::OnftAlreadyExists { .. })
        ));
        // nothing from the aborted import leaked into the store
        assert!(store.is_empty());
    }

    #[test]
    fn test_init_validates_like_live_traffic() {
        let mut state = sample_state();
        state.collections[0].onfts[0].metadata.media_uri = String::new();

        let mut store = MemoryKvStore::new();
        assert!(init_genesis(&mut store, &state).is_err());
        assert!(store.is_empty());
    }
}

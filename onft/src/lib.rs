//! Umbrella crate for the oNFT collection registry.
//!
//! Re-exports the data model (`onft-core`), the storage layer
//! (`onft-store`) and the state-transition engine with its query
//! surface (`onft-registry`).

pub use onft_core::{
    parse_flag, validate_genesis, Address, Coin, Collection, Denom, Event, EventKind,
    GenesisState, Metadata, MsgBurnOnft, MsgCreateDenom, MsgEditOnft, MsgMintOnft,
    MsgTransferDenom, MsgTransferOnft, MsgUpdateDenom, Onft, Params, RegistryError, RegistryMsg,
    RoyaltyShare, StorageError,
};
pub use onft_registry::{
    export_genesis, init_genesis, IdCollection, OwnerHoldings, PageRequest, PageResponse,
    Registry, TxContext,
};
pub use onft_store::{
    DenomStore, KvRead, KvStore, MemoryKvStore, OnftStore, OwnerIndex, ParamsStore, StoreBatch,
    SupplyStore,
};

#[cfg(feature = "rocksdb")]
pub use onft_store::RocksDbStorage;

/// Query entry points, re-exported as a module so hosts can mount them
/// next to their own RPC plumbing.
pub mod query {
    pub use onft_registry::query::{collection, denom, denoms, onft, owner_onfts, supply};
}

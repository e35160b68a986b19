pub mod batch;
pub mod codec;
pub mod denoms;
pub mod keys;
pub mod kv;
pub mod onfts;
pub mod owners;
pub mod params;
pub mod supply;

#[cfg(feature = "rocksdb")]
pub mod rocksdb_storage;

// Re-export the main types for convenience
pub use batch::StoreBatch;
pub use denoms::DenomStore;
pub use kv::{KvRead, KvStore, MemoryKvStore};
pub use onfts::OnftStore;
pub use owners::OwnerIndex;
pub use params::ParamsStore;
pub use supply::SupplyStore;

#[cfg(feature = "rocksdb")]
pub use rocksdb_storage::RocksDbStorage;

pub mod context;
pub mod genesis;
pub mod query;
pub mod registry;

// Re-export the main types for convenience
pub use context::TxContext;
pub use genesis::{export_genesis, init_genesis};
pub use query::{
    IdCollection, OwnerHoldings, PageRequest, PageResponse, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
pub use registry::Registry;

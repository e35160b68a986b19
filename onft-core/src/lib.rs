pub mod address;
pub mod denom;
pub mod error;
pub mod events;
pub mod genesis;
pub mod msgs;
pub mod onft;
pub mod params;
pub mod validation;

// Re-export the main types for convenience
pub use address::Address;
pub use denom::Denom;
pub use error::{RegistryError, StorageError};
pub use events::{Event, EventKind};
pub use genesis::{validate_genesis, Collection, GenesisState};
pub use msgs::{
    parse_flag, MsgBurnOnft, MsgCreateDenom, MsgEditOnft, MsgMintOnft, MsgTransferDenom,
    MsgTransferOnft, MsgUpdateDenom, RegistryMsg,
};
pub use onft::{Metadata, Onft, RoyaltyShare};
pub use params::{Coin, Params};

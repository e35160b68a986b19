use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-denomination token amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Registry parameters, persisted alongside the primary store.
///
/// The creation fee is charged by an external collaborator before a
/// create-denom request reaches the registry; the registry only stores
/// and exposes the configured amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub denom_creation_fee: Coin,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            denom_creation_fee: Coin::new("stake", 10_000_000),
        }
    }
}

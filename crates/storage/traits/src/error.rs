//! Error types for world state operations.

use ember_primitives::Address;
use thiserror::Error;

/// Error type for world state operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// Storage error from the backing store.
    #[error("storage error: {0}")]
    Storage(String),

    /// Crediting the account would exceed the balance width.
    #[error("balance overflow for {0}")]
    BalanceOverflow(Address),

    /// Debiting the account would take its balance below zero.
    #[error("insufficient balance for {0}")]
    InsufficientBalance(Address),

    /// Nonce would exceed `u64::MAX`.
    #[error("nonce overflow for {0}")]
    NonceOverflow(Address),
}

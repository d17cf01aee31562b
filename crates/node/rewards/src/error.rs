//! Reward distribution errors.

use ember_traits::StateError;
use thiserror::Error;

/// Errors raised while distributing rewards.
#[derive(Debug, Error)]
pub enum RewardError {
    /// An ommer is further from the block than the protocol allows.
    #[error(
        "ommer {ommer_number} is more than {max_generation} generations from block {block_number}"
    )]
    OmmerGenerationExceeded {
        /// Including block number.
        block_number: u64,
        /// Ommer block number.
        ommer_number: u64,
        /// Maximum allowed generation distance.
        max_generation: u64,
    },

    /// World state failure while crediting an account.
    #[error("state error: {0}")]
    State(#[from] StateError),
}

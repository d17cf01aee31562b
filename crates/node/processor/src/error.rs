//! Block processing errors.

use ember_executor::InvalidReason;
use ember_primitives::B256;
use ember_rewards::RewardError;
use ember_traits::StateError;
use thiserror::Error;

use crate::BlockOutput;

/// Result of processing a block.
pub type BlockProcessingResult = Result<BlockOutput, BlockProcessingError>;

/// Protocol-level reason a block was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// A transaction could not be included.
    TransactionInvalid,
    /// An ommer is older than the protocol allows.
    OmmerGenerationExceeded,
}

/// Errors raised while processing a block.
///
/// Whatever the variant, the ledger is left untouched.
#[derive(Debug, Error)]
pub enum BlockProcessingError {
    /// A transaction could not be included.
    #[error("transaction {index} ({hash}) is invalid: {reason}")]
    TransactionInvalid {
        /// Position in the block.
        index: usize,
        /// Transaction hash.
        hash: B256,
        /// Why it was rejected.
        reason: InvalidReason,
    },

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

    /// World state failure.
    #[error("state error: {0}")]
    State(#[from] StateError),
}

impl BlockProcessingError {
    /// The protocol failure reason, or `None` for state failures.
    pub const fn reason(&self) -> Option<FailureReason> {
        match self {
            Self::TransactionInvalid { .. } => Some(FailureReason::TransactionInvalid),
            Self::OmmerGenerationExceeded { .. } => Some(FailureReason::OmmerGenerationExceeded),
            Self::State(_) => None,
        }
    }
}

impl From<RewardError> for BlockProcessingError {
    fn from(err: RewardError) -> Self {
        match err {
            RewardError::OmmerGenerationExceeded { block_number, ommer_number, max_generation } => {
                Self::OmmerGenerationExceeded { block_number, ommer_number, max_generation }
            }
            RewardError::State(err) => Self::State(err),
        }
    }
}

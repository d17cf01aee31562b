//! Reward policy trait.

use alloy_consensus::Header;
use ember_primitives::Address;
use ember_traits::{EventSink, WorldUpdater};

use crate::RewardError;

/// Distributes block rewards at the end of a block.
///
/// Implementations only buffer balance increments into `state`. They never
/// commit; on error the caller discards everything the block buffered.
pub trait RewardPolicy: Send + Sync {
    /// Address credited with the block's transaction fees and block reward.
    fn beneficiary(&self, header: &Header) -> Address {
        header.beneficiary
    }

    /// Credit the block and ommer producers of `header`.
    fn reward(
        &self,
        state: &mut dyn WorldUpdater,
        header: &Header,
        ommers: &[Header],
        skip_zero_block_rewards: bool,
        events: &dyn EventSink,
    ) -> Result<(), RewardError>;
}

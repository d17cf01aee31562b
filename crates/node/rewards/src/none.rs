//! Policy for protocols without block rewards.

use alloy_consensus::Header;
use ember_traits::{EventSink, ProcessorEvent, WorldUpdater};

use crate::{RewardError, RewardPolicy};

/// Pays no rewards and touches no accounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoRewardPolicy;

impl RewardPolicy for NoRewardPolicy {
    fn reward(
        &self,
        _state: &mut dyn WorldUpdater,
        header: &Header,
        _ommers: &[Header],
        _skip_zero_block_rewards: bool,
        events: &dyn EventSink,
    ) -> Result<(), RewardError> {
        events.emit(ProcessorEvent::RewardsSkipped { number: header.number });
        Ok(())
    }
}

//! Reward policy selected from configuration.

use alloy_consensus::Header;
use ember_config::{ProtocolConfig, RewardKind};
use ember_primitives::Address;
use ember_traits::{EventSink, WorldUpdater};

use crate::{FixedBeneficiary, NoRewardPolicy, OmmerRewardPolicy, RewardError, RewardPolicy};

/// The reward policy variants a protocol configuration can select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfiguredRewards {
    /// Pay the header coinbase and ommer producers.
    Ommer(OmmerRewardPolicy),
    /// Pay a fixed address and ommer producers.
    FixedBeneficiary(OmmerRewardPolicy<FixedBeneficiary>),
    /// Pay nothing.
    None(NoRewardPolicy),
}

impl ConfiguredRewards {
    /// Build the policy described by `config`.
    pub fn from_config(config: &ProtocolConfig) -> Self {
        let policy = OmmerRewardPolicy::new(config.block_reward, config.max_ommer_generation);
        match config.rewards {
            RewardKind::Ommer => Self::Ommer(policy),
            RewardKind::FixedBeneficiary { address } => {
                Self::FixedBeneficiary(policy.with_beneficiary(FixedBeneficiary(address)))
            }
            RewardKind::None => Self::None(NoRewardPolicy),
        }
    }
}

impl From<&ProtocolConfig> for ConfiguredRewards {
    fn from(config: &ProtocolConfig) -> Self {
        Self::from_config(config)
    }
}

impl RewardPolicy for ConfiguredRewards {
    fn beneficiary(&self, header: &Header) -> Address {
        match self {
            Self::Ommer(policy) => policy.beneficiary(header),
            Self::FixedBeneficiary(policy) => policy.beneficiary(header),
            Self::None(policy) => policy.beneficiary(header),
        }
    }

    fn reward(
        &self,
        state: &mut dyn WorldUpdater,
        header: &Header,
        ommers: &[Header],
        skip_zero_block_rewards: bool,
        events: &dyn EventSink,
    ) -> Result<(), RewardError> {
        match self {
            Self::Ommer(policy) => {
                policy.reward(state, header, ommers, skip_zero_block_rewards, events)
            }
            Self::FixedBeneficiary(policy) => {
                policy.reward(state, header, ommers, skip_zero_block_rewards, events)
            }
            Self::None(policy) => {
                policy.reward(state, header, ommers, skip_zero_block_rewards, events)
            }
        }
    }
}

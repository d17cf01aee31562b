//! Per-fork protocol constants.

use ember_primitives::{Address, Wei};
use serde::{Deserialize, Serialize};

/// Default base block reward, in ether.
pub const DEFAULT_BLOCK_REWARD_ETHER: u64 = 5;

/// Default maximum generation distance between a block and a rewarded ommer.
pub const DEFAULT_MAX_OMMER_GENERATION: u64 = 6;

/// Which reward policy pays out at the end of a block.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewardKind {
    /// Pay the header coinbase and every ommer coinbase.
    #[default]
    Ommer,
    /// Pay a fixed address instead of the header coinbase; ommers are still paid.
    FixedBeneficiary {
        /// Address receiving the block reward.
        address: Address,
    },
    /// Pay nothing.
    None,
}

/// Constants a block is processed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Base reward for producing a block.
    #[serde(default = "default_block_reward")]
    pub block_reward: Wei,

    /// Oldest ommer generation that may still be rewarded.
    #[serde(default = "default_max_ommer_generation")]
    pub max_ommer_generation: u64,

    /// Skip reward distribution entirely when the block reward is zero.
    #[serde(default)]
    pub skip_zero_block_rewards: bool,

    /// Reward variant.
    #[serde(default)]
    pub rewards: RewardKind,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            block_reward: default_block_reward(),
            max_ommer_generation: DEFAULT_MAX_OMMER_GENERATION,
            skip_zero_block_rewards: false,
            rewards: RewardKind::Ommer,
        }
    }
}

impl ProtocolConfig {
    /// Set the base block reward.
    #[must_use]
    pub const fn with_block_reward(mut self, block_reward: Wei) -> Self {
        self.block_reward = block_reward;
        self
    }

    /// Set the maximum ommer generation.
    #[must_use]
    pub const fn with_max_ommer_generation(mut self, max: u64) -> Self {
        self.max_ommer_generation = max;
        self
    }

    /// Set whether a zero block reward skips distribution.
    #[must_use]
    pub const fn with_skip_zero_block_rewards(mut self, skip: bool) -> Self {
        self.skip_zero_block_rewards = skip;
        self
    }

    /// Set the reward variant.
    #[must_use]
    pub const fn with_rewards(mut self, rewards: RewardKind) -> Self {
        self.rewards = rewards;
        self
    }
}

fn default_block_reward() -> Wei {
    Wei::from_ether(DEFAULT_BLOCK_REWARD_ETHER)
}

const fn default_max_ommer_generation() -> u64 {
    DEFAULT_MAX_OMMER_GENERATION
}

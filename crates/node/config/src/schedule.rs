//! Block-number keyed protocol schedule.

use std::path::Path;

use ember_primitives::Wei;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ProtocolConfig};

/// A protocol upgrade and the constants it activates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fork {
    /// Human readable name.
    pub name: String,
    /// First block processed under this fork.
    pub activation_block: u64,
    /// Constants in force from the activation block on.
    #[serde(default)]
    pub protocol: ProtocolConfig,
}

impl Fork {
    /// Create a fork.
    pub fn new(name: impl Into<String>, activation_block: u64, protocol: ProtocolConfig) -> Self {
        Self { name: name.into(), activation_block, protocol }
    }
}

#[derive(Serialize, Deserialize)]
struct RawSchedule {
    forks: Vec<Fork>,
}

/// Ordered list of forks, starting at genesis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawSchedule", into = "RawSchedule")]
pub struct ProtocolSchedule {
    forks: Vec<Fork>,
}

impl ProtocolSchedule {
    /// Validate and build a schedule.
    pub fn new(forks: Vec<Fork>) -> Result<Self, ConfigError> {
        let first = forks.first().ok_or(ConfigError::EmptySchedule)?;
        if first.activation_block != 0 {
            return Err(ConfigError::FirstForkNotGenesis(first.activation_block));
        }
        for pair in forks.windows(2) {
            if pair[1].activation_block <= pair[0].activation_block {
                return Err(ConfigError::ForkOutOfOrder {
                    name: pair[1].name.clone(),
                    activation: pair[1].activation_block,
                    previous: pair[0].activation_block,
                });
            }
        }
        Ok(Self { forks })
    }

    /// A schedule with a single fork active from genesis.
    pub fn single(protocol: ProtocolConfig) -> Self {
        Self { forks: vec![Fork::new("genesis", 0, protocol)] }
    }

    /// Ethereum mainnet block reward history.
    pub fn mainnet() -> Self {
        let base = ProtocolConfig::default();
        Self {
            forks: vec![
                Fork::new("frontier", 0, base.clone().with_block_reward(Wei::from_ether(5))),
                Fork::new(
                    "byzantium",
                    4_370_000,
                    base.clone().with_block_reward(Wei::from_ether(3)),
                ),
                Fork::new(
                    "constantinople",
                    7_280_000,
                    base.clone().with_block_reward(Wei::from_ether(2)),
                ),
                Fork::new(
                    "paris",
                    15_537_394,
                    base.with_block_reward(Wei::ZERO).with_skip_zero_block_rewards(true),
                ),
            ],
        }
    }

    /// Forks in activation order.
    pub fn forks(&self) -> &[Fork] {
        &self.forks
    }

    /// Fork in force at block `number`.
    pub fn fork_at(&self, number: u64) -> &Fork {
        let active = self.forks.partition_point(|fork| fork.activation_block <= number);
        &self.forks[active.saturating_sub(1)]
    }

    /// Protocol constants in force at block `number`.
    pub fn protocol_at(&self, number: u64) -> &ProtocolConfig {
        &self.fork_at(number).protocol
    }

    /// Parse a schedule from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RawSchedule = toml::from_str(s)?;
        Self::try_from(raw)
    }

    /// Parse a schedule from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RawSchedule = serde_json::from_str(s)?;
        Self::try_from(raw)
    }

    /// Load a schedule from a file, choosing JSON for `.json` and TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Render the schedule as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(&RawSchedule::from(self.clone()))?)
    }
}

impl Default for ProtocolSchedule {
    fn default() -> Self {
        Self::single(ProtocolConfig::default())
    }
}

impl TryFrom<RawSchedule> for ProtocolSchedule {
    type Error = ConfigError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        Self::new(raw.forks)
    }
}

impl From<ProtocolSchedule> for RawSchedule {
    fn from(schedule: ProtocolSchedule) -> Self {
        Self { forks: schedule.forks }
    }
}

//! Configuration types for the ember block processor.
#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/ember/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::ConfigError;

mod protocol;
pub use protocol::{
    DEFAULT_BLOCK_REWARD_ETHER, DEFAULT_MAX_OMMER_GENERATION, ProtocolConfig, RewardKind,
};

mod schedule;
pub use schedule::{Fork, ProtocolSchedule};

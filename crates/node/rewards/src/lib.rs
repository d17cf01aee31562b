//! Block reward policies for ember.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/ember/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod beneficiary;
pub use beneficiary::{BeneficiaryCalculator, CoinbaseBeneficiary, FixedBeneficiary};

mod configured;
pub use configured::ConfiguredRewards;

mod error;
pub use error::RewardError;

mod none;
pub use none::NoRewardPolicy;

mod ommer;
pub use ommer::{COINBASE_OMMER_DIVISOR, OMMER_DISTANCE_DIVISOR, OmmerRewardPolicy};

mod traits;
pub use traits::RewardPolicy;

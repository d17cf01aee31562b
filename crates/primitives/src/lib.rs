#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/refcell/ember/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub use alloy_primitives::{
    Address, B256, Bloom, Bytes, KECCAK256_EMPTY, Log, LogData, U256, b256, keccak256,
};

mod wei;
pub use wei::{ETHER, Wei};

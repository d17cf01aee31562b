//! Block execution context.

use alloy_consensus::Header;
use ember_primitives::{Address, B256};

/// The parts of a block header that transaction execution sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockContext {
    /// Block number.
    pub number: u64,
    /// Address credited with transaction fees.
    pub beneficiary: Address,
    /// Maximum gas the block may consume.
    pub gas_limit: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Hash of the parent block.
    pub parent_hash: B256,
}

impl BlockContext {
    /// Extract the execution context from a header.
    pub const fn from_header(header: &Header) -> Self {
        Self {
            number: header.number,
            beneficiary: header.beneficiary,
            gas_limit: header.gas_limit,
            timestamp: header.timestamp,
            parent_hash: header.parent_hash,
        }
    }

    /// Gas still available after `cumulative_gas_used` has been spent.
    pub const fn remaining_gas(&self, cumulative_gas_used: u64) -> u64 {
        self.gas_limit.saturating_sub(cumulative_gas_used)
    }
}

impl From<&Header> for BlockContext {
    fn from(header: &Header) -> Self {
        Self::from_header(header)
    }
}

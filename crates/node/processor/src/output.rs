//! Output of a processed block.

use ember_executor::TransactionReceipt;
use ember_primitives::Bloom;

/// What a successfully processed block produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockOutput {
    /// Receipts in transaction order.
    pub receipts: Vec<TransactionReceipt>,
    /// Total gas used by the block.
    pub gas_used: u64,
    /// Union of every receipt bloom.
    pub logs_bloom: Bloom,
}

impl BlockOutput {
    /// Accumulate an included transaction's receipt.
    pub(crate) fn push(&mut self, receipt: TransactionReceipt) {
        self.gas_used = receipt.cumulative_gas_used();
        self.logs_bloom.accrue_bloom(receipt.logs_bloom());
        self.receipts.push(receipt);
    }
}

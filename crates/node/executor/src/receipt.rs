//! Transaction receipts.

use alloy_consensus::{Eip658Value, Receipt, ReceiptWithBloom};
use ember_primitives::{B256, Bloom, Log};

/// Receipt for a transaction included in a block.
///
/// Wraps the consensus receipt and its bloom with metadata that is not part of
/// the consensus encoding (tx hash, per-tx gas).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    /// Transaction hash.
    pub tx_hash: B256,
    /// Gas used by this transaction alone (not cumulative).
    pub gas_used: u64,
    /// Status, cumulative gas, logs and log bloom.
    pub receipt: ReceiptWithBloom<Receipt<Log>>,
}

impl TransactionReceipt {
    /// Returns whether the transaction succeeded.
    pub const fn success(&self) -> bool {
        self.receipt.receipt.status.coerce_status()
    }

    /// Returns the cumulative gas used up to and including this transaction.
    pub const fn cumulative_gas_used(&self) -> u64 {
        self.receipt.receipt.cumulative_gas_used
    }

    /// Returns the logs emitted during execution.
    pub fn logs(&self) -> &[Log] {
        &self.receipt.receipt.logs
    }

    /// Returns the bloom filter over this receipt's logs.
    pub const fn logs_bloom(&self) -> &Bloom {
        &self.receipt.logs_bloom
    }
}

/// Build the receipt for an included transaction.
pub fn build_receipt(
    tx_hash: B256,
    success: bool,
    gas_used: u64,
    cumulative_gas_used: u64,
    logs: Vec<Log>,
) -> TransactionReceipt {
    let mut logs_bloom = Bloom::ZERO;
    for log in &logs {
        logs_bloom.accrue_log(log);
    }
    let receipt = Receipt { status: Eip658Value::Eip658(success), cumulative_gas_used, logs };
    TransactionReceipt { tx_hash, gas_used, receipt: ReceiptWithBloom { receipt, logs_bloom } }
}

#[cfg(test)]
mod tests {
    use ember_primitives::{Address, Bytes, LogData};

    use super::*;

    fn log(byte: u8) -> Log {
        Log {
            address: Address::repeat_byte(byte),
            data: LogData::new_unchecked(vec![B256::repeat_byte(byte)], Bytes::new()),
        }
    }

    #[test]
    fn receipt_carries_status_and_gas() {
        let receipt = build_receipt(B256::repeat_byte(0x01), true, 21_000, 42_000, Vec::new());
        assert!(receipt.success());
        assert_eq!(receipt.gas_used, 21_000);
        assert_eq!(receipt.cumulative_gas_used(), 42_000);
        assert!(receipt.logs().is_empty());
        assert_eq!(*receipt.logs_bloom(), Bloom::ZERO);
    }

    #[test]
    fn reverted_receipt_reports_failure() {
        let receipt = build_receipt(B256::ZERO, false, 5, 5, Vec::new());
        assert!(!receipt.success());
    }

    #[test]
    fn bloom_covers_every_log() {
        let logs = vec![log(0x0a), log(0x0b)];
        let receipt = build_receipt(B256::ZERO, true, 1, 1, logs.clone());
        assert_eq!(receipt.logs(), logs.as_slice());
        for log in &logs {
            let mut single = Bloom::ZERO;
            single.accrue_log(log);
            assert!(receipt.logs_bloom().contains(&single));
        }
    }

    #[test]
    fn building_is_deterministic() {
        let a = build_receipt(B256::ZERO, true, 7, 7, vec![log(0x01)]);
        let b = build_receipt(B256::ZERO, true, 7, 7, vec![log(0x01)]);
        assert_eq!(a, b);
    }
}

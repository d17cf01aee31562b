//! Transaction execution outcome types.

use ember_primitives::Log;
use thiserror::Error;

/// Why a transaction cannot be included in a block.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Nonce is below the sender's account nonce.
    #[error("nonce too low: expected {expected}, got {actual}")]
    NonceTooLow {
        /// Account nonce.
        expected: u64,
        /// Transaction nonce.
        actual: u64,
    },
    /// Nonce is above the sender's account nonce.
    #[error("nonce too high: expected {expected}, got {actual}")]
    NonceTooHigh {
        /// Account nonce.
        expected: u64,
        /// Transaction nonce.
        actual: u64,
    },
    /// Sender nonce cannot be incremented.
    #[error("nonce {nonce} is at its maximum")]
    NonceMax {
        /// Account nonce.
        nonce: u64,
    },
    /// Sender cannot cover the up-front cost.
    #[error("insufficient balance for up-front cost")]
    InsufficientBalance,
    /// Transaction gas limit exceeds what the block has left.
    #[error("gas limit {gas_limit} exceeds remaining block gas {remaining}")]
    GasLimitExceeded {
        /// Transaction gas limit.
        gas_limit: u64,
        /// Gas left in the block.
        remaining: u64,
    },
    /// Transaction gas limit does not cover intrinsic gas.
    #[error("intrinsic gas too low: need {required}, got {gas_limit}")]
    IntrinsicGasTooLow {
        /// Intrinsic gas.
        required: u64,
        /// Transaction gas limit.
        gas_limit: u64,
    },
    /// Any other reason reported by the execution engine.
    #[error("{0}")]
    Other(String),
}

/// Classification of an executed transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Executed successfully.
    Success,
    /// Included, but execution reverted.
    Reverted,
    /// Cannot be included in the block.
    Invalid(InvalidReason),
}

impl TransactionStatus {
    /// Whether the transaction may be included in a block.
    pub const fn is_includable(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// Result of executing one transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutcome {
    /// Classification.
    pub status: TransactionStatus,
    /// Gas consumed by this transaction alone.
    pub gas_used: u64,
    /// Logs emitted during execution.
    pub logs: Vec<Log>,
}

impl TransactionOutcome {
    /// Successful execution.
    pub const fn success(gas_used: u64, logs: Vec<Log>) -> Self {
        Self { status: TransactionStatus::Success, gas_used, logs }
    }

    /// Reverted execution. Reverted transactions emit no logs.
    pub const fn reverted(gas_used: u64) -> Self {
        Self { status: TransactionStatus::Reverted, gas_used, logs: Vec::new() }
    }

    /// Transaction that cannot be included.
    pub const fn invalid(reason: InvalidReason) -> Self {
        Self { status: TransactionStatus::Invalid(reason), gas_used: 0, logs: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includable_statuses() {
        assert!(TransactionStatus::Success.is_includable());
        assert!(TransactionStatus::Reverted.is_includable());
        assert!(!TransactionStatus::Invalid(InvalidReason::InsufficientBalance).is_includable());
    }

    #[test]
    fn constructors() {
        let outcome = TransactionOutcome::success(21_000, Vec::new());
        assert_eq!(outcome.status, TransactionStatus::Success);
        assert_eq!(outcome.gas_used, 21_000);

        let outcome = TransactionOutcome::reverted(30_000);
        assert_eq!(outcome.status, TransactionStatus::Reverted);
        assert!(outcome.logs.is_empty());

        let outcome = TransactionOutcome::invalid(InvalidReason::Other("bad".to_string()));
        assert_eq!(outcome.gas_used, 0);
        assert!(!outcome.status.is_includable());
    }

    #[test]
    fn invalid_reason_display() {
        let reason = InvalidReason::NonceTooLow { expected: 3, actual: 1 };
        assert_eq!(reason.to_string(), "nonce too low: expected 3, got 1");

        let reason = InvalidReason::GasLimitExceeded { gas_limit: 50, remaining: 10 };
        assert_eq!(reason.to_string(), "gas limit 50 exceeds remaining block gas 10");

        let reason = InvalidReason::Other("blob fee too low".to_string());
        assert_eq!(reason.to_string(), "blob fee too low");
    }
}

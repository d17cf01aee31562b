//! Structured events emitted during block processing.

use std::sync::Arc;

use ember_primitives::{Address, B256, Wei};
use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

/// An observable step of block processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessorEvent {
    /// Processing of a block has begun.
    BlockStarted {
        /// Block number.
        number: u64,
        /// Number of transactions in the block.
        transactions: usize,
        /// Number of ommer headers referenced by the block.
        ommers: usize,
    },
    /// A transaction was included and its overlay committed into the block scope.
    TransactionApplied {
        /// Position in the block.
        index: usize,
        /// Transaction hash.
        hash: B256,
        /// Whether execution succeeded (as opposed to reverting).
        success: bool,
        /// Gas used by this transaction alone.
        gas_used: u64,
        /// Gas used by the block so far, including this transaction.
        cumulative_gas_used: u64,
    },
    /// A transaction could not be included; the block is aborted.
    TransactionRejected {
        /// Position in the block.
        index: usize,
        /// Transaction hash.
        hash: B256,
        /// Why it was rejected.
        reason: String,
    },
    /// The block beneficiary was credited.
    CoinbaseRewarded {
        /// Credited address.
        beneficiary: Address,
        /// Amount credited.
        amount: Wei,
    },
    /// An ommer producer was credited.
    OmmerRewarded {
        /// Credited address.
        beneficiary: Address,
        /// Ommer block number.
        ommer_number: u64,
        /// Generation distance from the including block.
        distance: u64,
        /// Amount credited.
        amount: Wei,
    },
    /// Rewards were not applied because the protocol pays none.
    RewardsSkipped {
        /// Block number.
        number: u64,
    },
    /// An ommer is older than the protocol allows.
    OmmerTooOld {
        /// Including block number.
        block_number: u64,
        /// Ommer block number.
        ommer_number: u64,
        /// Maximum allowed generation distance.
        max_generation: u64,
    },
    /// Every mutation of the block was committed to the ledger.
    BlockCommitted {
        /// Block number.
        number: u64,
        /// Total gas used.
        gas_used: u64,
        /// Number of receipts produced.
        receipts: usize,
    },
    /// Every mutation of the block was discarded.
    BlockDiscarded {
        /// Block number.
        number: u64,
        /// Why the block failed.
        reason: String,
    },
}

/// Receiver of [`ProcessorEvent`]s.
///
/// Passed explicitly into the orchestrator and reward policies.
pub trait EventSink: Send + Sync {
    /// Record an event.
    fn emit(&self, event: ProcessorEvent);
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: ProcessorEvent) {}
}

/// Sink that forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: ProcessorEvent) {
        match event {
            ProcessorEvent::BlockStarted { number, transactions, ommers } => {
                debug!(number, transactions, ommers, "processing block");
            }
            ProcessorEvent::TransactionApplied {
                index,
                hash,
                success,
                gas_used,
                cumulative_gas_used,
            } => {
                trace!(index, ?hash, success, gas_used, cumulative_gas_used, "applied transaction");
            }
            ProcessorEvent::TransactionRejected { index, hash, reason } => {
                warn!(index, ?hash, %reason, "rejected transaction");
            }
            ProcessorEvent::CoinbaseRewarded { beneficiary, amount } => {
                trace!(%beneficiary, %amount, "credited block reward");
            }
            ProcessorEvent::OmmerRewarded { beneficiary, ommer_number, distance, amount } => {
                trace!(%beneficiary, ommer_number, distance, %amount, "credited ommer reward");
            }
            ProcessorEvent::RewardsSkipped { number } => {
                trace!(number, "skipped zero block reward");
            }
            ProcessorEvent::OmmerTooOld { block_number, ommer_number, max_generation } => {
                warn!(block_number, ommer_number, max_generation, "ommer exceeds max generation");
            }
            ProcessorEvent::BlockCommitted { number, gas_used, receipts } => {
                info!(number, gas_used, receipts, "processed block");
            }
            ProcessorEvent::BlockDiscarded { number, reason } => {
                warn!(number, %reason, "discarded block");
            }
        }
    }
}

/// Sink that keeps every event in memory, in emission order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<ProcessorEvent>>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<ProcessorEvent> {
        self.events.lock().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Forget every recorded event.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: ProcessorEvent) {
        self.events.lock().push(event);
    }
}

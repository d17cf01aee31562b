//! Block processing driven by a fork schedule.

use alloy_consensus::Header;
use ember_config::ProtocolSchedule;
use ember_executor::TransactionProcessor;
use ember_traits::{EventSink, WorldState};
use tracing::debug;

use crate::{BlockProcessingResult, BlockProcessor};

/// Processes blocks with the protocol parameters active at each block number.
#[derive(Clone, Debug)]
pub struct ScheduledProcessor<E> {
    schedule: ProtocolSchedule,
    executor: E,
}

impl<E> ScheduledProcessor<E> {
    /// Create a scheduled processor.
    pub const fn new(schedule: ProtocolSchedule, executor: E) -> Self {
        Self { schedule, executor }
    }

    /// The fork schedule.
    pub const fn schedule(&self) -> &ProtocolSchedule {
        &self.schedule
    }
}

impl<E: TransactionProcessor> ScheduledProcessor<E> {
    /// Processor configured for the fork active at `number`.
    pub fn processor_at(&self, number: u64) -> BlockProcessor<&E> {
        BlockProcessor::from_config(&self.executor, self.schedule.protocol_at(number))
    }

    /// Apply a block using the fork active at its number.
    pub fn process_block<W: WorldState>(
        &self,
        state: &mut W,
        header: &Header,
        transactions: &[E::Tx],
        ommers: &[Header],
        events: &dyn EventSink,
    ) -> BlockProcessingResult {
        let fork = self.schedule.fork_at(header.number);
        debug!(number = header.number, fork = %fork.name, "selected fork");
        self.processor_at(header.number).process_block(
            state,
            header,
            transactions,
            ommers,
            events,
        )
    }
}

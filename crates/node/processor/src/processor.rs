//! Block state transition.

use alloy_consensus::Header;
use ember_config::ProtocolConfig;
use ember_executor::{
    BlockContext, BlockTransaction, InvalidReason, TransactionOutcome, TransactionProcessor,
    TransactionStatus, build_receipt,
};
use ember_rewards::{ConfiguredRewards, RewardPolicy};
use ember_traits::{
    EventSink, ProcessorEvent, ScopedUpdater, StateError, WorldState, WorldUpdater,
};

use crate::{BlockOutput, BlockProcessingError, BlockProcessingResult};

/// Applies blocks to a world state.
///
/// Transactions run strictly in order, each in a nested overlay that is
/// committed into the block overlay once the transaction is included. Rewards
/// are credited into the block overlay after the last transaction, and the
/// block overlay reaches the ledger only if every step succeeded.
#[derive(Clone, Debug)]
pub struct BlockProcessor<E, R = ConfiguredRewards> {
    executor: E,
    rewards: R,
    skip_zero_block_rewards: bool,
}

impl<E, R> BlockProcessor<E, R> {
    /// Create a processor from its parts.
    pub const fn new(executor: E, rewards: R, skip_zero_block_rewards: bool) -> Self {
        Self { executor, rewards, skip_zero_block_rewards }
    }

    /// Transaction execution engine.
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Reward policy.
    pub const fn rewards(&self) -> &R {
        &self.rewards
    }

    /// Whether a zero block reward skips reward distribution entirely.
    pub const fn skip_zero_block_rewards(&self) -> bool {
        self.skip_zero_block_rewards
    }
}

impl<E> BlockProcessor<E> {
    /// Create a processor whose reward policy is selected by `config`.
    pub fn from_config(executor: E, config: &ProtocolConfig) -> Self {
        Self::new(executor, ConfiguredRewards::from_config(config), config.skip_zero_block_rewards)
    }
}

impl<E: TransactionProcessor, R: RewardPolicy> BlockProcessor<E, R> {
    /// Apply a block to `state`.
    ///
    /// On success every mutation is committed and the receipts are returned in
    /// transaction order. On failure `state` is unchanged.
    pub fn process_block<W: WorldState>(
        &self,
        state: &mut W,
        header: &Header,
        transactions: &[E::Tx],
        ommers: &[Header],
        events: &dyn EventSink,
    ) -> BlockProcessingResult {
        events.emit(ProcessorEvent::BlockStarted {
            number: header.number,
            transactions: transactions.len(),
            ommers: ommers.len(),
        });

        let mut block = state.updater();
        let result = self.apply(&mut block, header, transactions, ommers, events);
        let result = match result {
            Ok(output) => block.commit().map(|()| output).map_err(BlockProcessingError::from),
            Err(err) => {
                block.discard();
                Err(err)
            }
        };

        match &result {
            Ok(output) => events.emit(ProcessorEvent::BlockCommitted {
                number: header.number,
                gas_used: output.gas_used,
                receipts: output.receipts.len(),
            }),
            Err(err) => events.emit(ProcessorEvent::BlockDiscarded {
                number: header.number,
                reason: err.to_string(),
            }),
        }
        result
    }

    fn apply<U: ScopedUpdater>(
        &self,
        block: &mut U,
        header: &Header,
        transactions: &[E::Tx],
        ommers: &[Header],
        events: &dyn EventSink,
    ) -> BlockProcessingResult {
        let context = BlockContext {
            beneficiary: self.rewards.beneficiary(header),
            ..BlockContext::from_header(header)
        };
        let mut output = BlockOutput {
            receipts: Vec::with_capacity(transactions.len()),
            ..Default::default()
        };

        for (index, tx) in transactions.iter().enumerate() {
            let hash = tx.hash();
            let mut nested = block.nested();
            let outcome = match self.execute(&mut nested, tx, &context, output.gas_used) {
                Ok(outcome) => outcome,
                Err(err) => {
                    nested.discard();
                    return Err(err.into());
                }
            };

            let success = match outcome.status {
                TransactionStatus::Success => true,
                TransactionStatus::Reverted => false,
                TransactionStatus::Invalid(reason) => {
                    nested.discard();
                    events.emit(ProcessorEvent::TransactionRejected {
                        index,
                        hash,
                        reason: reason.to_string(),
                    });
                    return Err(BlockProcessingError::TransactionInvalid { index, hash, reason });
                }
            };
            nested.commit()?;

            let cumulative_gas_used = output.gas_used.saturating_add(outcome.gas_used);
            output.push(build_receipt(
                hash,
                success,
                outcome.gas_used,
                cumulative_gas_used,
                outcome.logs,
            ));
            events.emit(ProcessorEvent::TransactionApplied {
                index,
                hash,
                success,
                gas_used: outcome.gas_used,
                cumulative_gas_used,
            });
        }

        self.rewards.reward(block, header, ommers, self.skip_zero_block_rewards, events)?;
        Ok(output)
    }

    fn execute(
        &self,
        state: &mut dyn WorldUpdater,
        tx: &E::Tx,
        context: &BlockContext,
        cumulative_gas_used: u64,
    ) -> Result<TransactionOutcome, StateError> {
        let remaining = context.remaining_gas(cumulative_gas_used);
        if tx.gas_limit() > remaining {
            return Ok(TransactionOutcome::invalid(InvalidReason::GasLimitExceeded {
                gas_limit: tx.gas_limit(),
                remaining,
            }));
        }
        self.executor.process(state, tx, context, cumulative_gas_used)
    }
}

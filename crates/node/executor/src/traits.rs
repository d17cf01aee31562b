//! Core execution traits.

use ember_primitives::B256;
use ember_traits::{StateError, WorldUpdater};

use crate::{BlockContext, TransactionOutcome};

/// What block processing needs to know about a transaction.
pub trait BlockTransaction {
    /// Transaction hash.
    fn hash(&self) -> B256;

    /// Maximum gas the transaction may consume.
    fn gas_limit(&self) -> u64;
}

/// Executes a single transaction against a mutable world state view.
///
/// Abstracts the execution engine so different backends can be plugged into
/// block processing. Implementations classify the transaction through
/// [`TransactionOutcome::status`]; a [`StateError`] is reserved for failures of
/// the world state itself.
pub trait TransactionProcessor: Send + Sync {
    /// Transaction type accepted for execution.
    type Tx: BlockTransaction;

    /// Execute `tx` on top of `state`.
    ///
    /// Mutations are made through `state`, which the caller commits for
    /// included transactions and discards otherwise.
    fn process(
        &self,
        state: &mut dyn WorldUpdater,
        tx: &Self::Tx,
        context: &BlockContext,
        cumulative_gas_used: u64,
    ) -> Result<TransactionOutcome, StateError>;
}

impl<T: TransactionProcessor + ?Sized> TransactionProcessor for &T {
    type Tx = T::Tx;

    fn process(
        &self,
        state: &mut dyn WorldUpdater,
        tx: &Self::Tx,
        context: &BlockContext,
        cumulative_gas_used: u64,
    ) -> Result<TransactionOutcome, StateError> {
        (**self).process(state, tx, context, cumulative_gas_used)
    }
}

//! Reference processor for plain value transfers.

use ember_primitives::{
    Address, B256, Bytes, KECCAK256_EMPTY, Log, LogData, U256, Wei, b256, keccak256,
};
use ember_traits::{StateError, WorldUpdater};
use tracing::trace;

use crate::{
    BlockContext, BlockTransaction, InvalidReason, TransactionOutcome, TransactionProcessor,
};

/// Base gas cost for a transaction.
pub const TX_BASE_GAS: u64 = 21000;

/// `keccak256("Transfer(address,address,uint256)")`.
pub const TRANSFER_EVENT_TOPIC: B256 =
    b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

/// A value transfer between two accounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    /// Sender.
    pub from: Address,
    /// Recipient.
    pub to: Address,
    /// Sender nonce.
    pub nonce: u64,
    /// Amount moved from sender to recipient.
    pub value: Wei,
    /// Maximum gas the transfer may consume.
    pub gas_limit: u64,
    /// Price paid per unit of gas.
    pub gas_price: Wei,
}

impl Transfer {
    /// Maximum amount the sender must hold before execution.
    fn upfront_cost(&self) -> Option<Wei> {
        let gas = self.gas_price.into_inner().checked_mul(U256::from(self.gas_limit))?;
        Wei::new(gas).checked_add(self.value)
    }
}

impl BlockTransaction for Transfer {
    fn hash(&self) -> B256 {
        let mut buf = Vec::with_capacity(20 + 20 + 8 + 32 + 8 + 32);
        buf.extend_from_slice(self.from.as_slice());
        buf.extend_from_slice(self.to.as_slice());
        buf.extend_from_slice(&self.nonce.to_be_bytes());
        buf.extend_from_slice(&self.value.into_inner().to_be_bytes::<32>());
        buf.extend_from_slice(&self.gas_limit.to_be_bytes());
        buf.extend_from_slice(&self.gas_price.into_inner().to_be_bytes::<32>());
        keccak256(buf)
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }
}

/// Executes [`Transfer`]s.
///
/// Every included transfer costs [`TX_BASE_GAS`], bumps the sender nonce and
/// pays its fee to the block beneficiary. Recipient code is never run: a
/// transfer to an account with code reverts, keeping the fee but not moving
/// the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransferProcessor;

impl TransferProcessor {
    /// Create a transfer processor.
    pub const fn new() -> Self {
        Self
    }
}

impl TransactionProcessor for TransferProcessor {
    type Tx = Transfer;

    fn process(
        &self,
        state: &mut dyn WorldUpdater,
        tx: &Transfer,
        context: &BlockContext,
        _cumulative_gas_used: u64,
    ) -> Result<TransactionOutcome, StateError> {
        if tx.gas_limit < TX_BASE_GAS {
            return Ok(TransactionOutcome::invalid(InvalidReason::IntrinsicGasTooLow {
                required: TX_BASE_GAS,
                gas_limit: tx.gas_limit,
            }));
        }

        let sender = state.account(&tx.from)?.unwrap_or_default();
        if tx.nonce < sender.nonce {
            return Ok(TransactionOutcome::invalid(InvalidReason::NonceTooLow {
                expected: sender.nonce,
                actual: tx.nonce,
            }));
        }
        if tx.nonce > sender.nonce {
            return Ok(TransactionOutcome::invalid(InvalidReason::NonceTooHigh {
                expected: sender.nonce,
                actual: tx.nonce,
            }));
        }
        if sender.nonce == u64::MAX {
            return Ok(TransactionOutcome::invalid(InvalidReason::NonceMax { nonce: sender.nonce }));
        }
        match tx.upfront_cost() {
            Some(cost) if cost <= sender.balance => {}
            _ => return Ok(TransactionOutcome::invalid(InvalidReason::InsufficientBalance)),
        }

        let gas_used = TX_BASE_GAS;
        let fee = tx.gas_price.wrapping_mul_u64(gas_used);
        let reverts =
            state.account(&tx.to)?.is_some_and(|recipient| recipient.code_hash != KECCAK256_EMPTY);

        {
            let mut sender = state.get_or_create(tx.from)?;
            sender.increment_nonce()?;
            sender.debit(fee)?;
            if !reverts {
                sender.debit(tx.value)?;
            }
        }
        state.get_or_create(context.beneficiary)?.increment_balance(fee)?;

        if reverts {
            trace!(from = %tx.from, to = %tx.to, "transfer to contract reverted");
            return Ok(TransactionOutcome::reverted(gas_used));
        }

        state.get_or_create(tx.to)?.increment_balance(tx.value)?;
        let log = Log {
            address: tx.to,
            data: LogData::new_unchecked(
                vec![TRANSFER_EVENT_TOPIC, tx.from.into_word(), tx.to.into_word()],
                Bytes::from(tx.value.into_inner().to_be_bytes::<32>().to_vec()),
            ),
        };
        Ok(TransactionOutcome::success(gas_used, vec![log]))
    }
}

#[cfg(test)]
mod tests {
    use ember_overlay::MemoryWorldState;
    use ember_traits::{Account, ScopedUpdater, WorldState};

    use super::*;
    use crate::TransactionStatus;

    const ALICE: Address = Address::new([0xa1; 20]);
    const BOB: Address = Address::new([0xb0; 20]);
    const COINBASE: Address = Address::new([0xcb; 20]);

    fn context() -> BlockContext {
        BlockContext {
            number: 1,
            beneficiary: COINBASE,
            gas_limit: 30_000_000,
            timestamp: 0,
            parent_hash: B256::ZERO,
        }
    }

    fn transfer(nonce: u64, value: u64) -> Transfer {
        Transfer {
            from: ALICE,
            to: BOB,
            nonce,
            value: Wei::from(value),
            gas_limit: TX_BASE_GAS,
            gas_price: Wei::from(1),
        }
    }

    fn run(ledger: &mut MemoryWorldState, tx: &Transfer) -> TransactionOutcome {
        let mut updater = ledger.updater();
        let outcome = TransferProcessor.process(&mut updater, tx, &context(), 0).unwrap();
        if outcome.status.is_includable() {
            updater.commit().unwrap();
        } else {
            updater.discard();
        }
        outcome
    }

    #[test]
    fn transfer_event_topic_matches_signature() {
        assert_eq!(TRANSFER_EVENT_TOPIC, keccak256("Transfer(address,address,uint256)"));
    }

    #[test]
    fn successful_transfer_moves_value_and_fee() {
        let mut ledger = MemoryWorldState::with_genesis([(ALICE, Wei::from(100_000))]);
        let outcome = run(&mut ledger, &transfer(0, 1_000));

        assert_eq!(outcome.status, TransactionStatus::Success);
        assert_eq!(outcome.gas_used, TX_BASE_GAS);
        assert_eq!(outcome.logs.len(), 1);
        assert_eq!(outcome.logs[0].topics()[0], TRANSFER_EVENT_TOPIC);
        assert_eq!(ledger.balance(&ALICE), Wei::from(100_000 - 1_000 - 21_000));
        assert_eq!(ledger.balance(&BOB), Wei::from(1_000));
        assert_eq!(ledger.balance(&COINBASE), Wei::from(21_000));
        assert_eq!(ledger.account(&ALICE).unwrap().unwrap().nonce, 1);
    }

    #[test]
    fn wrong_nonce_is_invalid() {
        let mut ledger = MemoryWorldState::with_genesis([(ALICE, Wei::from(100_000))]);
        let outcome = run(&mut ledger, &transfer(1, 1));
        assert_eq!(
            outcome.status,
            TransactionStatus::Invalid(InvalidReason::NonceTooHigh { expected: 0, actual: 1 })
        );

        let funded = Account { nonce: 5, ..Account::with_balance(Wei::from(100_000)) };
        ledger.insert_account(ALICE, funded);
        let outcome = run(&mut ledger, &transfer(4, 1));
        assert_eq!(
            outcome.status,
            TransactionStatus::Invalid(InvalidReason::NonceTooLow { expected: 5, actual: 4 })
        );
    }

    #[test]
    fn exhausted_nonce_is_invalid_and_leaves_state() {
        let exhausted = Account { nonce: u64::MAX, ..Account::with_balance(Wei::from(100_000)) };
        let mut ledger = MemoryWorldState::new();
        ledger.insert_account(ALICE, exhausted);
        let before = ledger.clone();

        let outcome = run(&mut ledger, &transfer(u64::MAX, 1));

        assert_eq!(
            outcome.status,
            TransactionStatus::Invalid(InvalidReason::NonceMax { nonce: u64::MAX })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn unaffordable_transfer_is_invalid_and_leaves_state() {
        let mut ledger = MemoryWorldState::with_genesis([(ALICE, Wei::from(21_500))]);
        let before = ledger.clone();
        let outcome = run(&mut ledger, &transfer(0, 501));
        assert_eq!(outcome.status, TransactionStatus::Invalid(InvalidReason::InsufficientBalance));
        assert_eq!(ledger, before);
    }

    #[test]
    fn low_gas_limit_is_invalid() {
        let mut ledger = MemoryWorldState::with_genesis([(ALICE, Wei::from(100_000))]);
        let tx = Transfer { gas_limit: TX_BASE_GAS - 1, ..transfer(0, 1) };
        let outcome = run(&mut ledger, &tx);
        assert!(matches!(
            outcome.status,
            TransactionStatus::Invalid(InvalidReason::IntrinsicGasTooLow { .. })
        ));
    }

    #[test]
    fn transfer_to_contract_reverts_but_charges_fee() {
        let mut ledger = MemoryWorldState::with_genesis([(ALICE, Wei::from(100_000))]);
        let contract = Account { code_hash: B256::repeat_byte(0xc0), ..Account::empty() };
        ledger.insert_account(BOB, contract);

        let outcome = run(&mut ledger, &transfer(0, 1_000));
        assert_eq!(outcome.status, TransactionStatus::Reverted);
        assert!(outcome.logs.is_empty());
        assert_eq!(ledger.balance(&ALICE), Wei::from(100_000 - 21_000));
        assert_eq!(ledger.balance(&BOB), Wei::ZERO);
        assert_eq!(ledger.balance(&COINBASE), Wei::from(21_000));
        assert_eq!(ledger.account(&ALICE).unwrap().unwrap().nonce, 1);
    }

    #[test]
    fn hash_depends_on_every_field() {
        let base = transfer(0, 1);
        let variants = [
            Transfer { from: BOB, ..base.clone() },
            Transfer { to: ALICE, ..base.clone() },
            Transfer { nonce: 1, ..base.clone() },
            Transfer { value: Wei::from(2), ..base.clone() },
            Transfer { gas_limit: 21_001, ..base.clone() },
            Transfer { gas_price: Wei::from(2), ..base.clone() },
        ];
        for variant in variants {
            assert_ne!(variant.hash(), base.hash());
        }
        assert_eq!(base.hash(), transfer(0, 1).hash());
    }
}

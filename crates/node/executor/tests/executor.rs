//! Integration tests for ember-executor.

use alloy_consensus::Header;
use ember_executor::{
    BlockContext, BlockTransaction, InvalidReason, TX_BASE_GAS, TransactionProcessor,
    TransactionStatus, Transfer, TransferProcessor, build_receipt,
};
use ember_overlay::MemoryWorldState;
use ember_primitives::{Address, B256, Wei};
use ember_traits::{ScopedUpdater, WorldState};
use rstest::rstest;

const SENDER: Address = Address::new([0x11; 20]);
const RECIPIENT: Address = Address::new([0x22; 20]);
const COINBASE: Address = Address::new([0xcb; 20]);

fn header() -> Header {
    Header { number: 7, beneficiary: COINBASE, gas_limit: 1_000_000, ..Default::default() }
}

fn transfer(nonce: u64, value: u64, gas_price: u64) -> Transfer {
    Transfer {
        from: SENDER,
        to: RECIPIENT,
        nonce,
        value: Wei::from(value),
        gas_limit: TX_BASE_GAS,
        gas_price: Wei::from(gas_price),
    }
}

// ----------------------------------------------------------------------------
// Sequential execution inside one block scope
// ----------------------------------------------------------------------------

#[test]
fn test_later_transactions_see_earlier_nonce_bumps() {
    let mut ledger = MemoryWorldState::with_genesis([(SENDER, Wei::from(1_000_000))]);
    let context = BlockContext::from(&header());
    let mut block = ledger.updater();
    let mut cumulative = 0;

    for nonce in 0..3 {
        let mut scope = block.nested();
        let outcome = TransferProcessor
            .process(&mut scope, &transfer(nonce, 10, 1), &context, cumulative)
            .expect("state available");
        assert_eq!(outcome.status, TransactionStatus::Success);
        scope.commit().expect("commit");
        cumulative += outcome.gas_used;
    }

    // Replaying nonce 0 now fails against the block scope.
    let mut scope = block.nested();
    let outcome = TransferProcessor
        .process(&mut scope, &transfer(0, 10, 1), &context, cumulative)
        .expect("state available");
    assert_eq!(
        outcome.status,
        TransactionStatus::Invalid(InvalidReason::NonceTooLow { expected: 3, actual: 0 })
    );
    scope.discard();

    block.commit().expect("commit");
    assert_eq!(ledger.balance(&RECIPIENT), Wei::from(30));
    assert_eq!(ledger.balance(&COINBASE), Wei::from(3 * TX_BASE_GAS));
    assert_eq!(cumulative, 3 * TX_BASE_GAS);
}

#[test]
fn test_discarded_block_scope_leaves_ledger() {
    let mut ledger = MemoryWorldState::with_genesis([(SENDER, Wei::from(1_000_000))]);
    let before = ledger.clone();
    let context = BlockContext::from(&header());

    let mut block = ledger.updater();
    let mut scope = block.nested();
    let outcome = TransferProcessor
        .process(&mut scope, &transfer(0, 500, 2), &context, 0)
        .expect("state available");
    assert!(outcome.status.is_includable());
    scope.commit().expect("commit");
    block.discard();

    assert_eq!(ledger, before);
}

// ----------------------------------------------------------------------------
// Fees and receipts
// ----------------------------------------------------------------------------

#[rstest]
#[case(0)]
#[case(1)]
#[case(1_000_000_000)]
fn test_fee_paid_to_beneficiary(#[case] gas_price: u64) {
    let funds = 1_000_000_000_000_000u64;
    let mut ledger = MemoryWorldState::with_genesis([(SENDER, Wei::from(funds))]);
    let context = BlockContext::from(&header());

    let mut block = ledger.updater();
    let outcome = TransferProcessor
        .process(&mut block, &transfer(0, 1, gas_price), &context, 0)
        .expect("state available");
    assert_eq!(outcome.status, TransactionStatus::Success);
    block.commit().expect("commit");

    let fee = gas_price * TX_BASE_GAS;
    assert_eq!(ledger.balance(&COINBASE), Wei::from(fee));
    assert_eq!(ledger.balance(&SENDER), Wei::from(funds - fee - 1));
}

#[test]
fn test_receipt_from_transfer_outcome() {
    let mut ledger = MemoryWorldState::with_genesis([(SENDER, Wei::from(1_000_000))]);
    let context = BlockContext::from(&header());
    let tx = transfer(0, 1, 1);

    let mut block = ledger.updater();
    let outcome =
        TransferProcessor.process(&mut block, &tx, &context, 0).expect("state available");
    block.commit().expect("commit");

    let receipt = build_receipt(tx.hash(), true, outcome.gas_used, outcome.gas_used, outcome.logs);
    assert!(receipt.success());
    assert_eq!(receipt.tx_hash, tx.hash());
    assert_eq!(receipt.cumulative_gas_used(), TX_BASE_GAS);
    assert_eq!(receipt.logs().len(), 1);
    assert_ne!(receipt.tx_hash, B256::ZERO);
}

#[test]
fn test_block_transaction_gas_limit() {
    let tx = Transfer { gas_limit: 50_000, ..transfer(0, 0, 0) };
    assert_eq!(tx.gas_limit(), 50_000);
}

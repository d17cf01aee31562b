//! In-memory account ledger.

use std::collections::BTreeMap;

use ember_primitives::{Address, U256, Wei};
use ember_traits::{Account, StateError, WorldState};

use crate::{ChangeSet, Layer, Updater};

/// Account ledger held in memory, ordered by address.
///
/// Cloning produces an independent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryWorldState {
    accounts: BTreeMap<Address, Account>,
}

impl MemoryWorldState {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-funded with the given balances.
    pub fn with_genesis(alloc: impl IntoIterator<Item = (Address, Wei)>) -> Self {
        let accounts =
            alloc.into_iter().map(|(address, balance)| (address, Account::with_balance(balance)));
        Self { accounts: accounts.collect() }
    }

    /// Insert or replace an account directly, bypassing any overlay.
    pub fn insert_account(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }

    /// All committed accounts in address order.
    pub const fn accounts(&self) -> &BTreeMap<Address, Account> {
        &self.accounts
    }

    /// Committed balance of `address`, zero if absent.
    pub fn balance(&self, address: &Address) -> Wei {
        self.accounts.get(address).map(|account| account.balance).unwrap_or_default()
    }

    /// Sum of every committed balance.
    pub fn total_balance(&self) -> U256 {
        self.accounts
            .values()
            .fold(U256::ZERO, |total, account| total.saturating_add(account.balance.into_inner()))
    }
}

impl Layer for MemoryWorldState {
    fn lookup(&self, address: &Address) -> Result<Option<Account>, StateError> {
        Ok(self.accounts.get(address).cloned())
    }

    fn apply(&mut self, changes: ChangeSet) {
        self.accounts.extend(changes);
    }
}

impl WorldState for MemoryWorldState {
    type Updater<'a>
        = Updater<'a>
    where
        Self: 'a;

    fn updater(&mut self) -> Updater<'_> {
        Updater::new(self)
    }

    fn account(&self, address: &Address) -> Result<Option<Account>, StateError> {
        self.lookup(address)
    }
}

//! Buffered account changes.

use std::collections::{BTreeMap, btree_map};

use ember_primitives::Address;
use ember_traits::Account;

/// Account values written inside an overlay, keyed by address.
///
/// Entries hold the full post-mutation account, so merging is last-writer-wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    accounts: BTreeMap<Address, Account>,
}

impl ChangeSet {
    /// Create an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of accounts with changes.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Buffered value for `address`, if any.
    pub fn get(&self, address: &Address) -> Option<&Account> {
        self.accounts.get(address)
    }

    /// Insert or replace an account.
    pub fn insert(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }

    /// Merge a newer change set into this one.
    pub fn merge(&mut self, newer: Self) {
        self.accounts.extend(newer.accounts);
    }

    /// Iterate over changed accounts in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Account)> {
        self.accounts.iter()
    }

    pub(crate) fn entry(&mut self, address: Address) -> btree_map::Entry<'_, Address, Account> {
        self.accounts.entry(address)
    }
}

impl IntoIterator for ChangeSet {
    type Item = (Address, Account);
    type IntoIter = btree_map::IntoIter<Address, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.into_iter()
    }
}

//! Account values and mutable account handles.

use ember_primitives::{Address, B256, KECCAK256_EMPTY, Wei};

use crate::StateError;

/// An account as seen through the world state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// Transaction count.
    pub nonce: u64,
    /// Balance in wei.
    pub balance: Wei,
    /// Hash of the account code. Opaque to block processing.
    pub code_hash: B256,
}

impl Account {
    /// An empty account with no code.
    pub const fn empty() -> Self {
        Self { nonce: 0, balance: Wei::ZERO, code_hash: KECCAK256_EMPTY }
    }

    /// An empty account holding `balance`.
    pub const fn with_balance(balance: Wei) -> Self {
        Self { nonce: 0, balance, code_hash: KECCAK256_EMPTY }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::empty()
    }
}

/// Mutable handle to an account buffered inside an updater.
///
/// Block processing itself only ever calls [`AccountMut::increment_balance`].
/// Debits and nonce bumps exist for transaction execution.
#[derive(Debug)]
pub struct AccountMut<'a> {
    address: Address,
    account: &'a mut Account,
}

impl<'a> AccountMut<'a> {
    /// Wrap a buffered account.
    pub const fn new(address: Address, account: &'a mut Account) -> Self {
        Self { address, account }
    }

    /// Address of the account.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Current balance.
    pub const fn balance(&self) -> Wei {
        self.account.balance
    }

    /// Current nonce.
    pub const fn nonce(&self) -> u64 {
        self.account.nonce
    }

    /// Credit `amount` to the account.
    pub fn increment_balance(&mut self, amount: Wei) -> Result<(), StateError> {
        self.account.balance = self
            .account
            .balance
            .checked_add(amount)
            .ok_or(StateError::BalanceOverflow(self.address))?;
        Ok(())
    }

    /// Debit `amount` from the account.
    pub fn debit(&mut self, amount: Wei) -> Result<(), StateError> {
        self.account.balance = self
            .account
            .balance
            .checked_sub(amount)
            .ok_or(StateError::InsufficientBalance(self.address))?;
        Ok(())
    }

    /// Bump the nonce by one.
    pub fn increment_nonce(&mut self) -> Result<(), StateError> {
        self.account.nonce =
            self.account.nonce.checked_add(1).ok_or(StateError::NonceOverflow(self.address))?;
        Ok(())
    }
}

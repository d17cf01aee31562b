//! Nested buffering overlay.

use std::collections::btree_map::Entry;

use ember_primitives::Address;
use ember_traits::{Account, AccountMut, ScopedUpdater, StateError, WorldUpdater};
use tracing::trace;

use crate::ChangeSet;

/// A scope that an [`Updater`] reads through and commits into.
pub(crate) trait Layer {
    /// Resolve an account through this layer and everything beneath it.
    fn lookup(&self, address: &Address) -> Result<Option<Account>, StateError>;

    /// Absorb a committed child change set.
    fn apply(&mut self, changes: ChangeSet);
}

/// Overlay that buffers account mutations on top of a parent scope.
///
/// Reads fall through to the parent for accounts this overlay has not
/// touched. Nothing reaches the parent until [`ScopedUpdater::commit`].
pub struct Updater<'p> {
    parent: &'p mut dyn Layer,
    changes: ChangeSet,
}

impl<'p> Updater<'p> {
    pub(crate) fn new(parent: &'p mut dyn Layer) -> Self {
        Self { parent, changes: ChangeSet::new() }
    }

    /// Mutations buffered so far.
    pub const fn changes(&self) -> &ChangeSet {
        &self.changes
    }
}

impl std::fmt::Debug for Updater<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater").field("changes", &self.changes).finish_non_exhaustive()
    }
}

impl Layer for Updater<'_> {
    fn lookup(&self, address: &Address) -> Result<Option<Account>, StateError> {
        if let Some(account) = self.changes.get(address) {
            return Ok(Some(account.clone()));
        }
        self.parent.lookup(address)
    }

    fn apply(&mut self, changes: ChangeSet) {
        self.changes.merge(changes);
    }
}

impl WorldUpdater for Updater<'_> {
    fn account(&self, address: &Address) -> Result<Option<Account>, StateError> {
        self.lookup(address)
    }

    fn get_or_create(&mut self, address: Address) -> Result<AccountMut<'_>, StateError> {
        let account = match self.changes.entry(address) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let current = self.parent.lookup(&address)?.unwrap_or_default();
                entry.insert(current)
            }
        };
        Ok(AccountMut::new(address, account))
    }
}

impl ScopedUpdater for Updater<'_> {
    type Nested<'a>
        = Updater<'a>
    where
        Self: 'a;

    fn nested(&mut self) -> Updater<'_> {
        Updater::new(self)
    }

    fn commit(self) -> Result<(), StateError> {
        let Self { parent, changes } = self;
        trace!(accounts = changes.len(), "committing overlay");
        parent.apply(changes);
        Ok(())
    }

    fn discard(self) {
        trace!(accounts = self.changes.len(), "discarding overlay");
    }
}

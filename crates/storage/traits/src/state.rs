//! World state boundary traits.

use ember_primitives::Address;

use crate::{Account, AccountMut, StateError};

/// Mutable view over accounts.
///
/// This is the surface handed to transaction execution and reward policies.
/// It is object safe so those collaborators can take `&mut dyn WorldUpdater`
/// regardless of how the overlay is stacked.
pub trait WorldUpdater {
    /// Read an account, returning `None` if it does not exist in this view.
    fn account(&self, address: &Address) -> Result<Option<Account>, StateError>;

    /// Fetch an account for mutation, creating an empty one if absent.
    fn get_or_create(&mut self, address: Address) -> Result<AccountMut<'_>, StateError>;
}

/// A buffered overlay with an explicit lifecycle.
///
/// Mutations made through the overlay are invisible to its parent until
/// [`ScopedUpdater::commit`] applies them atomically. [`ScopedUpdater::discard`]
/// drops them. Both consume the overlay, so each scope is finished exactly once.
pub trait ScopedUpdater: WorldUpdater + Sized {
    /// Overlay type opened on top of this one.
    type Nested<'a>: ScopedUpdater
    where
        Self: 'a;

    /// Open a child overlay whose commit lands in `self`, not in the root ledger.
    fn nested(&mut self) -> Self::Nested<'_>;

    /// Apply every buffered mutation to the immediate parent scope.
    fn commit(self) -> Result<(), StateError>;

    /// Drop every buffered mutation, leaving the parent untouched.
    fn discard(self);
}

/// The versioned account ledger that block processing runs against.
pub trait WorldState {
    /// Block-scoped overlay type.
    type Updater<'a>: ScopedUpdater
    where
        Self: 'a;

    /// Open a top-level overlay over the ledger.
    fn updater(&mut self) -> Self::Updater<'_>;

    /// Read a committed account.
    fn account(&self, address: &Address) -> Result<Option<Account>, StateError>;
}

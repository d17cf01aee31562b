//! Account balance denomination.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Number of wei in one ether.
pub const ETHER: u64 = 1_000_000_000_000_000_000;

/// An unsigned 256-bit amount of wei.
///
/// Balances can only go below zero through [`Wei::checked_sub`], which refuses
/// to. Everything else is either checked ([`Wei::checked_add`]) or explicitly
/// modular, mirroring the word arithmetic used by reward formulas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wei(U256);

impl Wei {
    /// Zero wei.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wrap a raw 256-bit value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Amount of whole ether, expressed in wei.
    pub fn from_ether(ether: u64) -> Self {
        Self(U256::from(ether).wrapping_mul(U256::from(ETHER)))
    }

    /// Returns the underlying 256-bit value.
    pub const fn into_inner(self) -> U256 {
        self.0
    }

    /// Returns `true` for zero wei.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Addition that fails instead of wrapping past 2^256 - 1.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Subtraction that fails instead of going below zero.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Addition modulo 2^256.
    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Multiplication modulo 2^256.
    #[must_use]
    pub fn wrapping_mul_u64(self, rhs: u64) -> Self {
        Self(self.0.wrapping_mul(U256::from(rhs)))
    }

    /// Subtraction modulo 2^256.
    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Floor division by a non-zero constant.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_u64(self, divisor: u64) -> Self {
        Self(self.0 / U256::from(divisor))
    }
}

impl From<u64> for Wei {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Wei {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Wei> for U256 {
    fn from(value: Wei) -> Self {
        value.0
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

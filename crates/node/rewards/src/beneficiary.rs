//! Block reward beneficiary selection.

use alloy_consensus::Header;
use ember_primitives::Address;

/// Picks the address credited with a block's reward.
pub trait BeneficiaryCalculator: Send + Sync {
    /// Beneficiary for `header`.
    fn beneficiary(&self, header: &Header) -> Address;
}

/// Credits the header's coinbase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoinbaseBeneficiary;

impl BeneficiaryCalculator for CoinbaseBeneficiary {
    fn beneficiary(&self, header: &Header) -> Address {
        header.beneficiary
    }
}

/// Credits the same address regardless of the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBeneficiary(pub Address);

impl BeneficiaryCalculator for FixedBeneficiary {
    fn beneficiary(&self, _header: &Header) -> Address {
        self.0
    }
}

//! Ommer-aware block reward policy.

use alloy_consensus::Header;
use ember_primitives::{Address, Wei};
use ember_traits::{EventSink, ProcessorEvent, WorldUpdater};

use crate::{BeneficiaryCalculator, CoinbaseBeneficiary, RewardError, RewardPolicy};

/// Divisor of the per-ommer bonus paid to the block beneficiary.
pub const COINBASE_OMMER_DIVISOR: u64 = 32;

/// Divisor of the per-generation penalty applied to ommer rewards.
pub const OMMER_DISTANCE_DIVISOR: u64 = 8;

/// Pays the block beneficiary and every ommer producer.
///
/// Reward arithmetic is 256-bit modular. The ommer formula
/// `R - floor(R * d / 8)` is not clamped: it stays non-negative only while
/// `max_generation` keeps `d` at or below 8, which holds for every protocol
/// this policy is configured for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OmmerRewardPolicy<B = CoinbaseBeneficiary> {
    block_reward: Wei,
    max_generation: u64,
    beneficiary: B,
}

impl OmmerRewardPolicy {
    /// Policy paying the header coinbase.
    pub const fn new(block_reward: Wei, max_generation: u64) -> Self {
        Self { block_reward, max_generation, beneficiary: CoinbaseBeneficiary }
    }
}

impl<B> OmmerRewardPolicy<B> {
    /// Replace the beneficiary calculator.
    pub fn with_beneficiary<C: BeneficiaryCalculator>(self, beneficiary: C) -> OmmerRewardPolicy<C> {
        OmmerRewardPolicy {
            block_reward: self.block_reward,
            max_generation: self.max_generation,
            beneficiary,
        }
    }

    /// Base block reward.
    pub const fn block_reward(&self) -> Wei {
        self.block_reward
    }

    /// Maximum rewarded ommer generation.
    pub const fn max_generation(&self) -> u64 {
        self.max_generation
    }

    /// `R + floor(R * ommers / 32)`.
    pub fn coinbase_reward(&self, ommers: usize) -> Wei {
        let bonus =
            self.block_reward.wrapping_mul_u64(ommers as u64).div_u64(COINBASE_OMMER_DIVISOR);
        self.block_reward.wrapping_add(bonus)
    }

    /// `R - floor(R * distance / 8)`.
    pub fn ommer_reward(&self, distance: u64) -> Wei {
        let penalty =
            self.block_reward.wrapping_mul_u64(distance).div_u64(OMMER_DISTANCE_DIVISOR);
        self.block_reward.wrapping_sub(penalty)
    }
}

impl<B: BeneficiaryCalculator> RewardPolicy for OmmerRewardPolicy<B> {
    fn beneficiary(&self, header: &Header) -> Address {
        self.beneficiary.beneficiary(header)
    }

    fn reward(
        &self,
        state: &mut dyn WorldUpdater,
        header: &Header,
        ommers: &[Header],
        skip_zero_block_rewards: bool,
        events: &dyn EventSink,
    ) -> Result<(), RewardError> {
        if skip_zero_block_rewards && self.block_reward.is_zero() {
            events.emit(ProcessorEvent::RewardsSkipped { number: header.number });
            return Ok(());
        }

        let beneficiary = RewardPolicy::beneficiary(self, header);
        let amount = self.coinbase_reward(ommers.len());
        state.get_or_create(beneficiary)?.increment_balance(amount)?;
        events.emit(ProcessorEvent::CoinbaseRewarded { beneficiary, amount });

        for ommer in ommers {
            let distance = header.number.saturating_sub(ommer.number);
            if distance > self.max_generation {
                events.emit(ProcessorEvent::OmmerTooOld {
                    block_number: header.number,
                    ommer_number: ommer.number,
                    max_generation: self.max_generation,
                });
                return Err(RewardError::OmmerGenerationExceeded {
                    block_number: header.number,
                    ommer_number: ommer.number,
                    max_generation: self.max_generation,
                });
            }

            let amount = self.ommer_reward(distance);
            state.get_or_create(ommer.beneficiary)?.increment_balance(amount)?;
            events.emit(ProcessorEvent::OmmerRewarded {
                beneficiary: ommer.beneficiary,
                ommer_number: ommer.number,
                distance,
                amount,
            });
        }

        Ok(())
    }
}

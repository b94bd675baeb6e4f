use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{BRACKET_COUNT, DEFAULT_REWARD_BREAKDOWN, DENOMINATOR_BPS};
use crate::error::LotteryError;

use super::Bracket;

/// Share of the prize pool given to each bracket, in basis points.
/// Index 0 is the 1-digit bracket, index 5 the 6-digit bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardBreakdown(pub [u16; BRACKET_COUNT]);

impl Default for RewardBreakdown {
    fn default() -> Self {
        Self(DEFAULT_REWARD_BREAKDOWN)
    }
}

impl RewardBreakdown {
    pub fn new(weights: [u16; BRACKET_COUNT]) -> Result<Self, LotteryError> {
        let breakdown = Self(weights);
        breakdown.validate()?;
        Ok(breakdown)
    }

    /// The weight of a bracket, in basis points.
    pub fn weight(&self, bracket: Bracket) -> u128 {
        self.0[bracket.index()] as u128
    }

    /// Sum of all weights, in basis points.
    pub fn total(&self) -> u128 {
        self.0.iter().map(|&w| w as u128).sum()
    }

    /// Weights may leave part of the pool unallocated but never exceed it.
    pub fn validate(&self) -> Result<(), LotteryError> {
        let total = self.total();
        if total > DENOMINATOR_BPS {
            warn!(total, "Reward breakdown exceeds pool");
            return Err(LotteryError::InvalidRewardBreakdown);
        }
        Ok(())
    }

    /// The part of `pool` assigned to a bracket, rounded down.
    pub fn allocation(&self, bracket: Bracket, pool: u128) -> Result<u128, LotteryError> {
        pool.checked_mul(self.weight(bracket))
            .map(|amount| amount / DENOMINATOR_BPS)
            .ok_or(LotteryError::ArithmeticOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE_TOKEN;

    #[test]
    fn test_validate() {
        assert!(RewardBreakdown::new([250, 375, 625, 1250, 2500, 5000]).is_ok());
        assert!(RewardBreakdown::new([0, 0, 0, 0, 0, 0]).is_ok());
        assert!(RewardBreakdown::new([0, 0, 0, 0, 5000, 4000]).is_ok());
        assert_eq!(
            RewardBreakdown::new([250, 375, 625, 1250, 2500, 5001]),
            Err(LotteryError::InvalidRewardBreakdown)
        );
        // Sums past u16::MAX must not wrap.
        assert_eq!(
            RewardBreakdown::new([u16::MAX; BRACKET_COUNT]),
            Err(LotteryError::InvalidRewardBreakdown)
        );
    }

    #[test]
    fn test_allocation() {
        let breakdown = RewardBreakdown::default();
        let pool = 100 * ONE_TOKEN;
        assert_eq!(breakdown.allocation(Bracket::Match6, pool), Ok(50 * ONE_TOKEN));
        assert_eq!(breakdown.allocation(Bracket::Match1, pool), Ok(25 * ONE_TOKEN / 10));
        assert_eq!(breakdown.allocation(Bracket::Match1, 39), Ok(0));
        assert_eq!(breakdown.allocation(Bracket::Match6, 3), Ok(1));
        assert_eq!(
            breakdown.allocation(Bracket::Match6, u128::MAX),
            Err(LotteryError::ArithmeticOverflow)
        );
    }
}

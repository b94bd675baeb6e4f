use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{
    DEFAULT_DISCOUNT_DIVISOR, DEFAULT_MAX_TICKETS_PER_BUY, DENOMINATOR_BPS, MIN_DISCOUNT_DIVISOR,
    ONE_TOKEN,
};
use crate::error::LotteryError;

use super::RewardBreakdown;

/// Round parameters set by the lottery operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    /// Share of the pool given to each bracket, in basis points.
    pub reward_breakdown: RewardBreakdown,

    /// Share of collected funds burned, in basis points.
    pub burning_share: u16,

    /// Share of collected funds sent to competitions and referrals, in basis points.
    pub competition_and_ref_share: u16,

    /// Divisor of the bulk purchase discount. Larger means a smaller discount.
    pub discount_divisor: u128,

    /// Price of a single ticket, in token units.
    pub ticket_price: u128,

    /// Maximum number of tickets bought in one purchase.
    pub max_tickets_per_buy: u64,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            reward_breakdown: RewardBreakdown::default(),
            burning_share: 0,
            competition_and_ref_share: 0,
            discount_divisor: DEFAULT_DISCOUNT_DIVISOR,
            ticket_price: ONE_TOKEN,
            max_tickets_per_buy: DEFAULT_MAX_TICKETS_PER_BUY,
        }
    }
}

impl LotteryConfig {
    /// Parse a JSON configuration. Missing fields take their default value.
    pub fn from_json(data: &str) -> Result<Self, LotteryError> {
        let config: Self = serde_json::from_str(data).map_err(|err| {
            warn!(%err, "Failed to parse lottery config");
            LotteryError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LotteryError> {
        self.reward_breakdown.validate()?;
        validate_shares(self.burning_share, self.competition_and_ref_share)?;
        validate_discount_divisor(self.discount_divisor)?;
        if self.max_tickets_per_buy == 0 {
            warn!("Max tickets per buy must be positive");
            return Err(LotteryError::InvalidConfig);
        }
        Ok(())
    }
}

/// Burning plus competition shares may not exceed the whole pool.
pub fn validate_shares(burning_share: u16, competition_and_ref_share: u16) -> Result<(), LotteryError> {
    let total = burning_share as u128 + competition_and_ref_share as u128;
    if total > DENOMINATOR_BPS {
        warn!(burning_share, competition_and_ref_share, "Shares exceed pool");
        return Err(LotteryError::InvalidShares);
    }
    Ok(())
}

pub fn validate_discount_divisor(discount_divisor: u128) -> Result<(), LotteryError> {
    if discount_divisor < MIN_DISCOUNT_DIVISOR {
        warn!(discount_divisor, "Discount divisor must be greater than minimum");
        return Err(LotteryError::InvalidDiscountDivisor);
    }
    Ok(())
}

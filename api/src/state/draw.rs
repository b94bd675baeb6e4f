use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::consts::BRACKET_COUNT;
use crate::error::LotteryError;

use super::{validate_winning_number, Bracket};

/// Per-bracket outcome of counting a round's tickets against the winning number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPayouts {
    /// Amount paid to each winning ticket of a bracket.
    pub reward_per_winner: [u128; BRACKET_COUNT],

    /// Number of tickets credited to each bracket.
    pub winner_counts: [u64; BRACKET_COUNT],

    /// Allocation of brackets without winners, carried into the next round.
    pub rollover: u128,
}

/// The finalized outcome of one lottery round.
///
/// Built once when the winning number is revealed and never mutated afterwards.
/// The layout is plain old data, so a record can be stored and reloaded byte for byte.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct DrawResult {
    /// Amount paid to each winning ticket, per bracket.
    reward_per_winner: [u128; BRACKET_COUNT],

    /// The prize pool the brackets were split from.
    amount_to_distribute: u128,

    /// Amount injected into the next round.
    rollover: u128,

    /// The lottery round id.
    lottery_id: u64,

    /// Number of winning tickets, per bracket.
    winner_counts: [u64; BRACKET_COUNT],

    /// The drawn number, between 1_000_000 and 1_999_999.
    winning_number: u32,

    /// Padding for alignment.
    #[serde(skip)]
    _padding: [u8; 4],
}

impl DrawResult {
    pub fn new(
        lottery_id: u64,
        winning_number: u32,
        amount_to_distribute: u128,
        payouts: &BracketPayouts,
    ) -> Self {
        Self {
            reward_per_winner: payouts.reward_per_winner,
            amount_to_distribute,
            rollover: payouts.rollover,
            lottery_id,
            winner_counts: payouts.winner_counts,
            winning_number,
            _padding: [0; 4],
        }
    }

    pub fn lottery_id(&self) -> u64 {
        self.lottery_id
    }

    pub fn winning_number(&self) -> u32 {
        self.winning_number
    }

    pub fn amount_to_distribute(&self) -> u128 {
        self.amount_to_distribute
    }

    pub fn rollover(&self) -> u128 {
        self.rollover
    }

    pub fn reward_for(&self, bracket: Bracket) -> u128 {
        self.reward_per_winner[bracket.index()]
    }

    pub fn winner_count(&self, bracket: Bracket) -> u64 {
        self.winner_counts[bracket.index()]
    }

    pub fn payouts(&self) -> BracketPayouts {
        BracketPayouts {
            reward_per_winner: self.reward_per_winner,
            winner_counts: self.winner_counts,
            rollover: self.rollover,
        }
    }

    /// Sum of `winners * reward` over all brackets.
    pub fn total_payout(&self) -> Result<u128, LotteryError> {
        self.reward_per_winner
            .iter()
            .zip(self.winner_counts.iter())
            .try_fold(0u128, |total, (&reward, &count)| {
                reward
                    .checked_mul(count as u128)
                    .and_then(|paid| total.checked_add(paid))
            })
            .ok_or(LotteryError::ArithmeticOverflow)
    }

    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decodes a stored record. A wrong-sized buffer or an out-of-range winning number
    /// is rejected.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LotteryError> {
        let draw: Self = bytemuck::try_pod_read_unaligned(data)
            .map_err(|_| LotteryError::DeserializationFailed)?;
        validate_winning_number(draw.winning_number)
            .map_err(|_| LotteryError::DeserializationFailed)?;
        Ok(draw)
    }
}

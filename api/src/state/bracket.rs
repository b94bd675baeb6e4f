use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{BRACKET_COUNT, BRACKET_OFFSETS};
use crate::error::LotteryError;

/// A prize bracket: how many trailing digits of a ticket match the winning number.
/// Level 0 is a 1-digit match, level 5 a full 6-digit match.
#[repr(u8)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum Bracket {
    Match1 = 0,
    Match2 = 1,
    Match3 = 2,
    Match4 = 3,
    Match5 = 4,
    Match6 = 5,
}

impl Bracket {
    /// All brackets, shallowest first.
    pub const ALL: [Bracket; BRACKET_COUNT] = [
        Bracket::Match1,
        Bracket::Match2,
        Bracket::Match3,
        Bracket::Match4,
        Bracket::Match5,
        Bracket::Match6,
    ];

    /// Convert a raw bracket level (0-5) to a bracket.
    pub fn from_level(level: u8) -> Result<Self, LotteryError> {
        Self::try_from(level).map_err(|_| {
            warn!(level, "Invalid bracket");
            LotteryError::InvalidBracket
        })
    }

    /// The array index of this bracket (0-5).
    pub fn index(self) -> usize {
        u8::from(self) as usize
    }

    /// Number of trailing digits matched (1-6).
    pub fn digits(self) -> u32 {
        self.index() as u32 + 1
    }

    /// 10^digits. Taking a number modulo this keeps the compared digits.
    pub fn modulus(self) -> u64 {
        10u64.pow(self.digits())
    }

    pub fn offset(self) -> u64 {
        BRACKET_OFFSETS[self.index()]
    }

    /// The transformed key for a number at this bracket.
    pub fn transform(self, number: u32) -> u64 {
        self.offset() + (number as u64 % self.modulus())
    }

    /// The next deeper bracket, if any.
    pub fn next(self) -> Option<Bracket> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Check if two numbers share this bracket's trailing digits.
    pub fn matches(self, ticket_number: u32, winning_number: u32) -> bool {
        self.transform(ticket_number) == self.transform(winning_number)
    }
}

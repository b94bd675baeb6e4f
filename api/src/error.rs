use num_enum::IntoPrimitive;
use thiserror::Error;

/// Lottery error codes
/// Range 1000-1999: Draw and claim errors
/// Range 2000-2999: Validation errors
/// Range 3000-3999: System errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum LotteryError {
    // Draw and Claim Errors (1000-1999)
    #[error("Ticket has already been claimed")]
    TicketAlreadyClaimed = 1001,

    #[error("No prize for this bracket")]
    NoPrizeForBracket = 1002,

    #[error("Bracket must be higher")]
    BracketMustBeHigher = 1003,

    #[error("No tickets to claim")]
    NoTicketsToClaim = 1004,

    #[error("Too many tickets")]
    TooManyTickets = 1005,

    #[error("Ticket is not part of this draw")]
    TicketNotInDraw = 1006,

    // Validation Errors (2000-2999)
    #[error("Ticket number outside of range")]
    InvalidTicketNumber = 2001,

    #[error("Winning number outside of range")]
    InvalidWinningNumber = 2002,

    #[error("Reward breakdown exceeds the whole pool")]
    InvalidRewardBreakdown = 2003,

    #[error("Ticket ids and numbers differ in length")]
    TicketLengthMismatch = 2004,

    #[error("Invalid bracket specified")]
    InvalidBracket = 2005,

    #[error("Burning and competition shares exceed the whole pool")]
    InvalidShares = 2006,

    #[error("Discount divisor too low")]
    InvalidDiscountDivisor = 2007,

    #[error("Invalid lottery configuration")]
    InvalidConfig = 2008,

    // System Errors (3000-3999)
    #[error("Arithmetic operation overflowed")]
    ArithmeticOverflow = 3001,

    #[error("Failed to deserialize draw data")]
    DeserializationFailed = 3002,
}

impl LotteryError {
    /// The numeric error code.
    pub fn code(self) -> u32 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LotteryError::TicketAlreadyClaimed.code(), 1001);
        assert_eq!(LotteryError::TicketNotInDraw.code(), 1006);
        assert_eq!(LotteryError::InvalidTicketNumber.code(), 2001);
        assert_eq!(LotteryError::ArithmeticOverflow.code(), 3001);
        assert_eq!(u32::from(LotteryError::InvalidConfig), 2008);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LotteryError::InvalidTicketNumber.to_string(),
            "Ticket number outside of range"
        );
        assert_eq!(LotteryError::BracketMustBeHigher.to_string(), "Bracket must be higher");
    }
}

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{MAX_TICKET_NUMBER, MIN_TICKET_NUMBER};
use crate::error::LotteryError;

/// A purchased lottery ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    /// The ticket id, opaque to the draw.
    pub id: u64,

    /// The ticket number, between 1_000_000 and 1_999_999.
    /// The six trailing digits are the ones compared against the winning number.
    pub number: u32,
}

impl Ticket {
    pub fn new(id: u64, number: u32) -> Result<Self, LotteryError> {
        validate_ticket_number(number)?;
        Ok(Self { id, number })
    }
}

/// Check if a number lies in the valid ticket range.
pub fn is_valid_number(number: u32) -> bool {
    (MIN_TICKET_NUMBER..=MAX_TICKET_NUMBER).contains(&number)
}

pub fn validate_ticket_number(number: u32) -> Result<(), LotteryError> {
    if !is_valid_number(number) {
        warn!(number, "Wrong ticket number");
        return Err(LotteryError::InvalidTicketNumber);
    }
    Ok(())
}

pub fn validate_winning_number(number: u32) -> Result<(), LotteryError> {
    if !is_valid_number(number) {
        warn!(number, "Wrong winning number");
        return Err(LotteryError::InvalidWinningNumber);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_range_boundaries() {
        assert!(is_valid_number(1_000_000));
        assert!(is_valid_number(1_999_999));
        assert!(!is_valid_number(999_999));
        assert!(!is_valid_number(2_000_000));
        assert!(!is_valid_number(0));
    }

    #[test]
    fn test_ticket_new() {
        let ticket = Ticket::new(7, 1_279_101).unwrap();
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.number, 1_279_101);
        assert_eq!(Ticket::new(8, 999_999), Err(LotteryError::InvalidTicketNumber));
        assert_eq!(Ticket::new(9, 2_000_000), Err(LotteryError::InvalidTicketNumber));
    }

    #[test]
    fn test_winning_number_error() {
        assert_eq!(validate_winning_number(2_000_000), Err(LotteryError::InvalidWinningNumber));
        assert_eq!(validate_winning_number(1_000_000), Ok(()));
    }
}

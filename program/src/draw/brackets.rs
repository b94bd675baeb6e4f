use std::collections::BTreeMap;

use lottery_api::prelude::*;
use tracing::warn;

use super::validate_numbers;

/// Returns the deepest bracket a ticket number reaches against the winning number.
///
/// Brackets are walked from the last digit upward and the walk stops at the first
/// mismatch, so a ticket in bracket k also matches every bracket below k.
pub fn deepest_bracket(ticket_number: u32, winning_number: u32) -> Option<Bracket> {
    let mut deepest = None;
    for bracket in Bracket::ALL {
        if !bracket.matches(ticket_number, winning_number) {
            break;
        }
        deepest = Some(bracket);
    }
    deepest
}

/// Maps each winning ticket id to the bracket it can claim.
/// Tickets that do not even match the last digit are left out.
pub fn compute_ticket_brackets(
    ticket_ids: &[u64],
    ticket_numbers: &[u32],
    winning_number: u32,
) -> Result<BTreeMap<u64, Bracket>, LotteryError> {
    if ticket_ids.len() != ticket_numbers.len() {
        warn!(
            ids = ticket_ids.len(),
            numbers = ticket_numbers.len(),
            "Ticket ids and numbers differ in length"
        );
        return Err(LotteryError::TicketLengthMismatch);
    }
    validate_numbers(ticket_numbers, winning_number)?;

    let mut winners = BTreeMap::new();
    for (&id, &number) in ticket_ids.iter().zip(ticket_numbers) {
        let Some(bracket) = deepest_bracket(number, winning_number) else {
            continue;
        };

        #[cfg(feature = "debug")]
        tracing::trace!(id, number, bracket = bracket.index(), "Ticket matched");

        winners.insert(id, bracket);
    }
    Ok(winners)
}

use std::collections::HashMap;

use lottery_api::prelude::*;

/// Reject the whole round if any ticket or the winning number is out of range.
pub fn validate_numbers(ticket_numbers: &[u32], winning_number: u32) -> Result<(), LotteryError> {
    for &number in ticket_numbers {
        validate_ticket_number(number)?;
    }
    validate_winning_number(winning_number)
}

/// Count every ticket once per bracket, keyed by its transformed number.
/// The bracket offsets keep keys of different brackets apart, so one map holds all six tallies.
pub fn tally_brackets(ticket_numbers: &[u32]) -> HashMap<u64, u64> {
    let mut tally = HashMap::with_capacity(ticket_numbers.len() * BRACKET_COUNT);
    for &number in ticket_numbers {
        for bracket in Bracket::ALL {
            *tally.entry(bracket.transform(number)).or_insert(0) += 1;
        }
    }
    tally
}

/// Split a bracket's share of the pool between its winners.
///
/// The result is rounded down and then bumped by one unit, so a winner is never
/// paid less than an exact split. This holds even when the division is exact.
pub fn calculate_reward_per_winner(
    pool: u128,
    weight_bps: u128,
    winners: u64,
) -> Result<u128, LotteryError> {
    // reward = pool * weight / winners / 10_000 + 1
    pool.checked_mul(weight_bps)
        .and_then(|amount| amount.checked_div(winners as u128))
        .map(|amount| amount / DENOMINATOR_BPS)
        .and_then(|amount| amount.checked_add(1))
        .ok_or(LotteryError::ArithmeticOverflow)
}

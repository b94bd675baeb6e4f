use lottery_api::prelude::*;
use tracing::{debug, info};

use super::{calculate_reward_per_winner, tally_brackets, validate_numbers};

/// Counts winners per bracket and splits the pool between them.
///
/// Tickets are tallied once per bracket, so the tally at the winning key of bracket k
/// is the number of tickets matching at least k+1 trailing digits. Walking from the
/// deepest bracket down and subtracting what the deeper brackets already took leaves
/// the exact count for each bracket.
///
/// A bracket with winners but no weight pays nothing and keeps its winners in the
/// running count, so they are credited again at the next funded bracket below it.
/// A bracket without winners rolls its allocation over to the next round.
pub fn compute_bracket_counts(
    ticket_numbers: &[u32],
    winning_number: u32,
    reward_breakdown: &RewardBreakdown,
    total_pool: u128,
) -> Result<BracketPayouts, LotteryError> {
    validate_numbers(ticket_numbers, winning_number)?;
    reward_breakdown.validate()?;

    let tally = tally_brackets(ticket_numbers);
    let mut payouts = BracketPayouts::default();
    let mut previous_count = 0u64;

    for bracket in Bracket::ALL.into_iter().rev() {
        let level = bracket.index();
        let matching = tally
            .get(&bracket.transform(winning_number))
            .copied()
            .unwrap_or(0);
        let count = matching.saturating_sub(previous_count);
        payouts.winner_counts[level] = count;

        if count > 0 {
            let weight = reward_breakdown.weight(bracket);
            if weight > 0 {
                payouts.reward_per_winner[level] =
                    calculate_reward_per_winner(total_pool, weight, count)?;
                previous_count = matching;
            }
        } else {
            payouts.rollover = payouts
                .rollover
                .checked_add(reward_breakdown.allocation(bracket, total_pool)?)
                .ok_or(LotteryError::ArithmeticOverflow)?;
        }

        debug!(
            bracket = level,
            winners = count,
            reward_per_winner = payouts.reward_per_winner[level],
            "Bracket settled"
        );
    }

    Ok(payouts)
}

/// Settles a round and freezes the outcome.
pub fn finalize_draw(
    lottery_id: u64,
    tickets: &[Ticket],
    winning_number: u32,
    reward_breakdown: &RewardBreakdown,
    amount_to_distribute: u128,
) -> Result<DrawResult, LotteryError> {
    let numbers: Vec<u32> = tickets.iter().map(|ticket| ticket.number).collect();
    let payouts =
        compute_bracket_counts(&numbers, winning_number, reward_breakdown, amount_to_distribute)?;
    let draw = DrawResult::new(lottery_id, winning_number, amount_to_distribute, &payouts);

    info!(
        lottery_id,
        winning_number,
        tickets = tickets.len(),
        rollover = draw.rollover(),
        "Lottery number drawn"
    );

    Ok(draw)
}

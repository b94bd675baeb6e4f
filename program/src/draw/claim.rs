use std::collections::{HashMap, HashSet};

use lottery_api::prelude::*;
use tracing::{info, warn};

/// The reward a ticket number earns at a bracket, or 0 if it does not match there.
pub fn reward_for_ticket(draw: &DrawResult, ticket_number: u32, bracket: Bracket) -> u128 {
    if bracket.matches(ticket_number, draw.winning_number()) {
        draw.reward_for(bracket)
    } else {
        0
    }
}

/// Tracks which tickets of a finalized draw have been paid.
#[derive(Clone, Debug)]
pub struct ClaimBook {
    draw: DrawResult,
    /// Ticket numbers of the round, by ticket id.
    tickets: HashMap<u64, u32>,
    claimed: HashSet<u64>,
    total_claimed: u128,
}

impl ClaimBook {
    /// Opens claims for a draw over the tickets sold in its round.
    /// A repeated id keeps its last number.
    pub fn new(draw: DrawResult, tickets: &[Ticket]) -> Result<Self, LotteryError> {
        let mut numbers = HashMap::with_capacity(tickets.len());
        for ticket in tickets {
            validate_ticket_number(ticket.number)?;
            numbers.insert(ticket.id, ticket.number);
        }
        Ok(Self {
            draw,
            tickets: numbers,
            claimed: HashSet::new(),
            total_claimed: 0,
        })
    }

    pub fn draw(&self) -> &DrawResult {
        &self.draw
    }

    pub fn is_claimed(&self, ticket_id: u64) -> bool {
        self.claimed.contains(&ticket_id)
    }

    pub fn total_claimed(&self) -> u128 {
        self.total_claimed
    }

    /// Claims a batch of tickets, each at the bracket given by the same index in `brackets`.
    ///
    /// Either every ticket is paid or none is. Only tickets sold in the round, with
    /// their recorded number, can claim. A ticket must claim the deepest bracket that
    /// pays it: claiming lower while the next bracket also pays is rejected.
    pub fn claim(&mut self, tickets: &[Ticket], brackets: &[u8]) -> Result<u128, LotteryError> {
        if tickets.len() != brackets.len() {
            warn!(
                tickets = tickets.len(),
                brackets = brackets.len(),
                "Ticket and bracket counts differ"
            );
            return Err(LotteryError::TicketLengthMismatch);
        }
        if tickets.is_empty() {
            return Err(LotteryError::NoTicketsToClaim);
        }

        let mut batch = HashSet::with_capacity(tickets.len());
        let mut reward = 0u128;
        for (ticket, &level) in tickets.iter().zip(brackets) {
            let bracket = Bracket::from_level(level)?;
            validate_ticket_number(ticket.number)?;

            if self.tickets.get(&ticket.id) != Some(&ticket.number) {
                warn!(ticket_id = ticket.id, number = ticket.number, "Ticket not in draw");
                return Err(LotteryError::TicketNotInDraw);
            }

            if self.claimed.contains(&ticket.id) || !batch.insert(ticket.id) {
                warn!(ticket_id = ticket.id, "Ticket already claimed");
                return Err(LotteryError::TicketAlreadyClaimed);
            }

            let ticket_reward = reward_for_ticket(&self.draw, ticket.number, bracket);
            if ticket_reward == 0 {
                warn!(ticket_id = ticket.id, bracket = level, "No prize for this bracket");
                return Err(LotteryError::NoPrizeForBracket);
            }

            if let Some(deeper) = bracket.next() {
                if reward_for_ticket(&self.draw, ticket.number, deeper) != 0 {
                    warn!(ticket_id = ticket.id, bracket = level, "Bracket must be higher");
                    return Err(LotteryError::BracketMustBeHigher);
                }
            }

            reward = reward
                .checked_add(ticket_reward)
                .ok_or(LotteryError::ArithmeticOverflow)?;
        }

        self.total_claimed = self
            .total_claimed
            .checked_add(reward)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        self.claimed.extend(batch);

        info!(
            lottery_id = self.draw.lottery_id(),
            tickets = tickets.len(),
            reward,
            "Tickets claimed"
        );

        Ok(reward)
    }
}

use lottery_api::prelude::*;
use tracing::warn;

/// Total price of `ticket_count` tickets bought together.
/// price * n * (divisor + 1 - n) / divisor
pub fn bulk_ticket_price(
    discount_divisor: u128,
    ticket_price: u128,
    ticket_count: u64,
) -> Result<u128, LotteryError> {
    validate_discount_divisor(discount_divisor)?;
    let count = ticket_count as u128;
    if count > discount_divisor {
        warn!(ticket_count, discount_divisor, "Too many tickets for discount");
        return Err(LotteryError::TooManyTickets);
    }

    ticket_price
        .checked_mul(count)
        .and_then(|amount| amount.checked_mul((discount_divisor - count).checked_add(1)?))
        .map(|amount| amount / discount_divisor)
        .ok_or(LotteryError::ArithmeticOverflow)
}

/// Cost of a purchase under the configured price, discount and purchase limit.
pub fn ticket_cost(config: &LotteryConfig, ticket_count: u64) -> Result<u128, LotteryError> {
    if ticket_count > config.max_tickets_per_buy {
        warn!(
            ticket_count,
            max = config.max_tickets_per_buy,
            "Too many tickets"
        );
        return Err(LotteryError::TooManyTickets);
    }
    bulk_ticket_price(config.discount_divisor, config.ticket_price, ticket_count)
}

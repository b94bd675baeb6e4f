//! Draw settlement for trailing-digit lotteries.
//!
//! A ticket wins the bracket of the longest run of trailing digits it shares
//! with the winning number. [`compute_bracket_counts`] splits a round's pool
//! between the brackets, [`compute_ticket_brackets`] tells each ticket where it
//! landed, and [`ClaimBook`] pays tickets out of a finalized [`DrawResult`].
//!
//! [`DrawResult`]: lottery_api::state::DrawResult

pub mod draw;
pub mod pool;

pub use draw::*;
pub use pool::*;

pub use lottery_api::prelude;

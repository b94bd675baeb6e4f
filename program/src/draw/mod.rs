//! Draw module - bracket matching, prize split and claims

mod brackets;
mod claim;
mod settle;
mod utils;

pub use brackets::*;
pub use claim::*;
pub use settle::*;
pub use utils::*;

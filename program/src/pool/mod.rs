//! Pool module - prize pool and ticket pricing arithmetic

mod distribute;
mod pricing;

pub use distribute::*;
pub use pricing::*;

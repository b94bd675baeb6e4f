mod bracket;
mod breakdown;
mod config;
mod draw;
mod ticket;

pub use bracket::*;
pub use breakdown::*;
pub use config::*;
pub use draw::*;
pub use ticket::*;

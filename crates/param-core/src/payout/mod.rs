//! Fórmula de payout lineal acotada.

pub mod engine;
pub mod option;
pub mod rounding;

pub use engine::{compute_payout, TickSpec};
pub use option::OptionType;
pub use rounding::{hundredths, round_payout};

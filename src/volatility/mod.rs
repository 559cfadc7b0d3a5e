//! Historical volatility estimation
//!
//! Turns a time-ordered series of closing prices into an annualized
//! volatility percentage, the default volatility input offered to the pricer.

pub mod historical;

pub use historical::*;

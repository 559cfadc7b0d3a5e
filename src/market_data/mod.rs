//! Market data boundary
//!
//! The pricing core never fetches anything itself. A [`PriceHistorySource`]
//! supplies closes, [`resolve_defaults`] turns them into default spot and
//! volatility inputs, substituting configured fallbacks when the fetch fails.

pub mod csv_source;
pub mod source;

pub use csv_source::*;
pub use source::*;

//! Spot/volatility price surfaces
//!
//! Builds the coordinate axes and evaluates the Black-Scholes price at every
//! point of their cross product. Greeks are not computed per grid point.

pub mod axes;
pub mod grid;

pub use axes::*;
pub use grid::*;

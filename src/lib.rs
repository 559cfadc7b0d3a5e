//! # quant3d: Black-Scholes-Merton Pricing and Price Surfaces
//!
//! `quant3d` is a small, dependency-light pricing core for European options. It evaluates the
//! closed-form Black-Scholes-Merton formula for a single contract, together with the first-order
//! Greeks, and evaluates the same formula over a spot × volatility grid to produce a price surface
//! ready for 3-D rendering.
//!
//! ## Core Features
//!
//! - **Pricer**: price plus Delta, Gamma, Vega (per 1 vol point), Theta (per day) and optional Rho
//! - **Surface Evaluator**: batch pricing over the cross product of a spot axis and a vol axis
//! - **Historical Volatility**: annualized volatility from a close series (252-day convention)
//! - **Scenario P&L**: revaluation of one contract over shocked spots
//! - **Implied Volatility**: Brent inversion of the pricer
//!
//! ## Quick Start
//!
//! ```rust
//! use quant3d::{
//!     default_configs, evaluate_surface_with, price_and_greeks, ContractParams, OptionSide,
//! };
//!
//! let params = ContractParams {
//!     spot: 450.0,
//!     strike: 460.0,
//!     time_to_expiry_years: 30.0 / 365.0,
//!     risk_free_rate: 0.045,
//!     volatility: 0.20,
//!     side: OptionSide::Call,
//! };
//!
//! let result = price_and_greeks(params)?;
//! println!("price {:.2}, delta {:.3}", result.price, result.greeks.delta);
//!
//! let surface = evaluate_surface_with(&params, &default_configs::dashboard())?;
//! assert_eq!(surface.shape(), (50, 50));
//! # Ok::<(), quant3d::QuantError>(())
//! ```
//!
//! ## Parameter Validation
//!
//! Every entry point validates its inputs before touching the formula. Zero or negative
//! volatility, expiry, spot or strike, and volatility above [`MAX_VOLATILITY`], is rejected
//! with [`QuantError::InvalidParameter`]; inputs are never clamped. Saturation of `N(d1)` for deep in/out-of-the-money contracts is
//! correct behaviour and is preserved.
//!
//! ## Configuration Presets
//!
//! Surface layouts are available as presets:
//! - `dashboard()`: 50×50 grid, 0.5×–1.5× spot, 10%–100% volatility
//! - `compact()`: 40×40 grid, 0.7×–1.3× spot, 10%–100% volatility

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod market_data;
pub mod models;
pub mod pricing;
pub mod scenario;
pub mod surface;
pub mod volatility;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core types for contracts and results
pub use error::{QuantError, QuantResult};
pub use pricing::{
    config::PricerConfig,
    inputs::{DashboardInputs, InputBounds, Range},
    types::{
        ContractParams, Greek, Greeks, OptionSide, ParseSideError, PricingResult, MAX_VOLATILITY,
    },
};

// Surface types and axis helpers
pub use surface::{linspace, SurfaceConfig, SurfaceGrid};

// Volatility estimation
pub use volatility::{annualized_vol_pct, annualized_vol_pct_with, ReturnKind, VolatilityConfig};

// Market data boundary
pub use market_data::{
    resolve_defaults, CsvPriceHistory, FallbackInputs, FetchError, InputOrigin, MarketSnapshot,
    PriceHistorySource, ResolvedInputs,
};

// Supplementary analytics
pub use models::{implied_volatility, ImpliedVolConfig};
pub use scenario::{simulate_pnl, PnlConfig, PnlRow};

pub use config::Quant3dConfig;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured surface layouts.
///
/// # Available Configurations
///
/// - [`dashboard()`]: the full-width interactive grid
/// - [`compact()`]: a tighter, cheaper grid around the money
pub mod default_configs {
    use crate::surface::SurfaceConfig;

    /// 50×50 grid spanning 0.5×–1.5× spot and 10%–100% volatility.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quant3d::default_configs;
    ///
    /// let config = default_configs::dashboard();
    /// assert_eq!(config.points, 50);
    /// ```
    pub fn dashboard() -> SurfaceConfig {
        SurfaceConfig::dashboard()
    }

    /// 40×40 grid spanning 0.7×–1.3× spot and 10%–100% volatility.
    ///
    /// Roughly two thirds of the evaluations of [`dashboard()`], concentrated
    /// where the surface has the most curvature.
    pub fn compact() -> SurfaceConfig {
        SurfaceConfig::compact()
    }
}

// ================================================================================================
// PRICER
// ================================================================================================

/// Price a European option and compute its Greeks, Rho included.
///
/// Equivalent to [`price_and_greeks_with`] with [`PricerConfig::default()`].
///
/// # Errors
///
/// [`QuantError::InvalidParameter`] if spot, strike, time to expiry or volatility is not finite
/// and strictly positive, or the rate is negative or not finite.
pub fn price_and_greeks(params: ContractParams) -> QuantResult<PricingResult> {
    price_and_greeks_with(params, &PricerConfig::default())
}

/// Price a European option and compute its Greeks under the Black-Scholes-Merton model.
///
/// # Arguments
///
/// * `params` - Contract and market parameters in decimal/annual units
/// * `config` - Output settings: whether Rho is reported and the day count used for Theta
///
/// # Pricing Methodology
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 - σ·√T
/// call = S·N(d1) - K·e^{-rT}·N(d2)
/// put  = K·e^{-rT}·N(-d2) - S·N(-d1)
/// ```
///
/// Vega and Rho are scaled to a 1 percentage point move, Theta to one day.
///
/// # Example
///
/// ```rust
/// use quant3d::{price_and_greeks_with, ContractParams, OptionSide, PricerConfig};
///
/// let params = ContractParams {
///     spot: 100.0,
///     strike: 100.0,
///     time_to_expiry_years: 1.0,
///     risk_free_rate: 0.05,
///     volatility: 0.20,
///     side: OptionSide::Put,
/// };
/// let result = price_and_greeks_with(params, &PricerConfig::without_rho())?;
/// assert!(result.greeks.delta < 0.0);
/// assert!(result.greeks.rho.is_none());
/// # Ok::<(), quant3d::QuantError>(())
/// ```
pub fn price_and_greeks_with(
    params: ContractParams,
    config: &PricerConfig,
) -> QuantResult<PricingResult> {
    params.validate()?;
    error::ensure_positive("days_per_year", config.days_per_year)?;

    let mut result = models::bs::evaluate(&params, config.days_per_year);
    if !config.include_rho {
        result.greeks.rho = None;
    }
    Ok(result)
}

// ================================================================================================
// SURFACE EVALUATOR
// ================================================================================================

/// Evaluate option prices over the cross product of a spot axis and a volatility axis.
///
/// # Arguments
///
/// * `spot_axis` - Spot coordinates (length M), each finite and > 0
/// * `vol_axis` - Volatility coordinates as decimals (length N), each in `(0, MAX_VOLATILITY]`
/// * `strike`, `time_to_expiry_years`, `rate`, `side` - Held fixed across the grid
///
/// # Returns
///
/// A [`SurfaceGrid`] whose `prices` has N rows and M columns; `prices[i][j]` is the price at
/// `(spot_axis[j], vol_axis[i])` and is bit-identical to the scalar [`price_and_greeks`] price
/// at that point.
///
/// # Example
///
/// ```rust
/// use quant3d::{evaluate_surface, linspace, OptionSide};
///
/// let spots = linspace(225.0, 675.0, 50);
/// let vols = linspace(0.1, 1.0, 50);
/// let grid = evaluate_surface(&spots, &vols, 460.0, 30.0 / 365.0, 0.045, OptionSide::Call)?;
/// assert_eq!(grid.prices.len(), 50);
/// # Ok::<(), quant3d::QuantError>(())
/// ```
pub fn evaluate_surface(
    spot_axis: &[f64],
    vol_axis: &[f64],
    strike: f64,
    time_to_expiry_years: f64,
    rate: f64,
    side: OptionSide,
) -> QuantResult<SurfaceGrid> {
    surface::grid::evaluate_surface(spot_axis, vol_axis, strike, time_to_expiry_years, rate, side)
}

/// Build both axes from `config` around `params.spot` and evaluate the surface.
///
/// `params.volatility` is not used; the vol axis comes from the config.
pub fn evaluate_surface_with(
    params: &ContractParams,
    config: &SurfaceConfig,
) -> QuantResult<SurfaceGrid> {
    error::ensure_positive("spot", params.spot)?;
    evaluate_surface(
        &config.spot_axis(params.spot),
        &config.vol_axis(),
        params.strike,
        params.time_to_expiry_years,
        params.risk_free_rate,
        params.side,
    )
}

use roots::{find_root_brent, SimpleConvergency};
use serde::{Deserialize, Serialize};

use super::{log_moneyness, VolSlice};
use crate::error::{ensure_positive, QuantError, QuantResult};
use crate::pricing::types::{ContractParams, OptionSide};

/// Search settings for inverting the pricer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpliedVolConfig {
    /// Lower end of the volatility bracket
    pub vol_lower: f64,
    /// Upper end of the volatility bracket
    pub vol_upper: f64,
    /// Absolute tolerance on both price error and bracket width
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            vol_lower: 1e-4,
            vol_upper: 5.0,
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

/// No-arbitrage price bounds (lower, upper) for a European option.
pub fn price_bounds(params: &ContractParams) -> (f64, f64) {
    let discounted_strike =
        params.strike * (-params.risk_free_rate * params.time_to_expiry_years).exp();
    match params.side {
        OptionSide::Call => ((params.spot - discounted_strike).max(0.0), params.spot),
        OptionSide::Put => ((discounted_strike - params.spot).max(0.0), discounted_strike),
    }
}

/// Volatility that reproduces `target_price` under Black-Scholes.
///
/// The `volatility` field of `params` is ignored. Uses Brent's method on
/// `σ -> price(σ) - target` inside the configured bracket.
pub fn implied_volatility(
    target_price: f64,
    params: &ContractParams,
    config: &ImpliedVolConfig,
) -> QuantResult<f64> {
    ensure_positive("target_price", target_price)?;
    ensure_positive("spot", params.spot)?;
    ensure_positive("strike", params.strike)?;
    ensure_positive("time_to_expiry_years", params.time_to_expiry_years)?;
    if !params.risk_free_rate.is_finite() || params.risk_free_rate < 0.0 {
        return Err(QuantError::invalid(
            "risk_free_rate",
            params.risk_free_rate,
            "must be finite and >= 0",
        ));
    }

    let (lower, upper) = price_bounds(params);
    if target_price <= lower || target_price >= upper {
        return Err(QuantError::no_convergence(format!(
            "price {target_price} outside no-arbitrage bounds ({lower}, {upper})"
        )));
    }

    let x = log_moneyness(params.spot, params.strike);
    let objective = |vol: f64| -> f64 {
        VolSlice::new(vol, params.time_to_expiry_years, params.risk_free_rate).price(
            params.spot,
            params.strike,
            x,
            params.side,
        ) - target_price
    };

    let mut convergency = SimpleConvergency {
        eps: config.tolerance,
        max_iter: config.max_iterations,
    };

    match find_root_brent(config.vol_lower, config.vol_upper, &objective, &mut convergency) {
        Ok(vol) if vol > 0.0 && vol.is_finite() => Ok(vol),
        Ok(vol) => Err(QuantError::no_convergence(format!(
            "solver returned non-positive volatility {vol}"
        ))),
        Err(e) => {
            tracing::debug!(target_price, error = ?e, "implied volatility search failed");
            Err(QuantError::no_convergence(format!(
                "no root in [{}, {}]: {:?}",
                config.vol_lower, config.vol_upper, e
            )))
        }
    }
}

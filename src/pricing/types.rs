use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_non_negative, ensure_positive, QuantError, QuantResult};

/// Exercise right of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    #[default]
    Call,
    Put,
}

impl OptionSide {
    /// Payoff at expiry for the given spot and strike.
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionSide::Call => (spot - strike).max(0.0),
            OptionSide::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Call => f.write_str("call"),
            OptionSide::Put => f.write_str("put"),
        }
    }
}

/// Error returned when a string is neither "call" nor "put".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid option side: {0:?} (expected \"call\" or \"put\")")]
pub struct ParseSideError(pub String);

impl FromStr for OptionSide {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionSide::Call),
            "put" | "p" => Ok(OptionSide::Put),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Largest accepted annualized volatility (10 000%).
///
/// Far above anything quoted; beyond roughly 1e154 `σ²` overflows and the
/// closed form degenerates.
pub const MAX_VOLATILITY: f64 = 100.0;

/// Require a volatility in `(0, MAX_VOLATILITY]`.
pub(crate) fn ensure_volatility(name: &'static str, vol: f64) -> QuantResult<()> {
    ensure_positive(name, vol)?;
    if vol > MAX_VOLATILITY {
        return Err(QuantError::invalid(name, vol, "must be <= 100 (10000%)"));
    }
    Ok(())
}

/// Contract and market parameters for a single European option.
///
/// Rates and volatility are decimals (0.045 for 4.5%), time is in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractParams {
    /// Underlying price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiration in years
    pub time_to_expiry_years: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Annualized volatility
    pub volatility: f64,
    pub side: OptionSide,
}

impl ContractParams {
    /// Check that every field lies in the domain where the closed form is defined.
    pub fn validate(&self) -> QuantResult<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry_years", self.time_to_expiry_years)?;
        ensure_non_negative("risk_free_rate", self.risk_free_rate)?;
        ensure_volatility("volatility", self.volatility)?;
        Ok(())
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub fn with_side(self, side: OptionSide) -> Self {
        Self { side, ..self }
    }
}

/// Names of the first-order sensitivities reported by the pricer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Greek {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl Greek {
    pub const ALL: [Greek; 5] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Vega => "Vega",
            Greek::Theta => "Theta",
            Greek::Rho => "Rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Option Greeks
///
/// Vega and Rho are per 1 percentage point, Theta is per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// dV/dσ per 1% vol move
    pub vega: f64,
    /// dV/dt per day, negative for decay
    pub theta: f64,
    /// dV/dr per 1% rate move, absent when the pricer is configured without it
    pub rho: Option<f64>,
}

impl Greeks {
    pub fn get(&self, greek: Greek) -> Option<f64> {
        match greek {
            Greek::Delta => Some(self.delta),
            Greek::Gamma => Some(self.gamma),
            Greek::Vega => Some(self.vega),
            Greek::Theta => Some(self.theta),
            Greek::Rho => self.rho,
        }
    }

    /// Present sensitivities in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Greek, f64)> + '_ {
        Greek::ALL
            .into_iter()
            .filter_map(move |g| self.get(g).map(|v| (g, v)))
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.iter().map(|(g, v)| (g.name(), v)).collect()
    }
}

/// Price plus sensitivities for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub price: f64,
    pub greeks: Greeks,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::QuantResult;
use crate::volatility::{annualized_vol_pct_with, VolatilityConfig};

/// Failure reported by a price-history provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("No price history found for {ticker}")]
    NotFound { ticker: String },

    #[error("Price history provider error: {reason}")]
    Provider { reason: String },
}

impl FetchError {
    pub fn not_found(ticker: impl Into<String>) -> Self {
        Self::NotFound {
            ticker: ticker.into(),
        }
    }

    pub fn provider(reason: impl Into<String>) -> Self {
        Self::Provider {
            reason: reason.into(),
        }
    }
}

/// Supplier of daily closing prices, oldest first.
///
/// Implementations do whatever I/O they need; the pricing core only sees the
/// returned series.
pub trait PriceHistorySource: Send + Sync {
    fn daily_closes(&self, ticker: &str) -> Result<Vec<f64>, FetchError>;
}

/// Spot and volatility derived from a close series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub latest_close: f64,
    pub annualized_vol_pct: f64,
}

impl MarketSnapshot {
    pub fn from_closes(closes: &[f64], config: &VolatilityConfig) -> QuantResult<Self> {
        let annualized_vol_pct = annualized_vol_pct_with(closes, config)?;
        // The estimator has already rejected short series
        let latest_close = closes[closes.len() - 1];
        Ok(Self {
            latest_close,
            annualized_vol_pct,
        })
    }
}

/// Spot and volatility used when market data is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackInputs {
    pub spot: f64,
    /// Percent
    pub volatility_pct: f64,
}

impl Default for FallbackInputs {
    fn default() -> Self {
        Self {
            spot: 450.0,
            volatility_pct: 20.0,
        }
    }
}

/// Where the resolved defaults came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputOrigin {
    Market { ticker: String },
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    pub spot: f64,
    /// Percent
    pub volatility_pct: f64,
    pub origin: InputOrigin,
}

impl ResolvedInputs {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, InputOrigin::Fallback { .. })
    }
}

/// Default spot and volatility for `ticker`, or the fallback with a reason.
///
/// Never fails: every fetch or estimation problem is turned into a fallback
/// whose reason the caller can show.
pub fn resolve_defaults(
    source: &dyn PriceHistorySource,
    ticker: &str,
    fallback: &FallbackInputs,
    config: &VolatilityConfig,
) -> ResolvedInputs {
    let reason = match source.daily_closes(ticker) {
        Ok(closes) => match MarketSnapshot::from_closes(&closes, config) {
            // A flat series gives zero volatility, which the pricer rejects
            Ok(snapshot) if snapshot.annualized_vol_pct <= 0.0 => {
                format!("estimated volatility for {ticker} is zero")
            }
            Ok(snapshot) => {
                tracing::info!(
                    ticker,
                    spot = snapshot.latest_close,
                    vol_pct = snapshot.annualized_vol_pct,
                    "resolved market defaults"
                );
                return ResolvedInputs {
                    spot: snapshot.latest_close,
                    volatility_pct: snapshot.annualized_vol_pct,
                    origin: InputOrigin::Market {
                        ticker: ticker.to_string(),
                    },
                };
            }
            Err(e) => e.to_string(),
        },
        Err(e) => e.to_string(),
    };

    tracing::warn!(ticker, %reason, "falling back to default spot and volatility");
    ResolvedInputs {
        spot: fallback.spot,
        volatility_pct: fallback.volatility_pct,
        origin: InputOrigin::Fallback { reason },
    }
}

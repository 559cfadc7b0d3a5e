use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::error::{ensure_positive, QuantError, QuantResult};

/// Minimum closes needed for a sample standard deviation of returns.
pub const MIN_CLOSES: usize = 3;

/// How period-over-period returns are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    /// p_t / p_{t-1} - 1
    #[default]
    Simple,
    /// ln(p_t / p_{t-1})
    Log,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityConfig {
    /// Observations per year used for annualization
    #[serde(default = "default_trading_days")]
    pub trading_days_per_year: f64,

    #[serde(default)]
    pub return_kind: ReturnKind,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: default_trading_days(),
            return_kind: ReturnKind::default(),
        }
    }
}

fn default_trading_days() -> f64 {
    252.0
}

/// Period-over-period returns of a close series.
pub fn period_returns(closes: &[f64], kind: ReturnKind) -> QuantResult<Vec<f64>> {
    for &close in closes {
        ensure_positive("close", close)?;
    }
    Ok(closes
        .windows(2)
        .map(|w| match kind {
            ReturnKind::Simple => w[1] / w[0] - 1.0,
            ReturnKind::Log => (w[1] / w[0]).ln(),
        })
        .collect())
}

/// Annualized volatility in percent, using simple returns and 252 trading days.
pub fn annualized_vol_pct(closes: &[f64]) -> QuantResult<f64> {
    annualized_vol_pct_with(closes, &VolatilityConfig::default())
}

/// Annualized volatility in percent: sample std-dev of returns × √days × 100.
///
/// Fewer than [`MIN_CLOSES`] closes cannot produce a sample deviation and is
/// reported as [`QuantError::InsufficientData`].
pub fn annualized_vol_pct_with(closes: &[f64], config: &VolatilityConfig) -> QuantResult<f64> {
    if closes.len() < MIN_CLOSES {
        return Err(QuantError::InsufficientData {
            needed: MIN_CLOSES,
            got: closes.len(),
        });
    }
    ensure_positive("trading_days_per_year", config.trading_days_per_year)?;

    let returns = period_returns(closes, config.return_kind)?;
    let std_dev = returns.iter().std_dev();
    if !std_dev.is_finite() {
        // Ratios of extreme closes overflow to inf and the deviation to NaN
        return Err(QuantError::invalid(
            "closes",
            std_dev,
            "returns overflow; close ratios are not representable",
        ));
    }

    Ok(std_dev * config.trading_days_per_year.sqrt() * 100.0)
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::market_data::FallbackInputs;
use crate::models::ImpliedVolConfig;
use crate::pricing::config::PricerConfig;
use crate::pricing::inputs::InputBounds;
use crate::pricing::types::MAX_VOLATILITY;
use crate::scenario::PnlConfig;
use crate::surface::SurfaceConfig;
use crate::volatility::VolatilityConfig;

/// Every tunable of the engine, loadable from TOML.
///
/// Each section is optional; missing sections and fields take their defaults.
///
/// ```toml
/// [pricer]
/// include_rho = false
///
/// [surface]
/// points = 40
/// spot_lower_multiple = 0.7
/// spot_upper_multiple = 1.3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quant3dConfig {
    #[serde(default)]
    pub pricer: PricerConfig,

    #[serde(default)]
    pub surface: SurfaceConfig,

    #[serde(default)]
    pub volatility: VolatilityConfig,

    #[serde(default)]
    pub pnl: PnlConfig,

    #[serde(default)]
    pub implied_vol: ImpliedVolConfig,

    #[serde(default)]
    pub inputs: InputBounds,

    #[serde(default)]
    pub fallback: FallbackInputs,
}

impl Quant3dConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse quant3d config")?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize quant3d config")
    }

    /// Reject settings that would make every evaluation fail.
    fn check(&self) -> Result<()> {
        anyhow::ensure!(
            self.pricer.days_per_year > 0.0,
            "pricer.days_per_year must be > 0, got {}",
            self.pricer.days_per_year
        );
        anyhow::ensure!(
            self.surface.vol_min > 0.0
                && self.surface.vol_max >= self.surface.vol_min
                && self.surface.vol_max <= MAX_VOLATILITY,
            "surface volatility range must satisfy 0 < vol_min <= vol_max <= {}, got [{}, {}]",
            MAX_VOLATILITY,
            self.surface.vol_min,
            self.surface.vol_max
        );
        anyhow::ensure!(
            self.surface.spot_lower_multiple > 0.0
                && self.surface.spot_upper_multiple >= self.surface.spot_lower_multiple,
            "surface spot multiples must satisfy 0 < lower <= upper, got [{}, {}]",
            self.surface.spot_lower_multiple,
            self.surface.spot_upper_multiple
        );
        anyhow::ensure!(self.surface.points > 0, "surface.points must be > 0");
        anyhow::ensure!(
            self.volatility.trading_days_per_year > 0.0,
            "volatility.trading_days_per_year must be > 0"
        );
        anyhow::ensure!(
            self.implied_vol.vol_lower > 0.0
                && self.implied_vol.vol_upper > self.implied_vol.vol_lower
                && self.implied_vol.vol_upper <= MAX_VOLATILITY,
            "implied_vol bracket must satisfy 0 < vol_lower < vol_upper <= {}",
            MAX_VOLATILITY
        );
        Ok(())
    }
}

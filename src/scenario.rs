//! Spot-shock P&L table for a single contract.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, QuantResult};
use crate::models::bs;
use crate::pricing::types::ContractParams;
use crate::surface::linspace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlConfig {
    #[serde(default = "default_lower")]
    pub spot_lower_multiple: f64,

    #[serde(default = "default_upper")]
    pub spot_upper_multiple: f64,

    #[serde(default = "default_points")]
    pub points: usize,

    /// Shares per contract
    #[serde(default = "default_multiplier")]
    pub contract_multiplier: f64,
}

impl Default for PnlConfig {
    fn default() -> Self {
        Self {
            spot_lower_multiple: default_lower(),
            spot_upper_multiple: default_upper(),
            points: default_points(),
            contract_multiplier: default_multiplier(),
        }
    }
}

fn default_lower() -> f64 {
    0.8
}

fn default_upper() -> f64 {
    1.2
}

fn default_points() -> usize {
    10
}

fn default_multiplier() -> f64 {
    100.0
}

/// Option value and P&L after moving the spot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PnlRow {
    pub spot: f64,
    pub option_value: f64,
    /// (option_value - base price) × contract multiplier
    pub pnl: f64,
}

/// Revalue one contract across shocked spots, everything else held fixed.
pub fn simulate_pnl(params: ContractParams, config: &PnlConfig) -> QuantResult<Vec<PnlRow>> {
    params.validate()?;
    ensure_positive("spot_lower_multiple", config.spot_lower_multiple)?;
    ensure_positive("spot_upper_multiple", config.spot_upper_multiple)?;

    let base = bs::price(&params);

    let rows = linspace(
        params.spot * config.spot_lower_multiple,
        params.spot * config.spot_upper_multiple,
        config.points,
    )
    .into_iter()
    .map(|spot| {
        let option_value = bs::price(&params.with_spot(spot));
        PnlRow {
            spot,
            option_value,
            pnl: (option_value - base) * config.contract_multiplier,
        }
    })
    .collect();

    Ok(rows)
}

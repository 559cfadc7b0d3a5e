use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, QuantError, QuantResult};
use crate::models::bs::{log_moneyness, VolSlice};
use crate::pricing::types::{ensure_volatility, OptionSide};

/// Option prices over a spot × volatility grid.
///
/// `prices` has one row per volatility and one column per spot:
/// `prices[i][j]` is the price at `(spot_axis[j], vol_axis[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGrid {
    pub spot_axis: Vec<f64>,
    pub vol_axis: Vec<f64>,
    pub prices: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    /// (rows, columns) = (vol axis length, spot axis length)
    pub fn shape(&self) -> (usize, usize) {
        (self.vol_axis.len(), self.spot_axis.len())
    }

    pub fn price_at(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.prices.get(vol_index)?.get(spot_index).copied()
    }

    /// Equal-shaped X (spot), Y (vol) and Z (price) matrices for a 3-D renderer.
    pub fn mesh(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let x = self
            .vol_axis
            .iter()
            .map(|_| self.spot_axis.clone())
            .collect();
        let y = self
            .vol_axis
            .iter()
            .map(|&v| vec![v; self.spot_axis.len()])
            .collect();
        (x, y, self.prices.clone())
    }

    /// Smallest and largest price on the grid, `None` for an empty grid.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.prices.iter().flatten().fold(None, |acc, &p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }
}

fn validate_axis(
    name: &'static str,
    axis: &[f64],
    check: fn(&'static str, f64) -> QuantResult<()>,
) -> QuantResult<()> {
    if axis.is_empty() {
        return Err(QuantError::invalid(name, 0.0, "axis must not be empty"));
    }
    for &value in axis {
        check(name, value)?;
    }
    Ok(())
}

/// Price every (spot, vol) pair of the cross product with the closed form.
///
/// `ln(s/K)` is computed once per column and the volatility terms once per row,
/// so each row reduces to a flat pass over the spot axis.
pub fn evaluate_surface(
    spot_axis: &[f64],
    vol_axis: &[f64],
    strike: f64,
    time_to_expiry_years: f64,
    rate: f64,
    side: OptionSide,
) -> QuantResult<SurfaceGrid> {
    ensure_positive("strike", strike)?;
    ensure_positive("time_to_expiry_years", time_to_expiry_years)?;
    ensure_non_negative("risk_free_rate", rate)?;
    validate_axis("spot_axis", spot_axis, ensure_positive)?;
    validate_axis("vol_axis", vol_axis, ensure_volatility)?;

    let log_m: Vec<f64> = spot_axis
        .iter()
        .map(|&s| log_moneyness(s, strike))
        .collect();

    let prices: Vec<Vec<f64>> = vol_axis
        .iter()
        .map(|&vol| {
            let slice = VolSlice::new(vol, time_to_expiry_years, rate);
            spot_axis
                .iter()
                .zip(&log_m)
                .map(|(&s, &x)| slice.price(s, strike, x, side))
                .collect()
        })
        .collect();

    tracing::debug!(
        rows = vol_axis.len(),
        cols = spot_axis.len(),
        %side,
        "evaluated price surface"
    );

    Ok(SurfaceGrid {
        spot_axis: spot_axis.to_vec(),
        vol_axis: vol_axis.to_vec(),
        prices,
    })
}

use serde::{Deserialize, Serialize};

/// `n` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the last point so rounding never overshoots the requested end
            out[n - 1] = end;
            out
        }
    }
}

/// Axis layout for a spot/volatility price surface.
///
/// The spot axis is expressed relative to the current spot so a single config
/// can be reused as the underlying moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Lowest spot as a multiple of the current spot
    #[serde(default = "default_spot_lower_multiple")]
    pub spot_lower_multiple: f64,

    /// Highest spot as a multiple of the current spot
    #[serde(default = "default_spot_upper_multiple")]
    pub spot_upper_multiple: f64,

    /// Samples per axis
    #[serde(default = "default_points")]
    pub points: usize,

    /// Lowest annualized volatility (decimal)
    #[serde(default = "default_vol_min")]
    pub vol_min: f64,

    /// Highest annualized volatility (decimal)
    #[serde(default = "default_vol_max")]
    pub vol_max: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl SurfaceConfig {
    /// 50×50 grid spanning 0.5×–1.5× spot and 10%–100% volatility
    pub fn dashboard() -> Self {
        Self {
            spot_lower_multiple: default_spot_lower_multiple(),
            spot_upper_multiple: default_spot_upper_multiple(),
            points: default_points(),
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
        }
    }

    /// 40×40 grid spanning 0.7×–1.3× spot
    pub fn compact() -> Self {
        Self {
            spot_lower_multiple: 0.7,
            spot_upper_multiple: 1.3,
            points: 40,
            ..Self::dashboard()
        }
    }

    pub fn spot_axis(&self, spot: f64) -> Vec<f64> {
        linspace(
            spot * self.spot_lower_multiple,
            spot * self.spot_upper_multiple,
            self.points,
        )
    }

    pub fn vol_axis(&self) -> Vec<f64> {
        linspace(self.vol_min, self.vol_max, self.points)
    }
}

fn default_spot_lower_multiple() -> f64 {
    0.5
}

fn default_spot_upper_multiple() -> f64 {
    1.5
}

fn default_points() -> usize {
    50
}

fn default_vol_min() -> f64 {
    0.10
}

fn default_vol_max() -> f64 {
    1.00
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let xs = linspace(0.1, 1.0, 10);
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[9], 1.0);
        assert!((xs[1] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn compact_axes_span_seventy_to_one_thirty_percent() {
        let cfg = SurfaceConfig::compact();
        let spots = cfg.spot_axis(100.0);
        assert_eq!(spots.len(), 40);
        assert!((spots[0] - 70.0).abs() < 1e-12);
        assert!((spots[39] - 130.0).abs() < 1e-12);
        assert_eq!(cfg.vol_axis().len(), 40);
    }
}

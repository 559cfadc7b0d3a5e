//! Conversion from dashboard-style inputs (percentages, whole days) into
//! [`ContractParams`].

use serde::{Deserialize, Serialize};

use super::types::{ContractParams, OptionSide};
use crate::error::{QuantError, QuantResult};

/// Inclusive range accepted for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, name: &'static str, value: f64) -> QuantResult<f64> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(QuantError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Permitted ranges for every dashboard input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    /// Days in the year used to convert `days_to_expiry`
    pub days_per_year: f64,
    pub spot: Range,
    pub strike: Range,
    pub days_to_expiry: Range,
    /// Percent
    pub volatility_pct: Range,
    /// Percent
    pub rate_pct: Range,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            days_per_year: 365.0,
            // Zero passes the range check but is rejected by ContractParams::validate
            spot: Range::new(0.0, 10_000.0),
            strike: Range::new(0.0, 10_000.0),
            days_to_expiry: Range::new(1.0, 365.0),
            volatility_pct: Range::new(1.0, 200.0),
            rate_pct: Range::new(0.0, 20.0),
        }
    }
}

/// Values as a user enters them: percentages and whole days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInputs {
    pub spot: f64,
    pub strike: f64,
    pub days_to_expiry: u32,
    pub volatility_pct: f64,
    pub rate_pct: f64,
    pub side: OptionSide,
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self {
            spot: 450.0,
            strike: 460.0,
            days_to_expiry: 30,
            volatility_pct: 20.0,
            rate_pct: 4.5,
            side: OptionSide::Call,
        }
    }
}

impl DashboardInputs {
    /// Range-check every field and convert to decimal/annual units.
    pub fn to_contract(&self, bounds: &InputBounds) -> QuantResult<ContractParams> {
        self.convert(bounds).map_err(|e| {
            tracing::warn!(error = %e, "rejected dashboard inputs");
            e
        })
    }

    fn convert(&self, bounds: &InputBounds) -> QuantResult<ContractParams> {
        let spot = bounds.spot.check("spot", self.spot)?;
        let strike = bounds.strike.check("strike", self.strike)?;
        let days = bounds
            .days_to_expiry
            .check("days_to_expiry", f64::from(self.days_to_expiry))?;
        let vol_pct = bounds
            .volatility_pct
            .check("volatility_pct", self.volatility_pct)?;
        let rate_pct = bounds.rate_pct.check("rate_pct", self.rate_pct)?;

        let params = ContractParams {
            spot,
            strike,
            time_to_expiry_years: days / bounds.days_per_year,
            risk_free_rate: rate_pct / 100.0,
            volatility: vol_pct / 100.0,
            side: self.side,
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_convert_to_decimal_units() {
        let params = DashboardInputs::default()
            .to_contract(&InputBounds::default())
            .unwrap();
        assert_eq!(params.spot, 450.0);
        assert_eq!(params.strike, 460.0);
        assert!((params.time_to_expiry_years - 30.0 / 365.0).abs() < 1e-15);
        assert!((params.volatility - 0.20).abs() < 1e-15);
        assert!((params.risk_free_rate - 0.045).abs() < 1e-15);
        assert_eq!(params.side, OptionSide::Call);
    }

    #[test]
    fn zero_days_is_out_of_range() {
        let inputs = DashboardInputs {
            days_to_expiry: 0,
            ..Default::default()
        };
        let err = inputs.to_contract(&InputBounds::default()).unwrap_err();
        assert!(matches!(
            err,
            QuantError::OutOfRange {
                name: "days_to_expiry",
                ..
            }
        ));
    }

    #[test]
    fn volatility_above_cap_rejected() {
        let inputs = DashboardInputs {
            volatility_pct: 250.0,
            ..Default::default()
        };
        assert!(inputs.to_contract(&InputBounds::default()).is_err());

        let zero_spot = DashboardInputs {
            spot: 0.0,
            ..Default::default()
        };
        assert!(zero_spot.to_contract(&InputBounds::default()).is_err());
    }
}

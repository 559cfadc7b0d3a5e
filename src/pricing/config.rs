use serde::{Deserialize, Serialize};

/// Pricer output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricerConfig {
    /// Report Rho alongside the other Greeks
    #[serde(default = "default_include_rho")]
    pub include_rho: bool,

    /// Calendar days used to turn annual Theta into a per-day figure
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            include_rho: default_include_rho(),
            days_per_year: default_days_per_year(),
        }
    }
}

impl PricerConfig {
    /// Four-Greek layout shown by the headline metrics row.
    pub fn without_rho() -> Self {
        Self {
            include_rho: false,
            ..Self::default()
        }
    }
}

fn default_include_rho() -> bool {
    true
}

fn default_days_per_year() -> f64 {
    365.0
}

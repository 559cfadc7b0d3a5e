#![allow(dead_code)] // Each test binary uses a different subset of helpers

use std::collections::HashMap;

use quant3d::{ContractParams, FetchError, OptionSide, PriceHistorySource};

/// Offline close history shipped with the tests
pub const DATA_DIR: &str = "tests/data";

/// The dashboard's default contract: 450 spot, 460 strike, 30 days, 4.5%, 20% vol.
pub fn reference_contract(side: OptionSide) -> ContractParams {
    ContractParams {
        spot: 450.0,
        strike: 460.0,
        time_to_expiry_years: 30.0 / 365.0,
        risk_free_rate: 0.045,
        volatility: 0.20,
        side,
    }
}

/// Assert `actual` is within `tol` of `expected`, with a readable message.
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tol,
        actual
    );
}

/// In-memory price history with scripted responses per ticker.
#[derive(Default)]
pub struct StaticPriceHistory {
    responses: HashMap<String, Result<Vec<f64>, FetchError>>,
}

impl StaticPriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_closes(mut self, ticker: &str, closes: Vec<f64>) -> Self {
        self.responses.insert(ticker.to_string(), Ok(closes));
        self
    }

    pub fn with_error(mut self, ticker: &str, error: FetchError) -> Self {
        self.responses.insert(ticker.to_string(), Err(error));
        self
    }
}

impl PriceHistorySource for StaticPriceHistory {
    fn daily_closes(&self, ticker: &str) -> Result<Vec<f64>, FetchError> {
        self.responses
            .get(ticker)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::not_found(ticker)))
    }
}

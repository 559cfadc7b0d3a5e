// Example: historical_vol.rs
// Resolves default spot and volatility for a ticker from an offline CSV
// directory, falling back to fixed inputs when the data is missing, then
// prices an at-the-money call with them.
//
// Usage:
//     cargo run --example historical_vol -- <csv_dir> <TICKER>
//
// Each ticker is read from <csv_dir>/<TICKER>.csv with `Date,Close` columns.

use std::env;

use anyhow::{bail, Result};
use quant3d::{
    price_and_greeks, resolve_defaults, CsvPriceHistory, DashboardInputs, FallbackInputs,
    InputBounds, InputOrigin, VolatilityConfig,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        bail!("usage: historical_vol <csv_dir> <TICKER>");
    }

    let source = CsvPriceHistory::new(&args[1]);
    let resolved = resolve_defaults(
        &source,
        &args[2],
        &FallbackInputs::default(),
        &VolatilityConfig::default(),
    );

    match &resolved.origin {
        InputOrigin::Market { ticker } => println!("Market data for {}", ticker),
        InputOrigin::Fallback { reason } => println!("Using fallback inputs: {}", reason),
    }
    println!(
        "Spot: {:.2} | Annualized vol: {:.2}%",
        resolved.spot, resolved.volatility_pct
    );

    let inputs = DashboardInputs {
        spot: resolved.spot,
        strike: resolved.spot.round(),
        volatility_pct: resolved.volatility_pct.max(1.0),
        ..Default::default()
    };
    let result = price_and_greeks(inputs.to_contract(&InputBounds::default())?)?;
    println!(
        "ATM {}d call: ${:.2} (delta {:.3}, vega {:.3})",
        inputs.days_to_expiry, result.price, result.greeks.delta, result.greeks.vega
    );
    Ok(())
}

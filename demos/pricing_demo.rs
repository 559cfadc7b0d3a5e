// Example: pricing_demo.rs
// Prices the dashboard's default contract, prints its Greeks and a spot-shock
// P&L table, then backs the volatility out of the computed price.
//
// Usage:
//     cargo run --example pricing_demo -- [config.toml]
//
// Without a config path every section uses its defaults.

use std::env;

use anyhow::Result;
use quant3d::{
    implied_volatility, price_and_greeks_with, simulate_pnl, DashboardInputs, Quant3dConfig,
};

fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => Quant3dConfig::from_file(&path)?,
        None => Quant3dConfig::default(),
    };

    let inputs = DashboardInputs::default();
    let params = inputs.to_contract(&config.inputs)?;
    let result = price_and_greeks_with(params, &config.pricer)?;

    println!(
        "{} | S={:.2} K={:.2} T={}d r={:.2}% σ={:.2}%",
        params.side.to_string().to_uppercase(),
        inputs.spot,
        inputs.strike,
        inputs.days_to_expiry,
        inputs.rate_pct,
        inputs.volatility_pct
    );
    println!("Option price: ${:.2}", result.price);
    for (name, value) in result.greeks.to_map() {
        println!("  {:<6} {:>10.4}", name, value);
    }

    // P&L table
    println!("\n{:>10} {:>14} {:>12}", "Spot", "Option value", "P&L");
    for row in simulate_pnl(params, &config.pnl)? {
        println!(
            "{:>10.2} {:>14.4} {:>12.2}",
            row.spot, row.option_value, row.pnl
        );
    }

    let iv = implied_volatility(result.price, &params, &config.implied_vol)?;
    println!("\nImplied vol recovered from price: {:.4}%", iv * 100.0);
    Ok(())
}

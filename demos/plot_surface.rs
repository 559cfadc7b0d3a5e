// Example: plot_surface.rs
// Evaluates the dashboard price surface for one contract and renders it as a
// spot × volatility heatmap.
//
// Usage:
//     cargo run --example plot_surface -- [call|put]
//
// The chart is written to surface.svg in the working directory.

use std::env;
use std::error::Error;

use plotters::prelude::*;
use quant3d::{default_configs, evaluate_surface_with, DashboardInputs, InputBounds, OptionSide};

fn main() -> Result<(), Box<dyn Error>> {
    let side: OptionSide = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => OptionSide::Call,
    };

    let inputs = DashboardInputs {
        side,
        ..Default::default()
    };
    let params = inputs.to_contract(&InputBounds::default())?;
    let grid = evaluate_surface_with(&params, &default_configs::dashboard())?;
    let (rows, cols) = grid.shape();
    let (min_price, max_price) = grid.price_range().ok_or("empty surface")?;
    println!(
        "{} surface: {} vols × {} spots, price {:.2}..{:.2}",
        side, rows, cols, min_price, max_price
    );

    let dx = grid.spot_axis[1] - grid.spot_axis[0];
    let dy = grid.vol_axis[1] - grid.vol_axis[0];
    let x_range = grid.spot_axis[0]..grid.spot_axis[cols - 1] + dx;
    let y_range = grid.vol_axis[0] * 100.0..(grid.vol_axis[rows - 1] + dy) * 100.0;

    // Plot
    let root = SVGBackend::new("surface.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "BSM {} price | K={:.0} T={}d r={:.2}%",
                side, inputs.strike, inputs.days_to_expiry, inputs.rate_pct
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot ($)")
        .y_desc("Volatility (%)")
        .draw()?;

    // Cheap cells blue, expensive cells red
    let span = (max_price - min_price).max(f64::EPSILON);
    chart.draw_series(grid.prices.iter().enumerate().flat_map(|(i, row)| {
        let vol = grid.vol_axis[i] * 100.0;
        let spots = &grid.spot_axis;
        row.iter().enumerate().map(move |(j, &price)| {
            let hue = 0.66 * (1.0 - (price - min_price) / span);
            Rectangle::new(
                [(spots[j], vol), (spots[j] + dx, vol + dy * 100.0)],
                HSLColor(hue, 0.8, 0.5).filled(),
            )
        })
    }))?;

    // Strike marker
    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (inputs.strike, grid.vol_axis[0] * 100.0),
            (inputs.strike, (grid.vol_axis[rows - 1] + dy) * 100.0),
        ],
        BLACK.stroke_width(2),
    )))?;

    println!("Chart saved to surface.svg");
    Ok(())
}

mod test_utils;

use quant3d::{
    default_configs, evaluate_surface, evaluate_surface_with, linspace, price_and_greeks,
    ContractParams, OptionSide, QuantError,
};
use test_utils::reference_contract;

/// Every cell must equal the scalar pricer at the same (spot, vol), exactly.
#[test]
fn test_grid_matches_scalar_pricer_bit_for_bit() {
    let spots = linspace(300.0, 600.0, 13);
    let vols = linspace(0.05, 1.2, 7);

    for side in [OptionSide::Call, OptionSide::Put] {
        let base = reference_contract(side);
        let grid = evaluate_surface(
            &spots,
            &vols,
            base.strike,
            base.time_to_expiry_years,
            base.risk_free_rate,
            side,
        )
        .unwrap();

        assert_eq!(grid.prices.len(), vols.len());
        for (i, row) in grid.prices.iter().enumerate() {
            assert_eq!(row.len(), spots.len());
            for (j, &cell) in row.iter().enumerate() {
                let scalar = price_and_greeks(ContractParams {
                    spot: spots[j],
                    volatility: vols[i],
                    ..base
                })
                .unwrap()
                .price;
                assert_eq!(cell, scalar, "{side} cell [{i}][{j}]");
            }
        }
    }
}

/// Non-square axes make sure rows follow the vol axis and columns the spot axis.
#[test]
fn test_grid_shape_follows_axes() {
    let spots = linspace(50.0, 150.0, 9);
    let vols = [0.15, 0.3, 0.6];
    let grid = evaluate_surface(&spots, &vols, 100.0, 0.5, 0.01, OptionSide::Call).unwrap();

    assert_eq!(grid.shape(), (3, 9));
    assert_eq!(grid.spot_axis, spots);
    assert_eq!(grid.vol_axis, vols.to_vec());
    assert!(grid.price_at(2, 8).is_some());
    assert!(grid.price_at(3, 0).is_none());
}

#[test]
fn test_call_surface_is_monotone_in_spot_and_vol() {
    let params = reference_contract(OptionSide::Call);
    let grid = evaluate_surface_with(&params, &default_configs::compact()).unwrap();
    assert_eq!(grid.shape(), (40, 40));

    for row in &grid.prices {
        assert!(
            row.windows(2).all(|w| w[1] >= w[0] - 1e-9),
            "price must rise with spot"
        );
    }
    for j in 0..grid.spot_axis.len() {
        for i in 1..grid.vol_axis.len() {
            assert!(
                grid.prices[i][j] >= grid.prices[i - 1][j] - 1e-9,
                "price must rise with vol at column {j}"
            );
        }
    }
}

#[test]
fn test_dashboard_preset_spans_half_to_one_and_a_half_spot() {
    let params = reference_contract(OptionSide::Put);
    let grid = evaluate_surface_with(&params, &default_configs::dashboard()).unwrap();

    assert_eq!(grid.shape(), (50, 50));
    assert!((grid.spot_axis[0] - 225.0).abs() < 1e-9);
    assert!((grid.spot_axis[49] - 675.0).abs() < 1e-9);
    assert!((grid.vol_axis[0] - 0.10).abs() < 1e-12);
    assert!((grid.vol_axis[49] - 1.00).abs() < 1e-12);
    assert!(grid.prices.iter().flatten().all(|p| p.is_finite() && *p >= 0.0));
}

#[test]
fn test_mesh_is_renderer_ready() {
    let params = reference_contract(OptionSide::Call);
    let grid = evaluate_surface_with(&params, &default_configs::compact()).unwrap();
    let (x, y, z) = grid.mesh();

    assert_eq!(x.len(), z.len());
    assert_eq!(y.len(), z.len());
    for i in 0..z.len() {
        assert_eq!(x[i].len(), z[i].len());
        assert_eq!(y[i].len(), z[i].len());
        assert_eq!(x[i], grid.spot_axis);
        assert!(y[i].iter().all(|&v| v == grid.vol_axis[i]));
    }
}

#[test]
fn test_invalid_axis_values_are_rejected() {
    let spots = [100.0, -1.0];
    let err = evaluate_surface(&spots, &[0.2], 100.0, 0.5, 0.0, OptionSide::Call).unwrap_err();
    assert!(matches!(
        err,
        QuantError::InvalidParameter {
            name: "spot_axis",
            ..
        }
    ));

    let err = evaluate_surface(&[100.0], &[f64::NAN], 100.0, 0.5, 0.0, OptionSide::Call)
        .unwrap_err();
    assert!(matches!(
        err,
        QuantError::InvalidParameter {
            name: "vol_axis",
            ..
        }
    ));

    assert!(evaluate_surface(&[100.0], &[0.2], 100.0, 0.0, 0.0, OptionSide::Call).is_err());
}

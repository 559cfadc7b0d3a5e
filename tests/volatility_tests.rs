mod test_utils;

use quant3d::{
    annualized_vol_pct, annualized_vol_pct_with, CsvPriceHistory, PriceHistorySource,
    QuantError, ReturnKind, VolatilityConfig,
};
use test_utils::{assert_close, DATA_DIR};

/// Four closes give three simple returns; sample std-dev × √252 × 100.
#[test]
fn test_short_series_annualized_percentage() {
    let vol = annualized_vol_pct(&[100.0, 102.0, 99.0, 101.0]).unwrap();
    assert!(vol.is_finite() && vol > 0.0);
    assert_close(vol, 45.379_490_980_922_54, 1e-9, "simple-return vol");
}

#[test]
fn test_log_returns_variant() {
    let config = VolatilityConfig {
        return_kind: ReturnKind::Log,
        ..Default::default()
    };
    let vol = annualized_vol_pct_with(&[100.0, 102.0, 99.0, 101.0], &config).unwrap();
    assert_close(vol, 45.601_124_357_141_24, 1e-9, "log-return vol");
}

#[test]
fn test_insufficient_data_is_an_error_not_nan() {
    for closes in [vec![], vec![100.0], vec![100.0, 101.0]] {
        let got = closes.len();
        match annualized_vol_pct(&closes) {
            Err(QuantError::InsufficientData { needed, got: g }) => {
                assert_eq!(needed, 3);
                assert_eq!(g, got);
            }
            other => panic!("expected InsufficientData for {got} closes, got {other:?}"),
        }
    }
}

#[test]
fn test_trading_day_convention_scales_by_sqrt() {
    let closes = [100.0, 102.0, 99.0, 101.0];
    let daily = annualized_vol_pct_with(
        &closes,
        &VolatilityConfig {
            trading_days_per_year: 1.0,
            ..Default::default()
        },
    )
    .unwrap();
    let annual = annualized_vol_pct(&closes).unwrap();
    assert_close(annual / daily, 252.0_f64.sqrt(), 1e-12, "annualization factor");
}

/// Year-to-date SPY-like closes from the offline fixture.
#[test]
fn test_vol_from_csv_fixture() {
    let source = CsvPriceHistory::new(DATA_DIR);
    let closes = source.daily_closes("SPY").expect("fixture should load");
    assert_eq!(closes.len(), 25);

    let vol = annualized_vol_pct(&closes).unwrap();
    assert_close(vol, 10.320_517_676_663_26, 1e-9, "fixture vol");
}

#[test]
fn test_overflowing_close_ratios_are_rejected() {
    let closes = [1e300, 1e-300, 1e300];
    for return_kind in [ReturnKind::Simple, ReturnKind::Log] {
        let config = VolatilityConfig {
            return_kind,
            ..Default::default()
        };
        match annualized_vol_pct_with(&closes, &config) {
            Err(QuantError::InvalidParameter { name, .. }) => assert_eq!(name, "closes"),
            other => panic!("expected InvalidParameter for {return_kind:?}, got {other:?}"),
        }
    }
}

// Closed-form Black-Scholes-Merton pricing shared by the scalar pricer and the
// surface evaluator. Both paths go through `VolSlice` so that a grid cell is
// bit-identical to the scalar price at the same point.

pub mod implied;

use std::f64::consts::PI;

use crate::pricing::types::{ContractParams, Greeks, OptionSide, PricingResult};

/// Standard normal cumulative distribution function.
///
/// Written with `erfc` so the lower tail keeps its relative precision; the
/// `1 + erf` form cancels to zero there and turns deep out-of-the-money prices
/// negative.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density.
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Terms that depend only on volatility, expiry and rate.
///
/// One slice is built per volatility row of a surface and reused for every spot.
#[derive(Debug, Clone, Copy)]
pub struct VolSlice {
    pub vol: f64,
    pub sqrt_t: f64,
    /// σ√T
    pub vol_sqrt_t: f64,
    /// (r + σ²/2)·T
    pub drift: f64,
    /// e^{-rT}
    pub discount: f64,
}

impl VolSlice {
    pub fn new(vol: f64, t: f64, rate: f64) -> Self {
        let sqrt_t = t.sqrt();
        Self {
            vol,
            sqrt_t,
            vol_sqrt_t: vol * sqrt_t,
            drift: (rate + 0.5 * vol * vol) * t,
            discount: (-rate * t).exp(),
        }
    }

    /// d1 and d2 for a precomputed `ln(S/K)`.
    #[inline]
    pub fn d1_d2(&self, log_moneyness: f64) -> (f64, f64) {
        let d1 = (log_moneyness + self.drift) / self.vol_sqrt_t;
        (d1, d1 - self.vol_sqrt_t)
    }

    /// Option price for a precomputed `ln(S/K)`.
    #[inline]
    pub fn price(&self, spot: f64, strike: f64, log_moneyness: f64, side: OptionSide) -> f64 {
        let (d1, d2) = self.d1_d2(log_moneyness);
        match side {
            OptionSide::Call => spot * norm_cdf(d1) - strike * self.discount * norm_cdf(d2),
            OptionSide::Put => strike * self.discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
        }
    }
}

/// ln(S/K), computed the same way by every caller.
#[inline]
pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
    (spot / strike).ln()
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    VolSlice::new(sigma, T, r).price(S, K, log_moneyness(S, K), OptionSide::Call)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    VolSlice::new(sigma, T, r).price(S, K, log_moneyness(S, K), OptionSide::Put)
}

/// Price only, for already validated parameters.
pub fn price(params: &ContractParams) -> f64 {
    VolSlice::new(
        params.volatility,
        params.time_to_expiry_years,
        params.risk_free_rate,
    )
    .price(
        params.spot,
        params.strike,
        log_moneyness(params.spot, params.strike),
        params.side,
    )
}

/// Price and Greeks for already validated parameters.
///
/// `days_per_year` scales Theta to a per-day figure. Rho is always computed
/// here; callers drop it when configured to.
pub fn evaluate(params: &ContractParams, days_per_year: f64) -> PricingResult {
    let ContractParams {
        spot,
        strike,
        time_to_expiry_years: t,
        risk_free_rate: rate,
        volatility: vol,
        side,
    } = *params;

    let slice = VolSlice::new(vol, t, rate);
    let x = log_moneyness(spot, strike);
    let (d1, d2) = slice.d1_d2(x);
    let price = slice.price(spot, strike, x, side);

    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = strike * slice.discount;

    let delta = match side {
        OptionSide::Call => norm_cdf(d1),
        OptionSide::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma and vega do not depend on the side
    let gamma = pdf_d1 / (spot * slice.vol_sqrt_t);
    let vega = spot * pdf_d1 * slice.sqrt_t / 100.0;

    let decay = -(spot * pdf_d1 * vol) / (2.0 * slice.sqrt_t);
    let theta = match side {
        OptionSide::Call => decay - rate * discounted_strike * norm_cdf(d2),
        OptionSide::Put => decay + rate * discounted_strike * norm_cdf(-d2),
    } / days_per_year;

    let rho = match side {
        OptionSide::Call => t * discounted_strike * norm_cdf(d2) / 100.0,
        OptionSide::Put => -t * discounted_strike * norm_cdf(-d2) / 100.0,
    };

    PricingResult {
        price,
        greeks: Greeks {
            delta,
            gamma,
            vega,
            theta,
            rho: Some(rho),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 1e-3);
        assert_eq!(norm_cdf(-40.0), 0.0);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[test]
    fn test_norm_cdf_lower_tail_keeps_precision() {
        // N(-10) = 7.619853024160527e-24
        let tail = norm_cdf(-10.0);
        assert!(tail > 0.0);
        assert!((tail / 7.619_853_024_160_527e-24 - 1.0).abs() < 1e-12);
        assert!(norm_cdf(-30.0) > 0.0);
    }

    #[test]
    fn test_deep_otm_put_is_never_negative() {
        // Dashboard put surface cells that used to cancel to about -2e-14
        for (spot, vol) in [(601.53, 0.1184), (656.63, 0.1551), (675.0, 0.10)] {
            let put = bs_put_price(spot, 460.0, 0.045, 30.0 / 365.0, vol);
            assert!(put >= 0.0, "put at spot {spot}, vol {vol}: {put}");
        }
    }

    #[test]
    fn test_norm_pdf_peak() {
        assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert!(norm_pdf(50.0) >= 0.0);
    }

    #[test]
    fn test_textbook_atm_call() {
        // ATM call, 20% vol, 1 year, 5% rate
        let call = bs_call_price(100.0, 100.0, 0.05, 1.0, 0.20);
        assert!((call - 10.450_583_572_185_565).abs() < 1e-9);

        let put = bs_put_price(100.0, 100.0, 0.05, 1.0, 0.20);
        let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
        assert!(parity.abs() < 1e-10);
    }

    #[test]
    fn test_rho_always_present_from_kernel() {
        let params = ContractParams {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry_years: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.20,
            side: OptionSide::Call,
        };
        let result = evaluate(&params, 365.0);
        let rho = result.greeks.rho.unwrap();
        assert!((rho - 0.532_324_815_453_763_4).abs() < 1e-9);
        assert!((result.greeks.delta - 0.636_830_651_175_619_1).abs() < 1e-9);
    }
}

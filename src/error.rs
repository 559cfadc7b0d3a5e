//! Error types for quant3d

use thiserror::Error;

/// Errors raised by the pricing core before any formula is evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantError {
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Input {name}={value} outside permitted range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Solver did not converge: {reason}")]
    NoConvergence { reason: String },
}

pub type QuantResult<T> = Result<T, QuantError>;

impl QuantError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub fn no_convergence(reason: impl Into<String>) -> Self {
        Self::NoConvergence {
            reason: reason.into(),
        }
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> QuantResult<()> {
    if !value.is_finite() {
        return Err(QuantError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(QuantError::invalid(name, value, "must be > 0"));
    }
    Ok(())
}

/// Require `value` to be finite and non-negative.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> QuantResult<()> {
    if !value.is_finite() {
        return Err(QuantError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(QuantError::invalid(name, value, "must be >= 0"));
    }
    Ok(())
}

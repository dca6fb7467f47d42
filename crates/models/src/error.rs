use thiserror::Error;

use crate::input::ModelKind;

/// Input rejected before a model runs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("pulsation period must be positive (got {0} days)")]
    NonPositivePeriod(f64),
    #[error("Hubble constant must be positive (got {0} km/s/Mpc)")]
    NonPositiveHubbleConstant(f64),
    #[error("redshift must not be negative (got {0})")]
    NegativeRedshift(f64),
    #[error("orbital phase must lie within [0, 1] (got {0})")]
    PhaseOutOfRange(f64),
    #[error("{kind} model cannot evaluate {input} input")]
    ModelMismatch { kind: ModelKind, input: ModelKind },
    #[error("{quantity} is too large to represent (got {value})")]
    Unrepresentable { quantity: &'static str, value: f64 },
}

/// Reject NaN and infinities for the named field.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

/// Reject model outputs that overflowed for extreme but finite inputs.
pub(crate) fn ensure_representable(
    quantity: &'static str,
    value: f64,
) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::Unrepresentable { quantity, value })
    }
}

//! Cepheid variables as standard candles.
//!
//! The pulsation period fixes the absolute magnitude through a simplified
//! period-luminosity relation, and the distance modulus `m - M = 5 log10(d / 10 pc)`
//! is inverted for the distance.

use cosmic_core::units::parsecs_to_light_years;

use crate::error::{ValidationError, ensure_finite, ensure_representable};
use crate::input::CepheidInput;
use crate::result::CepheidResult;

/// Slope of the period-luminosity relation (magnitudes per decade of period).
pub const PL_SLOPE: f64 = -2.43;
/// Zero point of the period-luminosity relation (magnitudes).
pub const PL_ZERO_POINT: f64 = -4.05;

/// Absolute magnitude `M = -2.43 log10(P) - 4.05` for a period in days.
pub fn absolute_magnitude(period_days: f64) -> f64 {
    PL_SLOPE * period_days.log10() + PL_ZERO_POINT
}

/// Distance in parsecs from apparent and absolute magnitude.
pub fn distance_modulus_parsecs(apparent_magnitude: f64, absolute_magnitude: f64) -> f64 {
    let modulus = apparent_magnitude - absolute_magnitude;
    10.0 * 10f64.powf(modulus / 5.0)
}

pub fn evaluate(input: &CepheidInput) -> Result<CepheidResult, ValidationError> {
    let period = ensure_finite("pulsation period", input.period_days)?;
    let apparent = ensure_finite("apparent magnitude", input.apparent_magnitude)?;
    if period <= 0.0 {
        return Err(ValidationError::NonPositivePeriod(period));
    }

    let absolute = absolute_magnitude(period);
    let parsecs = ensure_representable(
        "distance in parsecs",
        distance_modulus_parsecs(apparent, absolute),
    )?;
    Ok(CepheidResult {
        absolute_magnitude: absolute,
        distance_parsecs: parsecs,
        distance_light_years: ensure_representable(
            "distance in light years",
            parsecs_to_light_years(parsecs),
        )?,
    })
}

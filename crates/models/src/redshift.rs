//! Galaxy distances from redshift via Hubble's law.
//!
//! This is the simplified teaching model: a linear velocity law up to
//! `z = 0.1` (inclusive), a Doppler-style approximation above it, and a
//! lookback time scaled against `H0 = 100`. The formulas are kept exactly as
//! presented in the course rather than replaced by a cosmological integral.

use cosmic_core::constants::{
    LIGHT_YEARS_PER_PARSEC, LINEAR_REDSHIFT_LIMIT, REFERENCE_HUBBLE_CONSTANT, SPEED_OF_LIGHT_KM_S,
};
use cosmic_core::units::mpc_to_million_light_years;

use crate::error::{ValidationError, ensure_finite, ensure_representable};
use crate::input::RedshiftInput;
use crate::result::{RedshiftResult, VelocityRegime};

/// Velocity law for redshift `z`; `z == 0.1` stays on the linear side.
pub fn regime_for(z: f64) -> VelocityRegime {
    if z <= LINEAR_REDSHIFT_LIMIT {
        VelocityRegime::Linear
    } else {
        VelocityRegime::Relativistic
    }
}

/// Recession velocity (km/s) for redshift `z` under `regime`.
///
/// The relativistic branch is `((1+z)² - 1) / ((1+z)² + 1) · c`, evaluated
/// as `1 - 2 / ((1+z)² + 1)` so that an overflowing `(1+z)²` tends to `c`.
pub fn recession_velocity_km_s(z: f64, regime: VelocityRegime) -> f64 {
    match regime {
        VelocityRegime::Linear => z * SPEED_OF_LIGHT_KM_S,
        VelocityRegime::Relativistic => {
            let stretch = (1.0 + z).powi(2);
            (1.0 - 2.0 / (stretch + 1.0)) * SPEED_OF_LIGHT_KM_S
        }
    }
}

/// Approximate lookback time in billions of years.
pub fn lookback_time_gyr(distance_mly: f64, hubble_constant: f64) -> f64 {
    distance_mly / LIGHT_YEARS_PER_PARSEC / (hubble_constant / REFERENCE_HUBBLE_CONSTANT)
}

pub fn evaluate(input: &RedshiftInput) -> Result<RedshiftResult, ValidationError> {
    let z = ensure_finite("redshift", input.redshift)?;
    let h0 = ensure_finite("Hubble constant", input.hubble_constant_km_s_mpc)?;
    if h0 <= 0.0 {
        return Err(ValidationError::NonPositiveHubbleConstant(h0));
    }
    if z < 0.0 {
        return Err(ValidationError::NegativeRedshift(z));
    }

    let regime = regime_for(z);
    let velocity = recession_velocity_km_s(z, regime);
    let distance_mpc = ensure_representable("distance in Mpc", velocity / h0)?;
    let distance_mly = ensure_representable(
        "distance in million light years",
        mpc_to_million_light_years(distance_mpc),
    )?;
    Ok(RedshiftResult {
        recession_velocity_km_s: velocity,
        distance_mpc,
        distance_million_light_years: distance_mly,
        lookback_time_gyr: ensure_representable(
            "lookback time",
            lookback_time_gyr(distance_mly, h0),
        )?,
        regime,
    })
}

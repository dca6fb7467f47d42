//! Simulated stellar parallax over one Earth orbit.
//!
//! The demonstration star has a fixed maximum shift of 0.76 arcsec; the shift
//! seen at a given orbital phase is `|sin θ|` of that ceiling.

use cosmic_core::constants::{PARALLAX_CEILING_ARCSEC, PARALLAX_ZERO_TOLERANCE_ARCSEC};
use cosmic_core::units::{parallax_to_parsecs, phase_to_radians};

use crate::error::{ValidationError, ensure_finite};
use crate::input::ParallaxInput;
use crate::result::{Distance, ParallaxResult};

/// Apparent angular shift (arcsec) at orbital phase `phase`.
///
/// Shifts below the zero tolerance snap to exactly 0 so that phases 0, 0.5
/// and 1 report no shift despite `sin(π) != 0` in double precision.
pub fn parallax_angle_arcsec(phase: f64) -> f64 {
    let theta = phase_to_radians(phase);
    let angle = theta.sin().abs() * PARALLAX_CEILING_ARCSEC;
    if angle < PARALLAX_ZERO_TOLERANCE_ARCSEC {
        0.0
    } else {
        angle
    }
}

/// Distance implied by a parallax angle; zero shift gives [`Distance::Unbounded`].
pub fn distance_from_angle(angle_arcsec: f64) -> Distance {
    if angle_arcsec > 0.0 {
        Distance::Finite(parallax_to_parsecs(angle_arcsec))
    } else {
        Distance::Unbounded
    }
}

pub fn evaluate(input: &ParallaxInput) -> Result<ParallaxResult, ValidationError> {
    let phase = ensure_finite("orbital phase", input.orbital_phase_fraction)?;
    if !(0.0..=1.0).contains(&phase) {
        return Err(ValidationError::PhaseOutOfRange(phase));
    }

    let angle = parallax_angle_arcsec(phase);
    Ok(ParallaxResult {
        parallax_angle_arcsec: angle,
        distance_parsecs: distance_from_angle(angle),
    })
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::result::DistanceResult;
use crate::{cepheid, parallax, redshift};

/// Identifies one of the three distance models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Parallax,
    Cepheid,
    Redshift,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::Parallax => "parallax",
            ModelKind::Cepheid => "cepheid",
            ModelKind::Redshift => "redshift",
        };
        f.write_str(name)
    }
}

/// Earth's position along its orbit for the parallax demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxInput {
    /// 0 = reference point, 1 = one full revolution.
    pub orbital_phase_fraction: f64,
}

impl ParallaxInput {
    pub fn new(orbital_phase_fraction: f64) -> Self {
        Self {
            orbital_phase_fraction,
        }
    }

    /// Phase for a slider that runs from 0 to `max` (the page uses 0..=100).
    pub fn from_slider(position: f64, max: f64) -> Self {
        Self::new(position / max)
    }
}

/// Observed pulsation period and brightness of a Cepheid variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CepheidInput {
    pub period_days: f64,
    pub apparent_magnitude: f64,
}

/// Measured redshift of a galaxy and the assumed expansion rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedshiftInput {
    pub redshift: f64,
    pub hubble_constant_km_s_mpc: f64,
}

/// Observational parameters for one of the distance models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ObservationInput {
    Parallax(ParallaxInput),
    Cepheid(CepheidInput),
    Redshift(RedshiftInput),
}

impl ObservationInput {
    pub fn kind(&self) -> ModelKind {
        match self {
            ObservationInput::Parallax(_) => ModelKind::Parallax,
            ObservationInput::Cepheid(_) => ModelKind::Cepheid,
            ObservationInput::Redshift(_) => ModelKind::Redshift,
        }
    }

    /// Run the model matching this input's variant.
    pub fn evaluate(&self) -> Result<DistanceResult, ValidationError> {
        match self {
            ObservationInput::Parallax(input) => parallax::evaluate(input).map(Into::into),
            ObservationInput::Cepheid(input) => cepheid::evaluate(input).map(Into::into),
            ObservationInput::Redshift(input) => redshift::evaluate(input).map(Into::into),
        }
    }
}

impl From<ParallaxInput> for ObservationInput {
    fn from(input: ParallaxInput) -> Self {
        ObservationInput::Parallax(input)
    }
}

impl From<CepheidInput> for ObservationInput {
    fn from(input: CepheidInput) -> Self {
        ObservationInput::Cepheid(input)
    }
}

impl From<RedshiftInput> for ObservationInput {
    fn from(input: RedshiftInput) -> Self {
        ObservationInput::Redshift(input)
    }
}

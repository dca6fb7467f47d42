use serde::Serialize;

use crate::input::ModelKind;

/// A distance that may be unbounded.
///
/// Zero parallax is a valid observation meaning "too far to measure"; it is
/// carried as `Unbounded` so that no float infinity leaks into later arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Finite(f64),
    Unbounded,
}

impl Distance {
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Distance::Unbounded)
    }
}

/// Output of the parallax model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParallaxResult {
    pub parallax_angle_arcsec: f64,
    pub distance_parsecs: Distance,
}

/// Output of the Cepheid period-luminosity model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CepheidResult {
    pub absolute_magnitude: f64,
    pub distance_parsecs: f64,
    pub distance_light_years: f64,
}

/// Which velocity law produced a redshift result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityRegime {
    /// `v = z c`, used for `z <= 0.1`.
    Linear,
    /// Doppler-style approximation used above `z = 0.1`.
    Relativistic,
}

/// Output of the Hubble's-law model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RedshiftResult {
    pub recession_velocity_km_s: f64,
    pub distance_mpc: f64,
    pub distance_million_light_years: f64,
    pub lookback_time_gyr: f64,
    pub regime: VelocityRegime,
}

/// Result of any distance model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum DistanceResult {
    Parallax(ParallaxResult),
    Cepheid(CepheidResult),
    Redshift(RedshiftResult),
}

impl DistanceResult {
    pub fn kind(&self) -> ModelKind {
        match self {
            DistanceResult::Parallax(_) => ModelKind::Parallax,
            DistanceResult::Cepheid(_) => ModelKind::Cepheid,
            DistanceResult::Redshift(_) => ModelKind::Redshift,
        }
    }
}

impl From<ParallaxResult> for DistanceResult {
    fn from(result: ParallaxResult) -> Self {
        DistanceResult::Parallax(result)
    }
}

impl From<CepheidResult> for DistanceResult {
    fn from(result: CepheidResult) -> Self {
        DistanceResult::Cepheid(result)
    }
}

impl From<RedshiftResult> for DistanceResult {
    fn from(result: RedshiftResult) -> Self {
        DistanceResult::Redshift(result)
    }
}

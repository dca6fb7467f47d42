//! Core units, constants, and shared primitives for the cosmic distance ladder workspace.

/// Physical constants shared by every distance model.
pub mod constants {
    /// Speed of light in vacuum (km/s).
    pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;
    /// Light years per parsec, rounded the way the course presents it.
    ///
    /// The same factor converts megaparsecs to millions of light years.
    pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26;
    /// Largest simulated parallax shift of the demonstration star (arcsec).
    pub const PARALLAX_CEILING_ARCSEC: f64 = 0.76;
    /// Parallax shifts below this are treated as no measurable shift (arcsec).
    pub const PARALLAX_ZERO_TOLERANCE_ARCSEC: f64 = 1.0e-12;
    /// Hubble constant the lookback approximation is normalised against (km/s/Mpc).
    pub const REFERENCE_HUBBLE_CONSTANT: f64 = 100.0;
    /// Redshift at or below which the linear velocity law applies.
    pub const LINEAR_REDSHIFT_LIMIT: f64 = 0.1;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::LIGHT_YEARS_PER_PARSEC;

    /// Convert parsecs to light years.
    #[inline]
    pub fn parsecs_to_light_years(pc: f64) -> f64 {
        pc * LIGHT_YEARS_PER_PARSEC
    }

    /// Convert megaparsecs to millions of light years.
    #[inline]
    pub fn mpc_to_million_light_years(mpc: f64) -> f64 {
        mpc * LIGHT_YEARS_PER_PARSEC
    }

    /// Convert an orbital phase fraction (0 = reference point, 1 = full revolution) to radians.
    #[inline]
    pub fn phase_to_radians(phase: f64) -> f64 {
        phase * std::f64::consts::TAU
    }

    /// Parallax distance in parsecs for an angle in arcseconds.
    #[inline]
    pub fn parallax_to_parsecs(angle_arcsec: f64) -> f64 {
        1.0 / angle_arcsec
    }
}

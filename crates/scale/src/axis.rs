//! Logarithmic axis mapping.
//!
//! A [`LogAxis`] maps a positive magnitude onto a pixel range so that equal
//! ratios cover equal distances. Domains and ranges may be reversed (the HR
//! diagram plots temperature hot-to-cool and luminosity bottom-to-top).

use crate::error::ScaleError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogAxis {
    domain: (f64, f64),
    range: (f64, f64),
    log_start: f64,
    log_span: f64,
}

impl LogAxis {
    /// Build an axis from a positive domain and a finite target range.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ScaleError> {
        let (d0, d1) = domain;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(d0) || !positive(d1) || d0 == d1 {
            return Err(ScaleError::InvalidDomain(d0, d1));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ScaleError::InvalidRange(range.0, range.1));
        }

        let log_start = d0.ln();
        Ok(Self {
            domain,
            range,
            log_start,
            log_span: d1.ln() - log_start,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Smallest magnitude on the axis, whichever end it sits on.
    pub fn floor(&self) -> f64 {
        self.domain.0.min(self.domain.1)
    }

    /// Largest magnitude on the axis.
    pub fn ceiling(&self) -> f64 {
        self.domain.0.max(self.domain.1)
    }

    /// Map `value` onto the range, clamping it into the domain first.
    ///
    /// Non-positive or non-finite values have no logarithm and are rejected.
    pub fn position(&self, value: f64) -> Result<f64, ScaleError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ScaleError::InvalidMagnitude(value));
        }
        Ok(self.project(value))
    }

    /// Like [`LogAxis::position`], but invalid values land on the domain floor.
    pub fn position_or_floor(&self, value: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            self.project(value)
        } else {
            self.project(self.floor())
        }
    }

    fn project(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.floor(), self.ceiling());
        let t = (clamped.ln() - self.log_start) / self.log_span;
        self.range.0 + (self.range.1 - self.range.0) * t
    }
}

/// One-shot mapping of `value` on a logarithmic axis.
pub fn map_to_axis_position(
    value: f64,
    domain: (f64, f64),
    range: (f64, f64),
) -> Result<f64, ScaleError> {
    LogAxis::new(domain, range)?.position(value)
}

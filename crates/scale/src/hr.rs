//! Hertzsprung-Russell classification chart.
//!
//! Temperature runs hot-to-cool left to right and luminosity bottom-to-top,
//! both on logarithmic axes.

use serde::Serialize;

use crate::axis::LogAxis;
use crate::catalogue::{MAIN_SEQUENCE, StarClass};
use crate::error::ScaleError;
use crate::format::format_grouped;

/// Temperature domain in kelvin; reversed so hotter stars sit on the left.
pub const TEMPERATURE_DOMAIN_K: (f64, f64) = (50_000.0, 2_000.0);
/// Luminosity domain relative to the Sun.
pub const LUMINOSITY_DOMAIN_SOLAR: (f64, f64) = (1.0e-4, 1.0e6);

/// A star class placed on the diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HrPoint {
    pub spectral_type: String,
    pub temperature_k: f64,
    pub luminosity_solar: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct HrDiagram {
    classes: Vec<StarClass>,
    temperature_axis: LogAxis,
    luminosity_axis: LogAxis,
}

impl HrDiagram {
    /// Lay out `classes` on a plot area of `width` × `height`.
    pub fn new(classes: Vec<StarClass>, width: f64, height: f64) -> Result<Self, ScaleError> {
        Ok(Self {
            classes,
            temperature_axis: LogAxis::new(TEMPERATURE_DOMAIN_K, (0.0, width))?,
            luminosity_axis: LogAxis::new(LUMINOSITY_DOMAIN_SOLAR, (height, 0.0))?,
        })
    }

    pub fn classes(&self) -> &[StarClass] {
        &self.classes
    }

    pub fn temperature_axis(&self) -> &LogAxis {
        &self.temperature_axis
    }

    pub fn luminosity_axis(&self) -> &LogAxis {
        &self.luminosity_axis
    }

    /// Plot coordinates of a temperature/luminosity pair.
    pub fn project(&self, temperature_k: f64, luminosity_solar: f64) -> Result<(f64, f64), ScaleError> {
        Ok((
            self.temperature_axis.position(temperature_k)?,
            self.luminosity_axis.position(luminosity_solar)?,
        ))
    }

    pub fn points(&self) -> Vec<HrPoint> {
        self.classes
            .iter()
            .map(|class| HrPoint {
                spectral_type: class.spectral_type.clone(),
                temperature_k: class.temperature_k,
                luminosity_solar: class.luminosity_solar,
                x: self.temperature_axis.position_or_floor(class.temperature_k),
                y: self.luminosity_axis.position_or_floor(class.luminosity_solar),
            })
            .collect()
    }

    /// Main-sequence reference curve in plot coordinates, hot to cool.
    pub fn main_sequence(&self) -> Vec<(f64, f64)> {
        MAIN_SEQUENCE
            .iter()
            .map(|&(t, l)| {
                (
                    self.temperature_axis.position_or_floor(t),
                    self.luminosity_axis.position_or_floor(l),
                )
            })
            .collect()
    }
}

/// Luminosity tick label; the solar value is called out.
pub fn format_luminosity_tick(value: f64) -> String {
    if value == 1.0 {
        "1 (Sun)".to_string()
    } else {
        format!("{value}")
    }
}

/// Temperature tick label with thousands separators.
pub fn format_temperature_tick(value: f64) -> String {
    format_grouped(value, 3)
}

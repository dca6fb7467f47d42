//! Display strings for model results, one labelled row per quantity.

use cosmic_models::{Distance, DistanceResult};
use serde::Serialize;

use crate::format::{UNBOUNDED_LABEL, format_fixed, format_grouped};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
}

impl DisplayRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Rows shown by a widget's results panel.
pub fn display_rows(result: &DistanceResult) -> Vec<DisplayRow> {
    match result {
        DistanceResult::Parallax(r) => vec![
            DisplayRow::new(
                "Parallax Angle (arcseconds)",
                format_fixed(r.parallax_angle_arcsec, 2),
            ),
            DisplayRow::new(
                "Calculated Distance (parsecs)",
                match r.distance_parsecs {
                    Distance::Finite(pc) => format_fixed(pc, 1),
                    Distance::Unbounded => UNBOUNDED_LABEL.to_string(),
                },
            ),
        ],
        DistanceResult::Cepheid(r) => vec![
            DisplayRow::new("Absolute Magnitude (M)", format_fixed(r.absolute_magnitude, 2)),
            DisplayRow::new("Distance (parsecs)", format_grouped(r.distance_parsecs, 0)),
            DisplayRow::new(
                "Distance (light years)",
                format_grouped(r.distance_light_years, 0),
            ),
        ],
        DistanceResult::Redshift(r) => vec![
            DisplayRow::new(
                "Recession Velocity",
                format!("{} km/s", format_grouped(r.recession_velocity_km_s, 0)),
            ),
            DisplayRow::new("Distance (Mpc)", format_grouped(r.distance_mpc, 2)),
            DisplayRow::new(
                "Distance (million light years)",
                format_grouped(r.distance_million_light_years, 0),
            ),
            DisplayRow::new(
                "Lookback Time (billion years)",
                format_grouped(r.lookback_time_gyr, 2),
            ),
        ],
    }
}

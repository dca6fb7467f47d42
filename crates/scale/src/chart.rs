//! Distance-scale comparison chart.

use serde::Serialize;

use crate::axis::LogAxis;
use crate::catalogue::{Category, ScaleEntry};
use crate::error::ScaleError;
use crate::format::format_distance_label;

/// Lower bound of the chart's distance axis (light years).
pub const CHART_DOMAIN_FLOOR: f64 = 1.0;

/// One bar of the chart: where it ends and how it is labelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartItem {
    pub label: String,
    pub category: Category,
    pub magnitude: f64,
    pub position: f64,
    pub value_label: String,
}

/// Catalogue plus the logarithmic axis derived from it.
///
/// The axis spans `[1, max magnitude]` onto `[0, extent]` and is rebuilt only
/// when the entries or the extent change. The farthest entry must lie beyond
/// 1 ly. Nearer entries sit at the floor.
#[derive(Debug, Clone)]
pub struct ScaleChart {
    entries: Vec<ScaleEntry>,
    extent: f64,
    axis: LogAxis,
}

impl ScaleChart {
    pub fn new(entries: Vec<ScaleEntry>, extent: f64) -> Result<Self, ScaleError> {
        let axis = build_axis(&entries, extent)?;
        Ok(Self {
            entries,
            extent,
            axis,
        })
    }

    pub fn entries(&self) -> &[ScaleEntry] {
        &self.entries
    }

    pub fn axis(&self) -> &LogAxis {
        &self.axis
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Swap in a new dataset. On error the previous dataset and axis stay in place.
    pub fn replace_entries(&mut self, entries: Vec<ScaleEntry>) -> Result<(), ScaleError> {
        self.axis = build_axis(&entries, self.extent)?;
        self.entries = entries;
        Ok(())
    }

    /// Change the target extent. On error the previous extent stays in place.
    pub fn resize(&mut self, extent: f64) -> Result<(), ScaleError> {
        self.axis = build_axis(&self.entries, extent)?;
        self.extent = extent;
        Ok(())
    }

    /// Bars in catalogue order.
    pub fn items(&self) -> Vec<ChartItem> {
        self.entries
            .iter()
            .map(|entry| ChartItem {
                label: entry.label.clone(),
                category: entry.category,
                magnitude: entry.magnitude,
                position: self.axis.position_or_floor(entry.magnitude),
                value_label: format_distance_label(entry.magnitude, "ly"),
            })
            .collect()
    }
}

fn build_axis(entries: &[ScaleEntry], extent: f64) -> Result<LogAxis, ScaleError> {
    let max = entries
        .iter()
        .map(|entry| entry.magnitude)
        .reduce(f64::max)
        .ok_or(ScaleError::EmptyCatalogue)?;
    if max <= CHART_DOMAIN_FLOOR {
        return Err(ScaleError::CatalogueBelowFloor {
            floor: CHART_DOMAIN_FLOOR,
            max,
        });
    }
    LogAxis::new((CHART_DOMAIN_FLOOR, max), (0.0, extent))
}

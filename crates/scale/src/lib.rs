//! Scale mapping for values spanning many orders of magnitude.
//!
//! Distances on the comparison chart run from a few light years to the edge
//! of the observable universe, so positions are computed on logarithmic axes
//! and labels use K/M/B suffixes. The crate also carries the reference
//! catalogues the charts are built from and the display strings for model
//! results.

pub mod axis;
pub mod catalogue;
pub mod chart;
pub mod display;
pub mod format;
pub mod hr;

mod error;

pub use axis::{LogAxis, map_to_axis_position};
pub use catalogue::{Category, ScaleEntry, StarClass};
pub use chart::{ChartItem, ScaleChart};
pub use display::{DisplayRow, display_rows};
pub use error::{CatalogueError, ScaleError};
pub use format::{format_distance_label, format_magnitude, format_tick};
pub use hr::{HrDiagram, HrPoint};

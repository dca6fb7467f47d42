//! Distance-scale models and logarithmic scale mapping for the cosmic distance course.
//!
//! The calculators, scale mapping, configuration, session state and export
//! helpers live in dedicated crates. This facade re-exports them so that a
//! front-end (the `distance` CLI, a web page) can depend on a single crate.

pub use cosmic_config as config;
pub use cosmic_core::{constants, units};
pub use cosmic_export as export;
pub use cosmic_models as models;
pub use cosmic_scale as scale;
pub use cosmic_session as session;

pub use cosmic_models::{
    Distance, DistanceResult, ModelKind, ObservationInput, ValidationError, compute,
};
pub use cosmic_scale::{format_magnitude, map_to_axis_position};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Distance models: parallax, Cepheid period-luminosity, and Hubble's law.
//!
//! Every model is a pure function of its validated input. Inputs are checked
//! before any arithmetic runs, so a model never sees a non-finite field, a
//! non-positive period, or a non-positive Hubble constant.

pub mod cepheid;
pub mod parallax;
pub mod redshift;

mod error;
mod input;
mod result;

pub use error::ValidationError;
pub use input::{CepheidInput, ModelKind, ObservationInput, ParallaxInput, RedshiftInput};
pub use result::{
    CepheidResult, Distance, DistanceResult, ParallaxResult, RedshiftResult, VelocityRegime,
};

/// Evaluate `input` with the model named by `kind`.
///
/// A kind that does not match the input variant is rejected as invalid input
/// rather than silently evaluated with the input's own model.
pub fn compute(kind: ModelKind, input: &ObservationInput) -> Result<DistanceResult, ValidationError> {
    if input.kind() != kind {
        return Err(ValidationError::ModelMismatch {
            kind,
            input: input.kind(),
        });
    }
    input.evaluate()
}

//! Interactive state owned by a single calculator widget.
//!
//! Each widget holds its latest input and latest result. Every input event
//! recomputes synchronously; there is no queue and nothing to cancel. When an
//! input is rejected the previous input and result stay in place so the
//! widget keeps showing the last valid answer.

use std::fmt;

use cosmic_config::WidgetDefaults;
use cosmic_models::{
    CepheidInput, DistanceResult, ModelKind, ObservationInput, ParallaxInput, RedshiftInput,
    ValidationError, compute,
};
use cosmic_scale::{DisplayRow, display_rows};
use serde::Serialize;
use thiserror::Error;

/// Upper end of the orbital-position slider on the parallax widget.
pub const PARALLAX_SLIDER_MAX: f64 = 100.0;

/// An input control on one of the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Orbital phase fraction in `[0, 1]`.
    OrbitalPhase,
    /// Orbital slider position in `0..=100`.
    SliderPosition,
    PeriodDays,
    ApparentMagnitude,
    Redshift,
    HubbleConstant,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::OrbitalPhase => "orbital phase",
            InputField::SliderPosition => "orbital slider position",
            InputField::PeriodDays => "pulsation period",
            InputField::ApparentMagnitude => "apparent magnitude",
            InputField::Redshift => "redshift",
            InputField::HubbleConstant => "Hubble constant",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("the {kind} widget has no {field} input")]
    UnrecognizedField { field: InputField, kind: ModelKind },
}

/// Serializable view of a widget after its latest recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSnapshot {
    pub kind: ModelKind,
    pub revision: u64,
    pub input: ObservationInput,
    pub result: DistanceResult,
    pub rows: Vec<DisplayRow>,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    defaults: ObservationInput,
    default_result: DistanceResult,
    input: ObservationInput,
    result: DistanceResult,
    revision: u64,
}

impl SessionState {
    /// Start a widget at `defaults`, which are validated and evaluated immediately.
    pub fn new(defaults: ObservationInput) -> Result<Self, ValidationError> {
        let result = defaults.evaluate()?;
        tracing::debug!(kind = %defaults.kind(), "widget initialised");
        Ok(Self {
            defaults,
            default_result: result,
            input: defaults,
            result,
            revision: 0,
        })
    }

    pub fn parallax(defaults: &WidgetDefaults) -> Result<Self, ValidationError> {
        Self::new(ParallaxInput::new(defaults.parallax.orbital_phase).into())
    }

    pub fn cepheid(defaults: &WidgetDefaults) -> Result<Self, ValidationError> {
        Self::new(
            CepheidInput {
                period_days: defaults.cepheid.period_days,
                apparent_magnitude: defaults.cepheid.apparent_magnitude,
            }
            .into(),
        )
    }

    pub fn redshift(defaults: &WidgetDefaults) -> Result<Self, ValidationError> {
        Self::new(
            RedshiftInput {
                redshift: defaults.redshift.redshift,
                hubble_constant_km_s_mpc: defaults.redshift.hubble_constant_km_s_mpc,
            }
            .into(),
        )
    }

    pub fn kind(&self) -> ModelKind {
        self.defaults.kind()
    }

    pub fn input(&self) -> &ObservationInput {
        &self.input
    }

    pub fn result(&self) -> &DistanceResult {
        &self.result
    }

    pub fn defaults(&self) -> &ObservationInput {
        &self.defaults
    }

    /// Number of recomputes since the widget was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole input and recompute.
    pub fn apply(&mut self, input: ObservationInput) -> Result<&DistanceResult, SessionError> {
        let kind = self.kind();
        let result = compute(kind, &input).inspect_err(|err| {
            tracing::warn!(%kind, error = %err, "input rejected, keeping last result");
        })?;
        self.commit(input, result);
        Ok(&self.result)
    }

    /// Change one field of the current input and recompute.
    pub fn set_field(
        &mut self,
        field: InputField,
        value: f64,
    ) -> Result<&DistanceResult, SessionError> {
        let input = with_field(self.input, field, value).ok_or(SessionError::UnrecognizedField {
            field,
            kind: self.kind(),
        })?;
        self.apply(input)
    }

    /// Restore the widget's defaults.
    pub fn reset(&mut self) -> &DistanceResult {
        self.commit(self.defaults, self.default_result);
        &self.result
    }

    pub fn snapshot(&self) -> ResultsSnapshot {
        ResultsSnapshot {
            kind: self.kind(),
            revision: self.revision,
            input: self.input,
            result: self.result,
            rows: display_rows(&self.result),
        }
    }

    fn commit(&mut self, input: ObservationInput, result: DistanceResult) {
        self.input = input;
        self.result = result;
        self.revision += 1;
        tracing::debug!(kind = %self.kind(), revision = self.revision, ?result, "recomputed");
    }
}

fn with_field(input: ObservationInput, field: InputField, value: f64) -> Option<ObservationInput> {
    use ObservationInput::{Cepheid, Parallax, Redshift};

    let updated = match (input, field) {
        (Parallax(_), InputField::OrbitalPhase) => Parallax(ParallaxInput::new(value)),
        (Parallax(_), InputField::SliderPosition) => {
            Parallax(ParallaxInput::from_slider(value, PARALLAX_SLIDER_MAX))
        }
        (Cepheid(c), InputField::PeriodDays) => Cepheid(CepheidInput {
            period_days: value,
            ..c
        }),
        (Cepheid(c), InputField::ApparentMagnitude) => Cepheid(CepheidInput {
            apparent_magnitude: value,
            ..c
        }),
        (Redshift(r), InputField::Redshift) => Redshift(RedshiftInput {
            redshift: value,
            ..r
        }),
        (Redshift(r), InputField::HubbleConstant) => Redshift(RedshiftInput {
            hubble_constant_km_s_mpc: value,
            ..r
        }),
        _ => return None,
    };
    Some(updated)
}

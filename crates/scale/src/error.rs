use thiserror::Error;

/// Errors raised by axis construction and logarithmic mapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("logarithmic axes need a positive, finite magnitude (got {0})")]
    InvalidMagnitude(f64),
    #[error("axis domain must be two distinct positive finite values (got {0}..{1})")]
    InvalidDomain(f64, f64),
    #[error("axis range must be finite (got {0}..{1})")]
    InvalidRange(f64, f64),
    #[error("chart catalogue is empty")]
    EmptyCatalogue,
    #[error("chart needs an entry beyond the {floor} ly axis floor (farthest is {max})")]
    CatalogueBelowFloor { floor: f64, max: f64 },
}

/// Errors raised while converting configured catalogue records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogueError {
    #[error("entry '{0}' has an unsupported category")]
    UnsupportedCategory(String),
    #[error("entry '{label}' needs a positive, finite value (got {value})")]
    NonPositiveMagnitude { label: String, value: f64 },
}

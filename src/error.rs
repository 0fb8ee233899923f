/// Problems with a configuration or catalog, detected before any state exists.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid time step: {0} (must be positive)")]
    InvalidTimeStep(f64),

    #[error("invalid frame rate: {0} (must be positive)")]
    InvalidFrameRate(u32),

    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("body {name} has invalid mass {mass} (must be positive)")]
    InvalidMass { name: String, mass: f64 },

    #[error("body {name} has invalid radius {radius} (must be positive)")]
    InvalidRadius { name: String, radius: f64 },

    #[error("body {name} has a non-finite position or velocity")]
    NonFiniteBody { name: String },

    #[error("invalid dominant mass: {0} (must be positive)")]
    InvalidDominantMass(f64),

    #[error("invalid asteroid belt radius: {0} (must be positive)")]
    InvalidBeltRadius(f64),

    #[error("invalid gravitational constant: {0} (must be positive)")]
    InvalidGravitationalConstant(f64),

    #[error("invalid minimum separation: {0} (must be positive)")]
    InvalidMinSeparation(f64),
}

/// A step that could not be completed. The simulation should not be stepped again.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StepError {
    #[error("body {index} has a non-finite acceleration at step {step}")]
    NonFiniteAcceleration { index: usize, step: u64 },

    #[error("body {index} has a non-finite position or velocity after step {step}")]
    NonFiniteState { index: usize, step: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown catalog {0:?} (expected \"solar-system\" or \"alpha-centauri\")")]
pub struct UnknownCatalog(pub String);

pub(crate) fn require_positive(value: f64, err: impl FnOnce(f64) -> ConfigError) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(err(value))
    }
}

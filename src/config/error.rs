use thiserror::Error;

use crate::controller::error::QuadrupedError;
use crate::hardware::error::HardwareError;
use crate::gait::error::GaitError;

/// All errors emitted while loading and building a configuration.
///
/// - `Json`: When the configuration is not valid JSON, or has fields of the wrong type
/// - `Hardware`, `Gait`, `Quadruped`: When the configured values do not describe a valid quadruped
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse the configuration: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Hardware(#[from] HardwareError),

    #[error(transparent)]
    Gait(#[from] GaitError),

    #[error(transparent)]
    Quadruped(#[from] QuadrupedError),
}

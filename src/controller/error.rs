use thiserror::Error;

use crate::gait::error::GaitError;
use crate::hardware::error::HardwareError;
use crate::trajectory::error::TrajectoryError;

/// All errors emitted while assembling legs into a quadruped.
///
/// - `WrongLegCount`: When a quadruped is not given exactly four legs
///     Parameters:
///     - `usize`: The number of legs given
/// - `DuplicateOffset`: When two legs share a phase offset
///     Parameters:
///     - `offset`: The shared offset
///     - `first`, `second`: The two leg indices
/// - `PathLengthMismatch`: When a leg's cycle path was built for a different gait cycle
///     Parameters:
///     - `leg`: The leg index
///     - `expected`: The gait's cycle length
///     - `found`: The length of the leg's path
/// - `Hardware`, `Trajectory`, `Gait`: Wrappers of the inner module errors
#[derive(Error, Debug)]
pub enum QuadrupedError {
    #[error("A quadruped needs exactly 4 legs, got {}", .0)]
    WrongLegCount(usize),

    #[error("Legs {first} and {second} share the phase offset {offset}")]
    DuplicateOffset { offset: u32, first: usize, second: usize },

    #[error("Leg {leg} has a path of {found} samples, but the gait cycle is {expected} ticks long")]
    PathLengthMismatch { leg: usize, expected: usize, found: usize },

    #[error(transparent)]
    Hardware(#[from] HardwareError),

    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    #[error(transparent)]
    Gait(#[from] GaitError),
}

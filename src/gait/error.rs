use thiserror::Error;

/// All errors emitted from the gait module.
///
/// - `TooFewSteps`: When a phase of the gait cycle has fewer than two steps
///     Parameters:
///     - `phase`: The phase that was rejected
///     - `steps`: The requested step count
/// - `LegOutOfRange`: When a leg index is not known to the scheduler
///     Parameters:
///     - `leg`: The requested leg index
///     - `leg_count`: The number of legs scheduled
/// - `NoLegs`: When a scheduler is created without any phase offsets
#[derive(Error, Debug)]
pub enum GaitError {
    #[error("The {phase} phase needs at least 2 steps, got {steps}")]
    TooFewSteps { phase: &'static str, steps: usize },

    #[error("Invalid leg index: {leg}, expected between 0 and {}", .leg_count)]
    LegOutOfRange { leg: usize, leg_count: usize },

    #[error("A gait scheduler needs at least one leg")]
    NoLegs,
}

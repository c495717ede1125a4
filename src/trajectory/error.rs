use thiserror::Error;

/// All errors emitted from the trajectory module.
///
/// - `TooFewSamples`: When a phase is asked to be sampled at fewer than two points
///     Parameters:
///     - `usize`: The requested number of samples
/// - `NonFiniteParameter`: When a stride parameter is NaN or infinite
///     Parameters:
///     - `name`: The offending parameter
///     - `value`: Its value
#[derive(Error, Debug)]
pub enum TrajectoryError {
    #[error("A trajectory phase needs at least 2 samples, got {}", .0)]
    TooFewSamples(usize),

    #[error("Stride parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

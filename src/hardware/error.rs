use thiserror::Error;

/// All errors emitted from the hardware module.
///
/// - `NonPositiveLink`: When a link length is zero, negative or not finite
///     Parameters:
///     - `name`: Which link was rejected
///     - `length`: The rejected length
#[derive(Error, Debug)]
pub enum HardwareError {
    #[error("Link `{name}` must have a positive, finite length, got {length}")]
    NonPositiveLink { name: &'static str, length: f64 },
}

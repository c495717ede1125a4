use thiserror::Error;

/// All errors emitted from the preview module.
///
/// - `Image`: When the preview image could not be encoded or written
///     Parameters:
///     - `ImageError`: The underlying image error
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Could not write the preview image: {}", .0)]
    Image(#[from] image::ImageError),
}

use std::path::Path;

use image::GrayImage;
use image::Luma;
use imageproc::drawing::draw_antialiased_line_segment_mut;
use imageproc::pixelops::interpolate;

use super::error::PreviewError;

///
/// A canvas image with appropriate handling methods, to draw leg geometry.
/// Coordinates passed in are world units with y growing upwards, as in the leg frame.
///
/// # Fields:
/// - `width`: The width of the canvas, in pixels
/// - `height`: The height of the canvas, in pixels
/// - `scale`: The number of pixels per world unit
///
pub struct PreviewCanvas {
    pub width: u32,
    pub height: u32,
    pub scale: u32,

    pub buffer: GrayImage,
}

impl PreviewCanvas {
    ///
    /// Creates a new instance of the image canvas, with a white image buffer.
    ///
    /// # Parameters:
    /// - `world_width`: The width of the drawable area, in world units
    /// - `world_height`: The height of the drawable area, in world units
    /// - `scale`: An optional scale to adjust the resolution by, defaults to 1
    ///
    /// # Returns:
    /// - A new `PreviewCanvas` instance
    ///
    pub fn new(world_width: u32, world_height: u32, scale: Option<u32>) -> PreviewCanvas {
        let scale = scale.unwrap_or(1).max(1);

        let width = world_width * scale;
        let height = world_height * scale;

        let buffer = GrayImage::new(width, height);
        let mut canvas = PreviewCanvas { width, height, scale, buffer };
        canvas.clear();
        canvas
    }

    ///
    /// Paints the whole canvas white.
    ///
    pub fn clear(&mut self) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = Luma([255]);
        }
    }

    ///
    /// Saves the canvas to a PNG file on the disk.
    ///
    /// # Parameters:
    /// - `path`: The path to save the image file to
    ///
    /// # Returns:
    /// - Void if the image was written
    /// - A `PreviewError` if encoding or writing failed
    ///
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PreviewError> {
        self.buffer.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    ///
    /// Draws an antialiased line between two points on the canvas. This function respects `scale`.
    ///
    /// # Parameters:
    /// - `x1` and `y1`: The x/y of the first point on the line
    /// - `x2` and `y2`: The x/y of the second point on the line
    ///
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let start = self.to_pixel(x1, y1);
        let end = self.to_pixel(x2, y2);

        draw_antialiased_line_segment_mut(&mut self.buffer, start, end, Luma([0]), interpolate);
    }

    ///
    /// Draws an `x` shaped marker centred on a point.
    ///
    /// # Parameters:
    /// - `x` and `y`: The centre of the marker
    /// - `half_size`: Half the width of the marker, in world units
    ///
    pub fn cross(&mut self, x: f64, y: f64, half_size: f64) {
        self.line(x - half_size, y - half_size, x + half_size, y + half_size);
        self.line(x - half_size, y + half_size, x + half_size, y - half_size);
    }

    ///
    /// # Returns:
    /// - The number of pixels that are not white
    ///
    pub fn inked_pixels(&self) -> usize {
        self.buffer.pixels().filter(|pixel| pixel.0[0] < 255).count()
    }

    ///
    /// Scales a world point, flipping y so larger values are drawn higher up.
    ///
    fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
        let world_height = (self.height / self.scale) as f64;
        scale_floor_coordinates(x, world_height - y, self.scale)
    }
}

///
/// Scales and floors an (f64, f64) pair of coordinates. This is to make the values ready to
/// reference pixels on the canvas.
///
/// # Parameters:
/// - `x`: The unscaled x value
/// - `y`: The unscaled y value
/// - `scale`: The scalar value of the coordinates
///
fn scale_floor_coordinates(x: f64, y: f64, scale: u32) -> (i32, i32) {
    ((x * scale as f64).floor() as i32, (y * scale as f64).floor() as i32)
}

//! Raster image decoding

use super::{PixelFormat, SourceRaster};
use crate::types::*;
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Decode a raster image file into an RGB8 buffer
pub fn decode_raster(path: impl AsRef<Path>) -> Result<SourceRaster> {
    let image = image::open(path.as_ref())?;
    from_dynamic_image(&image)
}

/// Pixel size of a raster image file, read from its header
pub fn raster_dimensions(path: impl AsRef<Path>) -> Result<SourceImage> {
    let (width, height) = image::image_dimensions(path.as_ref())?;
    if width == 0 || height == 0 {
        return Err(TileError::EmptyImage);
    }
    Ok(SourceImage::new(width, height))
}

/// Flatten any decoded image to RGB8, compositing alpha over white
pub(crate) fn from_dynamic_image(image: &DynamicImage) -> Result<SourceRaster> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(TileError::EmptyImage);
    }

    let format = PixelFormat::Rgb8;
    let stride = width as usize * format.bytes_per_pixel();

    let mut pixels = Vec::new();
    pixels.try_reserve_exact(stride * height as usize)?;

    // Convert pixel by pixel so the reserved buffer is the only full-size allocation
    if let Some(rgb) = image.as_rgb8() {
        pixels.extend_from_slice(rgb.as_raw());
    } else {
        for (_, _, pixel) in image.pixels() {
            let alpha = pixel[3] as f32 / 255.0;
            for channel in &pixel.0[..3] {
                pixels.push((*channel as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8);
            }
        }
    }

    Ok(SourceRaster {
        pixels,
        width,
        height,
        stride,
        format,
    })
}

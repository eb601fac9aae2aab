//! XObject creation for tiling
//!
//! This module handles creating Image XObjects from decoded sources, which
//! are then placed onto output pages with transformations.

use crate::source::{PixelFormat, SourceRaster};
use crate::types::*;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an Image XObject from a decoded source.
///
/// The pixels are Flate-compressed once; the XObject can then be placed
/// any number of times on any page.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `raster` - The decoded source
pub fn create_image_xobject(output: &mut Document, raster: &SourceRaster) -> Result<ObjectId> {
    let data = compress(&packed_rows(raster))?;

    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(raster.width as i64));
    image_dict.set("Height", Object::Integer(raster.height as i64));
    image_dict.set("ColorSpace", Object::Name(color_space(raster.format).to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    image_dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

    // Already compressed; keep lopdf from compressing again
    let stream = Stream::new(image_dict, data).with_compression(false);
    Ok(output.add_object(stream))
}

/// PDF color space name for a pixel format
fn color_space(format: PixelFormat) -> &'static [u8] {
    match format {
        PixelFormat::Rgb8 => b"DeviceRGB",
    }
}

// =============================================================================
// Sample Data
// =============================================================================

/// Pixel rows without any stride padding
fn packed_rows(raster: &SourceRaster) -> std::borrow::Cow<'_, [u8]> {
    let row_len = raster.width as usize * raster.format.bytes_per_pixel();
    if raster.stride == row_len {
        return std::borrow::Cow::Borrowed(&raster.pixels);
    }

    let packed = raster
        .pixels
        .chunks(raster.stride)
        .take(raster.height as usize)
        .flat_map(|row| &row[..row_len])
        .copied()
        .collect();
    std::borrow::Cow::Owned(packed)
}

/// Zlib-compress sample data for a FlateDecode stream
fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

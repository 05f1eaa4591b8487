//! Profile photo cropping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user picks a rectangle on a scaled-down preview of the photo. The
//! server receives a JPEG of that rectangle taken from the full-resolution
//! source, so the preview coordinates are scaled by `natural / displayed` on
//! each axis before cropping.
//!
//! DESIGN
//! ======
//! The region is clamped to the image bounds and emitted at native
//! resolution (no resampling). Output is always JPEG at quality 92 with RGB
//! pixels, which also drops any alpha channel from PNG or WebP sources.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader};

#[cfg(test)]
#[path = "crop_test.rs"]
mod crop_test;

/// File name sent with the multipart upload.
pub const UPLOAD_FILE_NAME: &str = "profile.jpg";
/// MIME type of the encoded crop.
pub const UPLOAD_MIME: &str = "image/jpeg";
/// JPEG quality used for uploads.
pub const JPEG_QUALITY: u8 = 92;

#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("displayed image size must be non-zero")]
    ZeroDisplaySize,
    #[error("crop region is empty")]
    EmptyRegion,
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode JPEG: {0}")]
    Encode(#[source] image::ImageError),
}

/// Rectangle in displayed (preview) pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Size at which the preview was rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

/// Rectangle in source-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Encoded crop ready for upload.
#[derive(Clone, Debug)]
pub struct CroppedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Map a preview rectangle onto the natural image, clamped to its bounds.
///
/// # Errors
///
/// [`CropError::ZeroDisplaySize`] when the preview has no area, and
/// [`CropError::EmptyRegion`] when nothing of the image remains after clamping.
pub fn source_region(
    crop: CropRect,
    displayed: DisplaySize,
    natural_width: u32,
    natural_height: u32,
) -> Result<PixelRegion, CropError> {
    if !(displayed.width > 0.0 && displayed.height > 0.0) {
        return Err(CropError::ZeroDisplaySize);
    }

    let scale_x = f64::from(natural_width) / displayed.width;
    let scale_y = f64::from(natural_height) / displayed.height;

    let x = to_pixels(crop.x * scale_x, natural_width);
    let y = to_pixels(crop.y * scale_y, natural_height);
    let width = to_pixels(crop.width * scale_x, natural_width - x);
    let height = to_pixels(crop.height * scale_y, natural_height - y);

    if width == 0 || height == 0 {
        return Err(CropError::EmptyRegion);
    }
    Ok(PixelRegion { x, y, width, height })
}

/// Pixel size of an encoded image, read from its header.
///
/// # Errors
///
/// Fails when the format is not recognized or the header is unreadable.
pub fn dimensions(source: &[u8]) -> Result<(u32, u32), CropError> {
    ImageReader::new(Cursor::new(source))
        .with_guessed_format()
        .map_err(|e| CropError::Decode(image::ImageError::IoError(e)))?
        .into_dimensions()
        .map_err(CropError::Decode)
}

/// Decode `source`, cut out the selected region and re-encode it as JPEG.
///
/// # Errors
///
/// Fails when the source bytes are not a supported image, when the region is
/// empty, or when encoding fails.
pub fn crop_to_jpeg(source: &[u8], crop: CropRect, displayed: DisplaySize) -> Result<CroppedImage, CropError> {
    let image = image::load_from_memory(source).map_err(CropError::Decode)?;
    let region = source_region(crop, displayed, image.width(), image.height())?;
    tracing::debug!(
        natural_width = image.width(),
        natural_height = image.height(),
        ?region,
        "cropping image"
    );

    let rgb = image
        .crop_imm(region.x, region.y, region.width, region.height)
        .to_rgb8();

    let mut bytes = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(CropError::Encode)?;

    Ok(CroppedImage { bytes: bytes.into_inner(), width: rgb.width(), height: rgb.height() })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f64, max: u32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= f64::from(max) { max } else { rounded as u32 }
}

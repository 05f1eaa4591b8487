use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use super::*;

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if x < width / 2 && y < height / 2 { Rgba([200, 30, 30, 255]) } else { Rgba([20, 160, 40, 128]) }
    });
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn rect(x: f64, y: f64, width: f64, height: f64) -> CropRect {
    CropRect { x, y, width, height }
}

const PREVIEW: DisplaySize = DisplaySize { width: 200.0, height: 200.0 };

#[test]
fn region_scales_preview_to_natural_size() {
    let region = source_region(rect(10.0, 10.0, 50.0, 50.0), PREVIEW, 400, 400).expect("region");
    assert_eq!(region, PixelRegion { x: 20, y: 20, width: 100, height: 100 });
}

#[test]
fn region_scales_axes_independently() {
    let displayed = DisplaySize { width: 100.0, height: 50.0 };
    let region = source_region(rect(10.0, 10.0, 20.0, 20.0), displayed, 300, 200).expect("region");
    assert_eq!(region, PixelRegion { x: 30, y: 40, width: 60, height: 80 });
}

#[test]
fn region_is_clamped_to_image_bounds() {
    let region = source_region(rect(-5.0, 150.0, 100.0, 100.0), PREVIEW, 400, 400).expect("region");
    assert_eq!(region, PixelRegion { x: 0, y: 300, width: 200, height: 100 });
}

#[test]
fn empty_crop_is_rejected() {
    let err = source_region(rect(10.0, 10.0, 0.0, 50.0), PREVIEW, 400, 400).expect_err("empty");
    assert!(matches!(err, CropError::EmptyRegion));

    let err = source_region(rect(250.0, 10.0, 50.0, 50.0), PREVIEW, 400, 400).expect_err("outside");
    assert!(matches!(err, CropError::EmptyRegion));
}

#[test]
fn zero_display_size_is_rejected() {
    let displayed = DisplaySize { width: 0.0, height: 200.0 };
    let err = source_region(rect(0.0, 0.0, 10.0, 10.0), displayed, 400, 400).expect_err("zero");
    assert!(matches!(err, CropError::ZeroDisplaySize));
}

#[test]
fn crop_encodes_jpeg_of_scaled_region() {
    let source = png(400, 400);
    let cropped = crop_to_jpeg(&source, rect(10.0, 10.0, 50.0, 50.0), PREVIEW).expect("crop");
    assert_eq!((cropped.width, cropped.height), (100, 100));
    assert_eq!(&cropped.bytes[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory(&cropped.bytes).expect("decode jpeg");
    assert_eq!((decoded.width(), decoded.height()), (100, 100));
}

#[test]
fn dimensions_read_from_header() {
    assert_eq!(dimensions(&png(320, 240)).expect("dimensions"), (320, 240));
    assert!(matches!(dimensions(b"plain text"), Err(CropError::Decode(_))));
}

#[test]
fn crop_rejects_undecodable_bytes() {
    let err = crop_to_jpeg(b"not an image", rect(0.0, 0.0, 10.0, 10.0), PREVIEW).expect_err("garbage");
    assert!(matches!(err, CropError::Decode(_)));
}

#[test]
fn upload_metadata_is_jpeg() {
    assert_eq!(UPLOAD_FILE_NAME, "profile.jpg");
    assert_eq!(UPLOAD_MIME, "image/jpeg");
}

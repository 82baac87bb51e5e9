use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;
use crate::frame::RgbaFrame;

/// Load any supported image file as 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

/// Borrow an `RgbaImage` as a detector frame.
pub fn as_frame(img: &RgbaImage) -> Result<RgbaFrame<'_>> {
    let (w, h) = img.dimensions();
    RgbaFrame::new(img.as_raw(), w, h)
}

/// Copy a frame into an owned `RgbaImage`.
pub fn to_image(frame: &RgbaFrame<'_>) -> RgbaImage {
    let (w, h) = (frame.width() as u32, frame.height() as u32);
    let mut img = RgbaImage::new(w, h);
    img.copy_from_slice(frame.data());
    img
}

/// Save an RGBA image as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

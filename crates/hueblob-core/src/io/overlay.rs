use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use crate::consts::{MIN_OVERLAY_RADIUS, OVERLAY_STROKE};
use crate::detection::blob::Blob;

/// Default marker color (opaque cyan).
pub const MARKER_COLOR: Rgba<u8> = Rgba([0, 255, 255, 255]);

/// Radius of the centroid dot.
const CENTER_DOT_RADIUS: i32 = 1;

/// Radius of the circle drawn around a blob: half its larger side, but never
/// below `MIN_OVERLAY_RADIUS`.
pub fn marker_radius(blob: &Blob) -> f32 {
    (blob.width.max(blob.height) / 2.0).max(MIN_OVERLAY_RADIUS as f32)
}

/// Draw a ring `OVERLAY_STROKE` pixels thick around every blob and a dot on
/// its centroid. Parts outside the image are clipped.
pub fn draw_blobs(img: &mut RgbaImage, blobs: &[Blob], color: Rgba<u8>) {
    for blob in blobs {
        let center = (blob.x.round() as i32, blob.y.round() as i32);
        let outer = marker_radius(blob).round() as i32;
        let inner = (outer - OVERLAY_STROKE as i32 + 1).max(0);

        for radius in inner..=outer {
            draw_hollow_circle_mut(img, center, radius, color);
        }
        draw_filled_circle_mut(img, center, CENTER_DOT_RADIUS, color);
    }
}

use serde::{Deserialize, Serialize};

use crate::consts::BLOB_TUPLE_LEN;

use super::config::AreaMode;
use super::contour::Contour;

/// One detected region of the target color.
///
/// Coordinates are pixel indices of the full-resolution frame: the pixel at
/// column 0 has x = 0.0, so a 4-pixel-wide region starting at column 0 has
/// its centroid at x = 1.5.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    /// Area-weighted centroid X (column) position.
    pub x: f32,
    /// Area-weighted centroid Y (row) position.
    pub y: f32,
    /// Bounding box width in pixels.
    pub width: f32,
    /// Bounding box height in pixels.
    pub height: f32,
    /// Area as measured by the configured `AreaMethod`.
    pub area: f32,
}

impl Blob {
    /// Flat encoding: `[x, y, width, height, area]`.
    pub fn to_array(&self) -> [f32; BLOB_TUPLE_LEN] {
        [self.x, self.y, self.width, self.height, self.area]
    }

    /// Whether the centroid lies within `radius` of (`x`, `y`), inclusive.
    pub fn is_near(&self, x: f32, y: f32, radius: f32) -> bool {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy <= radius * radius
    }

    /// Map a blob measured on a reduced image back to full resolution.
    ///
    /// `scale_x` and `scale_y` are the full-to-reduced size ratios per axis.
    /// They need not be integers: pyramid levels round odd sizes up, so a
    /// 5-pixel row reduces to 3 pixels and each covers 5/3 of a source pixel.
    pub fn upscaled(&self, scale_x: f32, scale_y: f32) -> Self {
        Self {
            x: (self.x + 0.5) * scale_x - 0.5,
            y: (self.y + 0.5) * scale_y - 0.5,
            width: self.width * scale_x,
            height: self.height * scale_y,
            area: self.area * scale_x * scale_y,
        }
    }
}

impl From<&Contour> for Blob {
    fn from(contour: &Contour) -> Self {
        let (cx, cy) = contour.moments.centroid();
        let (min_x, min_y, max_x, max_y) = contour.bounding_box();
        Self {
            x: cx as f32,
            y: cy as f32,
            width: (max_x - min_x + 1) as f32,
            height: (max_y - min_y + 1) as f32,
            area: contour.area as f32,
        }
    }
}

/// Keep the contours whose area reaches the threshold and turn them into blobs.
///
/// The comparison is inclusive. In `RelativeToLargest` mode the threshold is
/// `min_area` times the largest area among `contours`. Input order is kept.
pub fn filter_contours(contours: &[Contour], min_area: f32, mode: AreaMode) -> Vec<Blob> {
    let threshold = match mode {
        AreaMode::Absolute => min_area as f64,
        AreaMode::RelativeToLargest => {
            let largest = contours.iter().map(|c| c.area).fold(0.0f64, f64::max);
            min_area as f64 * largest
        }
    };

    contours
        .iter()
        .filter(|c| c.area >= threshold)
        .map(Blob::from)
        .collect()
}

/// Encode blobs as a flat sequence of `BLOB_TUPLE_LEN`-float tuples.
pub fn encode_blobs(blobs: &[Blob]) -> Vec<f32> {
    blobs.iter().flat_map(|b| b.to_array()).collect()
}

/// The first blob (in discovery order) whose centroid is within `radius` of
/// (`x`, `y`).
pub fn find_blob_near(blobs: &[Blob], x: f32, y: f32, radius: f32) -> Option<Blob> {
    blobs.iter().find(|b| b.is_near(x, y, radius)).copied()
}

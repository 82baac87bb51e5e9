//! RGB to HSV conversion.
//!
//! Uses the standard hexcone model on normalized channels: value is the
//! largest channel, saturation the spread relative to it, and hue the angle
//! of the dominant channel in degrees, always in [0, 360).

use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{HUE_RANGE, PARALLEL_PIXEL_THRESHOLD};
use crate::frame::{HsvColor, HsvImage, RgbaFrame};

/// Convert one 8-bit RGB triple to HSV.
///
/// Achromatic pixels (all channels equal) get hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> HsvColor {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    if hue < 0.0 {
        hue += HUE_RANGE;
    }
    if hue >= HUE_RANGE {
        hue -= HUE_RANGE;
    }

    HsvColor {
        hue,
        saturation,
        value: max,
    }
}

/// Convert an RGBA frame to an HSV image of the same size. Alpha is ignored.
pub fn rgba_to_hsv(frame: &RgbaFrame<'_>) -> HsvImage {
    let (h, w) = (frame.height(), frame.width());

    if frame.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        rgba_to_hsv_parallel(frame, h, w)
    } else {
        rgba_to_hsv_sequential(frame, h, w)
    }
}

fn rgba_to_hsv_sequential(frame: &RgbaFrame<'_>, h: usize, w: usize) -> HsvImage {
    let mut hue = Array2::<f32>::zeros((h, w));
    let mut saturation = Array2::<f32>::zeros((h, w));
    let mut value = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for (col, px) in frame.row(row).chunks_exact(4).enumerate() {
            let hsv = rgb_to_hsv(px[0], px[1], px[2]);
            hue[[row, col]] = hsv.hue;
            saturation[[row, col]] = hsv.saturation;
            value[[row, col]] = hsv.value;
        }
    }

    HsvImage {
        hue,
        saturation,
        value,
    }
}

/// Row-parallel conversion using Rayon.
fn rgba_to_hsv_parallel(frame: &RgbaFrame<'_>, h: usize, w: usize) -> HsvImage {
    let rows: Vec<Vec<HsvColor>> = (0..h)
        .into_par_iter()
        .map(|row| {
            frame
                .row(row)
                .chunks_exact(4)
                .map(|px| rgb_to_hsv(px[0], px[1], px[2]))
                .collect()
        })
        .collect();

    let mut hue = Array2::<f32>::zeros((h, w));
    let mut saturation = Array2::<f32>::zeros((h, w));
    let mut value = Array2::<f32>::zeros((h, w));

    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, hsv) in row_data.into_iter().enumerate() {
            hue[[row, col]] = hsv.hue;
            saturation[[row, col]] = hsv.saturation;
            value[[row, col]] = hsv.value;
        }
    }

    HsvImage {
        hue,
        saturation,
        value,
    }
}

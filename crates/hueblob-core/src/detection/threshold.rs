use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{HUE_RANGE, PARALLEL_PIXEL_THRESHOLD};
use crate::frame::{HsvColor, HsvImage};

use super::config::HsvTolerance;

/// Shortest distance between two hues on the color circle, in degrees.
///
/// Inputs outside [0, 360) are accepted and wrap naturally.
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % HUE_RANGE;
    d.min(HUE_RANGE - d)
}

/// Whether a single color lies inside the tolerance band around `target`.
pub fn within_tolerance(color: &HsvColor, target: &HsvColor, tolerance: &HsvTolerance) -> bool {
    hue_distance(color.hue, target.hue) <= tolerance.hue
        && (color.saturation - target.saturation).abs() <= tolerance.saturation
        && (color.value - target.value).abs() <= tolerance.value
}

/// Build a binary mask of the pixels within `tolerance` of `target`.
pub fn threshold_mask(hsv: &HsvImage, target: &HsvColor, tolerance: &HsvTolerance) -> Array2<bool> {
    let (h, w) = (hsv.height(), hsv.width());

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<bool>> = (0..h)
            .into_par_iter()
            .map(|row| {
                (0..w)
                    .map(|col| within_tolerance(&hsv.get(row, col), target, tolerance))
                    .collect()
            })
            .collect();

        let mut mask = Array2::from_elem((h, w), false);
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, hit) in row_data.into_iter().enumerate() {
                mask[[row, col]] = hit;
            }
        }
        mask
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| {
            within_tolerance(&hsv.get(row, col), target, tolerance)
        })
    }
}

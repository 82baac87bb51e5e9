use ndarray::Array2;

use crate::color::hsv::rgba_to_hsv;
use crate::filters::pyramid::pyr_down_levels;
use crate::frame::RgbaFrame;

use super::blob::{filter_contours, Blob};
use super::config::{AreaMode, DetectorConfig};
use super::contour::extract_contours;
use super::morphology::dilate;
use super::threshold::threshold_mask;

/// Detect all blobs of the target color in one frame.
///
/// Pipeline: pyramid reduction -> RGBA to HSV -> threshold mask -> dilation
/// -> contour extraction -> area filter -> map back to full resolution.
///
/// Pure: the same frame and config always give the same blobs.
pub fn detect_blobs(frame: &RgbaFrame<'_>, config: &DetectorConfig) -> Vec<Blob> {
    // Step 1: Optional pyramid reduction.
    let reduced = pyr_down_levels(frame, config.downsample_levels);
    let working = reduced.as_ref().map_or(*frame, |buf| buf.as_frame());

    // Step 2: Threshold mask (with optional dilation).
    let mask = build_mask(&working, config);

    // Step 3: Contours of the connected foreground regions.
    let contours = extract_contours(&mask, config.approximation, config.area_method);

    // Step 4: Area filter. The threshold is in full-resolution pixels, so it is
    // brought down to the working scale first.
    let scale_x = frame.width() as f32 / working.width() as f32;
    let scale_y = frame.height() as f32 / working.height() as f32;
    let min_area = match config.area_mode {
        AreaMode::Absolute => config.min_area / (scale_x * scale_y),
        AreaMode::RelativeToLargest => config.min_area,
    };
    let blobs = filter_contours(&contours, min_area, config.area_mode);

    // Step 5: Back to full-resolution coordinates.
    if reduced.is_none() {
        return blobs;
    }
    blobs
        .into_iter()
        .map(|b| b.upscaled(scale_x, scale_y))
        .collect()
}

/// Threshold `frame` around the configured target and dilate the result.
pub fn build_mask(frame: &RgbaFrame<'_>, config: &DetectorConfig) -> Array2<bool> {
    let hsv = rgba_to_hsv(frame);
    let mask = threshold_mask(&hsv, &config.target, &config.tolerance);
    if config.dilate_radius > 0 {
        dilate(&mask, config.dilate_radius as usize)
    } else {
        mask
    }
}

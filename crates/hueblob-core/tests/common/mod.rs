#![allow(dead_code)]

use hueblob_core::detection::{DetectorConfig, FrameProcessor, HsvTolerance};
use hueblob_core::frame::HsvColor;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Build a `width` x `height` RGBA buffer filled with `color`.
pub fn solid_frame(width: usize, height: usize, color: [u8; 4]) -> Vec<u8> {
    color.repeat(width * height)
}

/// Paint the inclusive rectangle [x0, x1] x [y0, y1] with `color`.
pub fn paint_rect(
    data: &mut [u8],
    width: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
    color: [u8; 4],
) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            let i = (y * width + x) * 4;
            data[i..i + 4].copy_from_slice(&color);
        }
    }
}

/// Set a single pixel.
pub fn paint_pixel(data: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 4]) {
    paint_rect(data, width, (x, y), (x, y), color);
}

/// Config targeting pure red with tight tolerances.
pub fn red_config(min_area: f32) -> DetectorConfig {
    DetectorConfig {
        target: HsvColor::new(0.0, 1.0, 1.0),
        tolerance: HsvTolerance::new(10.0, 0.1, 0.1),
        min_area,
        ..DetectorConfig::default()
    }
}

/// An enabled processor with the given config.
pub fn enabled_processor(config: DetectorConfig) -> FrameProcessor {
    let processor = FrameProcessor::new(config).expect("valid config");
    processor.enable();
    processor
}

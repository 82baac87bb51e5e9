//! Gaussian pyramid reduction for RGBA frames.
//!
//! Each level blurs with the separable B3 spline kernel and keeps every other
//! pixel, halving both dimensions (rounding up). Edges are clamped.

use rayon::prelude::*;

use crate::consts::{B3_KERNEL, PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNELS};
use crate::frame::{RgbaBuffer, RgbaFrame};

/// Reduce a frame by one pyramid level.
pub fn pyr_down(frame: &RgbaFrame<'_>) -> RgbaBuffer {
    let (h, w) = (frame.height(), frame.width());
    let new_h = h.div_ceil(2);
    let new_w = w.div_ceil(2);

    let data = if frame.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        (0..new_h)
            .into_par_iter()
            .flat_map_iter(|row| reduce_row(frame, row, new_w))
            .collect()
    } else {
        (0..new_h)
            .flat_map(|row| reduce_row(frame, row, new_w))
            .collect()
    };

    RgbaBuffer {
        data,
        width: new_w,
        height: new_h,
    }
}

/// Reduce a frame by `levels` pyramid levels. Returns `None` for zero levels.
pub fn pyr_down_levels(frame: &RgbaFrame<'_>, levels: u32) -> Option<RgbaBuffer> {
    let mut current: Option<RgbaBuffer> = None;
    for _ in 0..levels {
        let next = match &current {
            Some(buf) => pyr_down(&buf.as_frame()),
            None => pyr_down(frame),
        };
        current = Some(next);
    }
    current
}

/// Compute one output row of the reduced image.
fn reduce_row(frame: &RgbaFrame<'_>, out_row: usize, new_w: usize) -> Vec<u8> {
    let (h, w) = (frame.height(), frame.width());
    let radius = B3_KERNEL.len() as isize / 2;
    let mut out = Vec::with_capacity(new_w * RGBA_CHANNELS);

    for out_col in 0..new_w {
        let mut acc = [0.0f32; RGBA_CHANNELS];
        for (ky, &wy) in B3_KERNEL.iter().enumerate() {
            let src_row =
                (2 * out_row as isize + ky as isize - radius).clamp(0, h as isize - 1) as usize;
            for (kx, &wx) in B3_KERNEL.iter().enumerate() {
                let src_col = (2 * out_col as isize + kx as isize - radius)
                    .clamp(0, w as isize - 1) as usize;
                let px = frame.pixel(src_row, src_col);
                let weight = wy * wx;
                for (a, &v) in acc.iter_mut().zip(px.iter()) {
                    *a += v as f32 * weight;
                }
            }
        }
        out.extend(acc.iter().map(|&v| (v + 0.5).clamp(0.0, 255.0) as u8));
    }

    out
}

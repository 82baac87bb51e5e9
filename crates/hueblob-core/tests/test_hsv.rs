mod common;

use approx::assert_abs_diff_eq;

use hueblob_core::color::{rgb_to_hsv, rgba_to_hsv};
use hueblob_core::frame::RgbaFrame;

use common::{paint_pixel, solid_frame, BLUE, GREEN, RED};

// ---------------------------------------------------------------------------
// rgb_to_hsv
// ---------------------------------------------------------------------------

#[test]
fn test_primary_colors() {
    let red = rgb_to_hsv(255, 0, 0);
    assert_abs_diff_eq!(red.hue, 0.0);
    assert_abs_diff_eq!(red.saturation, 1.0);
    assert_abs_diff_eq!(red.value, 1.0);

    let green = rgb_to_hsv(0, 255, 0);
    assert_abs_diff_eq!(green.hue, 120.0, epsilon = 1e-4);

    let blue = rgb_to_hsv(0, 0, 255);
    assert_abs_diff_eq!(blue.hue, 240.0, epsilon = 1e-4);
}

#[test]
fn test_secondary_colors() {
    assert_abs_diff_eq!(rgb_to_hsv(255, 255, 0).hue, 60.0, epsilon = 1e-4);
    assert_abs_diff_eq!(rgb_to_hsv(0, 255, 255).hue, 180.0, epsilon = 1e-4);
    assert_abs_diff_eq!(rgb_to_hsv(255, 0, 255).hue, 300.0, epsilon = 1e-4);
}

#[test]
fn test_achromatic_has_zero_hue_and_saturation() {
    for level in [0u8, 1, 128, 255] {
        let hsv = rgb_to_hsv(level, level, level);
        assert_eq!(hsv.hue, 0.0);
        assert_eq!(hsv.saturation, 0.0);
        assert_abs_diff_eq!(hsv.value, level as f32 / 255.0);
    }
}

#[test]
fn test_hue_just_below_wrap() {
    // Red with a little blue sits just under 360.
    let hsv = rgb_to_hsv(255, 0, 21);
    assert!(hsv.hue > 350.0 && hsv.hue < 360.0, "got {}", hsv.hue);
}

#[test]
fn test_hue_always_in_range() {
    for r in (0..=255).step_by(17) {
        for g in (0..=255).step_by(17) {
            for b in (0..=255).step_by(17) {
                let hsv = rgb_to_hsv(r as u8, g as u8, b as u8);
                assert!((0.0..360.0).contains(&hsv.hue), "rgb({r},{g},{b}) -> {}", hsv.hue);
                assert!((0.0..=1.0).contains(&hsv.saturation));
                assert!((0.0..=1.0).contains(&hsv.value));
            }
        }
    }
}

#[test]
fn test_half_saturation() {
    let hsv = rgb_to_hsv(200, 100, 100);
    assert_abs_diff_eq!(hsv.hue, 0.0);
    assert_abs_diff_eq!(hsv.saturation, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(hsv.value, 200.0 / 255.0, epsilon = 1e-6);
}

// ---------------------------------------------------------------------------
// rgba_to_hsv
// ---------------------------------------------------------------------------

#[test]
fn test_image_conversion_preserves_layout() {
    let (w, h) = (3, 2);
    let mut data = solid_frame(w, h, RED);
    paint_pixel(&mut data, w, 2, 0, GREEN);
    paint_pixel(&mut data, w, 0, 1, BLUE);

    let frame = RgbaFrame::new(&data, w as u32, h as u32).unwrap();
    let hsv = rgba_to_hsv(&frame);

    assert_eq!(hsv.width(), 3);
    assert_eq!(hsv.height(), 2);
    assert_abs_diff_eq!(hsv.get(0, 0).hue, 0.0);
    assert_abs_diff_eq!(hsv.get(0, 2).hue, 120.0, epsilon = 1e-4);
    assert_abs_diff_eq!(hsv.get(1, 0).hue, 240.0, epsilon = 1e-4);
}

#[test]
fn test_alpha_is_ignored() {
    let opaque = [10u8, 200, 30, 255];
    let clear = [10u8, 200, 30, 0];
    let data: Vec<u8> = [opaque, clear].concat();
    let frame = RgbaFrame::new(&data, 2, 1).unwrap();
    let hsv = rgba_to_hsv(&frame);
    assert_eq!(hsv.get(0, 0), hsv.get(0, 1));
}

#[test]
fn test_parallel_path_matches_per_pixel() {
    // 300x300 crosses the row-parallel threshold.
    let (w, h) = (300usize, 300usize);
    let mut data = vec![0u8; w * h * 4];
    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        px[0] = (i % 251) as u8;
        px[1] = (i % 241) as u8;
        px[2] = (i % 239) as u8;
        px[3] = 255;
    }
    let frame = RgbaFrame::new(&data, w as u32, h as u32).unwrap();
    let hsv = rgba_to_hsv(&frame);

    for &(row, col) in &[(0, 0), (17, 123), (150, 150), (299, 299)] {
        let [r, g, b, _] = frame.pixel(row, col);
        assert_eq!(hsv.get(row, col), rgb_to_hsv(r, g, b));
    }
}

#[test]
fn test_frame_view_trims_trailing_bytes() {
    let mut data = solid_frame(5, 3, RED);
    data.extend_from_slice(&[7u8; 9]);
    let frame = RgbaFrame::new(&data, 5, 3).unwrap();
    assert_eq!(frame.pixel_count(), 15);
    assert_eq!(frame.data().len(), 15 * 4);

    let hsv = rgba_to_hsv(&frame);
    assert_eq!((hsv.width(), hsv.height()), (5, 3));
}

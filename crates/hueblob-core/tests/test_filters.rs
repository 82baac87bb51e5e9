mod common;

use hueblob_core::filters::pyramid::{pyr_down, pyr_down_levels};
use hueblob_core::frame::RgbaFrame;

use common::{paint_rect, solid_frame, BLACK, GREEN, RED};

// ---------------------------------------------------------------------------
// Pyramid reduction
// ---------------------------------------------------------------------------

#[test]
fn test_pyr_down_halves_rounding_up() {
    for &(w, h, ew, eh) in &[(8usize, 8usize, 4usize, 4usize), (7, 5, 4, 3), (1, 1, 1, 1)] {
        let data = solid_frame(w, h, RED);
        let frame = RgbaFrame::new(&data, w as u32, h as u32).unwrap();
        let reduced = pyr_down(&frame);
        assert_eq!((reduced.width, reduced.height), (ew, eh), "{w}x{h}");
        assert_eq!(reduced.data.len(), ew * eh * 4);
    }
}

#[test]
fn test_pyr_down_uniform_stays_uniform() {
    let data = solid_frame(10, 6, GREEN);
    let frame = RgbaFrame::new(&data, 10, 6).unwrap();
    let reduced = pyr_down(&frame);
    for px in reduced.data.chunks_exact(4) {
        assert_eq!(px, &GREEN);
    }
}

#[test]
fn test_pyr_down_blurs_edges() {
    let (w, h) = (16, 16);
    let mut data = solid_frame(w, h, BLACK);
    paint_rect(&mut data, w, (8, 0), (15, 15), RED);
    let frame = RgbaFrame::new(&data, w as u32, h as u32).unwrap();
    let reduced = pyr_down(&frame);
    let red_at = |col: usize| reduced.as_frame().pixel(4, col)[0];

    assert_eq!(red_at(0), 0);
    assert_eq!(red_at(7), 255);
    // Column 4 samples source columns 6..=10 across the edge at 8.
    let edge = red_at(4);
    assert!(edge > 0 && edge < 255, "got {edge}");
}

#[test]
fn test_pyr_down_large_frame_matches_small_path() {
    // 256x256 crosses the parallel threshold.
    let (w, h) = (256, 256);
    let mut data = solid_frame(w, h, BLACK);
    paint_rect(&mut data, w, (100, 50), (180, 120), RED);
    let frame = RgbaFrame::new(&data, w as u32, h as u32).unwrap();
    let reduced = pyr_down(&frame);

    assert_eq!((reduced.width, reduced.height), (128, 128));
    assert_eq!(reduced.as_frame().pixel(40, 70), RED);
    assert_eq!(reduced.as_frame().pixel(0, 0), BLACK);
}

#[test]
fn test_pyr_down_levels() {
    let data = solid_frame(40, 24, RED);
    let frame = RgbaFrame::new(&data, 40, 24).unwrap();

    assert!(pyr_down_levels(&frame, 0).is_none());

    let reduced = pyr_down_levels(&frame, 3).unwrap();
    assert_eq!((reduced.width, reduced.height), (5, 3));
}

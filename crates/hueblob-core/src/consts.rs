/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Bytes per pixel in an RGBA frame.
pub const RGBA_CHANNELS: usize = 4;

/// Full hue circle in degrees. Hue values live in [0, HUE_RANGE).
pub const HUE_RANGE: f32 = 360.0;

/// Number of f32 values per encoded blob: x, y, width, height, area.
pub const BLOB_TUPLE_LEN: usize = 5;

/// B3 spline 1D kernel coefficients: [1, 4, 6, 4, 1] / 16.
pub const B3_KERNEL: [f32; 5] = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];

/// Default target hue in degrees (a mid green).
pub const DEFAULT_TARGET_HUE: f32 = 113.0;

/// Default target saturation.
pub const DEFAULT_TARGET_SATURATION: f32 = 0.39;

/// Default target value (brightness).
pub const DEFAULT_TARGET_VALUE: f32 = 0.39;

/// Default hue tolerance in degrees on either side of the target.
pub const DEFAULT_HUE_TOLERANCE: f32 = 35.0;

/// Default saturation tolerance on either side of the target.
pub const DEFAULT_SATURATION_TOLERANCE: f32 = 0.2;

/// Default value tolerance on either side of the target.
pub const DEFAULT_VALUE_TOLERANCE: f32 = 0.2;

/// Default minimum blob area, in full-resolution pixels.
pub const DEFAULT_MIN_AREA: f32 = 1.0;

/// Upper bound on pyramid reductions. Eight halvings turn a 4K frame into a
/// handful of pixels already.
pub const MAX_DOWNSAMPLE_LEVELS: u32 = 8;

/// Upper bound on the mask dilation radius.
pub const MAX_DILATE_RADIUS: u32 = 32;

/// Smallest circle radius drawn around a blob in overlays.
pub const MIN_OVERLAY_RADIUS: u32 = 10;

/// Stroke width of overlay circles, in pixels.
pub const OVERLAY_STROKE: u32 = 4;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HUE_TOLERANCE, DEFAULT_MIN_AREA, DEFAULT_SATURATION_TOLERANCE, DEFAULT_TARGET_HUE,
    DEFAULT_TARGET_SATURATION, DEFAULT_TARGET_VALUE, DEFAULT_VALUE_TOLERANCE, MAX_DILATE_RADIUS,
    MAX_DOWNSAMPLE_LEVELS,
};
use crate::error::{DetectorError, Result};
use crate::frame::HsvColor;

/// Allowed distance from the target color, per channel.
///
/// Hue is in degrees and compared on the circle; saturation and value are in
/// unit range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HsvTolerance {
    #[serde(default = "default_hue_tolerance")]
    pub hue: f32,
    #[serde(default = "default_saturation_tolerance")]
    pub saturation: f32,
    #[serde(default = "default_value_tolerance")]
    pub value: f32,
}

impl HsvTolerance {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl Default for HsvTolerance {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE_TOLERANCE,
            saturation: DEFAULT_SATURATION_TOLERANCE,
            value: DEFAULT_VALUE_TOLERANCE,
        }
    }
}

/// How `min_area` is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaMode {
    /// Keep contours with area >= min_area (pixels).
    #[default]
    Absolute,
    /// Keep contours with area >= min_area * (largest contour area in the frame).
    RelativeToLargest,
}

impl std::fmt::Display for AreaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "Absolute"),
            Self::RelativeToLargest => write!(f, "Relative to largest"),
        }
    }
}

/// How the area of a contour is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaMethod {
    /// Number of pixels in the connected component.
    #[default]
    PixelCount,
    /// Shoelace area of the traced boundary polygon through pixel centers.
    Polygon,
}

impl std::fmt::Display for AreaMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PixelCount => write!(f, "Pixel count"),
            Self::Polygon => write!(f, "Polygon"),
        }
    }
}

/// How many boundary points a traced contour keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContourApproximation {
    /// Every boundary pixel.
    #[default]
    None,
    /// Straight runs collapsed to their end points.
    Simple,
}

impl std::fmt::Display for ContourApproximation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Simple => write!(f, "Simple"),
        }
    }
}

/// Configuration for single-color blob detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Color to look for.
    #[serde(default = "default_target")]
    pub target: HsvColor,
    /// Per-channel tolerance around the target.
    #[serde(default)]
    pub tolerance: HsvTolerance,
    /// Minimum blob area. Negative values let every contour through.
    #[serde(default = "default_min_area")]
    pub min_area: f32,
    #[serde(default)]
    pub area_mode: AreaMode,
    #[serde(default)]
    pub area_method: AreaMethod,
    #[serde(default)]
    pub approximation: ContourApproximation,
    /// Number of 2x pyramid reductions applied before detection.
    #[serde(default)]
    pub downsample_levels: u32,
    /// Radius of the square dilation kernel applied to the mask (0 = off).
    #[serde(default)]
    pub dilate_radius: u32,
}

fn default_target() -> HsvColor {
    HsvColor::new(
        DEFAULT_TARGET_HUE,
        DEFAULT_TARGET_SATURATION,
        DEFAULT_TARGET_VALUE,
    )
}
fn default_hue_tolerance() -> f32 {
    DEFAULT_HUE_TOLERANCE
}
fn default_saturation_tolerance() -> f32 {
    DEFAULT_SATURATION_TOLERANCE
}
fn default_value_tolerance() -> f32 {
    DEFAULT_VALUE_TOLERANCE
}
fn default_min_area() -> f32 {
    DEFAULT_MIN_AREA
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            tolerance: HsvTolerance::default(),
            min_area: DEFAULT_MIN_AREA,
            area_mode: AreaMode::default(),
            area_method: AreaMethod::default(),
            approximation: ContourApproximation::default(),
            downsample_levels: 0,
            dilate_radius: 0,
        }
    }
}

impl DetectorConfig {
    /// Check that every numeric field is usable.
    ///
    /// Only non-finite floats and out-of-bounds structural parameters are
    /// rejected. Negative or out-of-range colors are legal and used as-is.
    pub fn validate(&self) -> Result<()> {
        validate_color(&self.target)?;
        validate_tolerance(&self.tolerance)?;
        validate_min_area(self.min_area)?;

        if self.downsample_levels > MAX_DOWNSAMPLE_LEVELS {
            return Err(DetectorError::ConfigurationOutOfDomain {
                field: "downsample_levels",
                value: self.downsample_levels as f64,
            });
        }
        if self.dilate_radius > MAX_DILATE_RADIUS {
            return Err(DetectorError::ConfigurationOutOfDomain {
                field: "dilate_radius",
                value: self.dilate_radius as f64,
            });
        }
        Ok(())
    }

    /// Side length, in full-resolution pixels, of one detection-resolution pixel.
    pub fn scale_factor(&self) -> u32 {
        1 << self.downsample_levels
    }
}

pub(crate) fn validate_color(color: &HsvColor) -> Result<()> {
    require_finite("target.hue", color.hue)?;
    require_finite("target.saturation", color.saturation)?;
    require_finite("target.value", color.value)
}

pub(crate) fn validate_tolerance(tolerance: &HsvTolerance) -> Result<()> {
    require_finite("tolerance.hue", tolerance.hue)?;
    require_finite("tolerance.saturation", tolerance.saturation)?;
    require_finite("tolerance.value", tolerance.value)
}

pub(crate) fn validate_min_area(min_area: f32) -> Result<()> {
    require_finite("min_area", min_area)
}

fn require_finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DetectorError::ConfigurationOutOfDomain {
            field,
            value: value as f64,
        })
    }
}

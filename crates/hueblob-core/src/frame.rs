use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::RGBA_CHANNELS;
use crate::error::{DetectorError, Result};

/// Borrowed view over a row-major, tightly packed RGBA8 pixel buffer.
///
/// The view is only valid for the lifetime of the borrowed bytes, so the
/// pipeline can never hold on to a camera buffer past the call that handed
/// it over.
#[derive(Clone, Copy, Debug)]
pub struct RgbaFrame<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RgbaFrame<'a> {
    /// Wrap `data` as a `width` x `height` RGBA frame.
    ///
    /// Fails if either dimension is zero or the buffer holds fewer than
    /// `width * height * 4` bytes. Trailing bytes beyond that are ignored.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let required = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(RGBA_CHANNELS))
            .unwrap_or(usize::MAX);

        if width == 0 || height == 0 || data.len() < required {
            return Err(DetectorError::InvalidFrameGeometry {
                width,
                height,
                len: data.len(),
                required,
            });
        }

        Ok(Self {
            data: &data[..required],
            width: width as usize,
            height: height as usize,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Raw bytes of the frame, exactly `width * height * 4` long.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The RGBA bytes of one row.
    pub fn row(&self, row: usize) -> &'a [u8] {
        let stride = self.width * RGBA_CHANNELS;
        &self.data[row * stride..(row + 1) * stride]
    }

    /// The RGBA quadruple at (`row`, `col`).
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 4] {
        let i = (row * self.width + col) * RGBA_CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Owned RGBA8 buffer, used for intermediate (downsampled) frames.
#[derive(Clone, Debug)]
pub struct RgbaBuffer {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl RgbaBuffer {
    pub fn as_frame(&self) -> RgbaFrame<'_> {
        RgbaFrame {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

/// A color in hue/saturation/value form.
///
/// Hue is in degrees, saturation and value in [0.0, 1.0]. Both the converter
/// output and the detector target use this convention.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl HsvColor {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl std::fmt::Display for HsvColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "H {:.1}\u{00b0} S {:.3} V {:.3}",
            self.hue, self.saturation, self.value
        )
    }
}

/// HSV image with one plane per channel, shape = (height, width).
#[derive(Clone, Debug)]
pub struct HsvImage {
    pub hue: Array2<f32>,
    pub saturation: Array2<f32>,
    pub value: Array2<f32>,
}

impl HsvImage {
    pub fn width(&self) -> usize {
        self.hue.ncols()
    }

    pub fn height(&self) -> usize {
        self.hue.nrows()
    }

    /// The color at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> HsvColor {
        HsvColor {
            hue: self.hue[[row, col]],
            saturation: self.saturation[[row, col]],
            value: self.value[[row, col]],
        }
    }
}

//! Stateful per-frame driver around [`detect_blobs`].
//!
//! A `FrameProcessor` is shared between the capture path, which calls
//! [`FrameProcessor::process`] once per delivered frame, and a setup/UI path,
//! which reconfigures it. Every method takes `&self`.
//!
//! The configuration is snapshotted at the start of each frame, so a
//! concurrent reconfiguration shows up on the next frame. The latest result is
//! an `Arc<[Blob]>` swapped in one step, so readers see either the previous or
//! the new sequence in full.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::error::{DetectorError, Result};
use crate::frame::{HsvColor, RgbaFrame};

use super::blob::{encode_blobs, find_blob_near, Blob};
use super::config::{
    validate_color, validate_min_area, validate_tolerance, DetectorConfig, HsvTolerance,
};
use super::detect::detect_blobs;

pub struct FrameProcessor {
    config: RwLock<DetectorConfig>,
    latest: RwLock<Arc<[Blob]>>,
    enabled: AtomicBool,
    frames_processed: AtomicU64,
}

impl FrameProcessor {
    /// Initialize the processor. Processing stays off until [`enable`](Self::enable).
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
            latest: RwLock::new(Arc::from(Vec::<Blob>::new())),
            enabled: AtomicBool::new(false),
            frames_processed: AtomicU64::new(0),
        })
    }

    pub fn enable(&self) {
        if !self.enabled.swap(true, Ordering::SeqCst) {
            info!("Frame processing enabled");
        }
    }

    pub fn disable(&self) {
        if self.enabled.swap(false, Ordering::SeqCst) {
            info!("Frame processing disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> DetectorConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set the target color and, optionally, the tolerance and minimum area.
    ///
    /// All values are checked before any is applied; on error the previous
    /// configuration is kept in full.
    pub fn configure(
        &self,
        target: HsvColor,
        tolerance: Option<HsvTolerance>,
        min_area: Option<f32>,
    ) -> Result<()> {
        self.reject_logged(validate_color(&target))?;
        if let Some(ref tol) = tolerance {
            self.reject_logged(validate_tolerance(tol))?;
        }
        if let Some(area) = min_area {
            self.reject_logged(validate_min_area(area))?;
        }

        self.update(|config| {
            config.target = target;
            if let Some(tol) = tolerance {
                config.tolerance = tol;
            }
            if let Some(area) = min_area {
                config.min_area = area;
            }
        });
        debug!(%target, ?tolerance, ?min_area, "Detector reconfigured");
        Ok(())
    }

    pub fn set_target(&self, target: HsvColor) -> Result<()> {
        self.configure(target, None, None)
    }

    pub fn set_tolerance(&self, tolerance: HsvTolerance) -> Result<()> {
        self.reject_logged(validate_tolerance(&tolerance))?;
        self.update(|config| config.tolerance = tolerance);
        debug!(?tolerance, "Tolerance updated");
        Ok(())
    }

    /// Set the minimum blob area. Negative values disable area filtering.
    pub fn set_min_area(&self, min_area: f32) -> Result<()> {
        self.reject_logged(validate_min_area(min_area))?;
        self.update(|config| config.min_area = min_area);
        debug!(min_area, "Minimum area updated");
        Ok(())
    }

    /// Replace the whole configuration.
    pub fn set_config(&self, new_config: DetectorConfig) -> Result<()> {
        self.reject_logged(new_config.validate())?;
        self.update(|config| *config = new_config);
        debug!("Detector configuration replaced");
        Ok(())
    }

    /// Run detection on a raw RGBA buffer and store the result as latest.
    ///
    /// Bad geometry is rejected before any work is done and leaves the
    /// previous result in place. `data` is not retained after the call.
    pub fn process(&self, data: &[u8], width: u32, height: u32) -> Result<()> {
        let frame = match RgbaFrame::new(data, width, height) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(width, height, len = data.len(), "Rejected frame: {e}");
                return Err(e);
            }
        };
        self.process_frame(&frame)
    }

    /// Run detection on an already validated frame view.
    pub fn process_frame(&self, frame: &RgbaFrame<'_>) -> Result<()> {
        if !self.is_enabled() {
            return Err(DetectorError::ProcessingDisabled);
        }

        let config = self.config();
        let blobs = detect_blobs(frame, &config);

        let count = blobs.len();
        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = Arc::from(blobs);
        let frame_number = self.frames_processed.fetch_add(1, Ordering::SeqCst) + 1;

        debug!(
            frame = frame_number,
            width = frame.width(),
            height = frame.height(),
            blobs = count,
            "Frame processed"
        );
        Ok(())
    }

    /// Blobs from the most recent processed frame; empty before the first one.
    pub fn latest_blobs(&self) -> Arc<[Blob]> {
        Arc::clone(&self.latest.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Latest blobs as a flat `[x, y, width, height, area, ...]` sequence.
    pub fn latest_blob_data(&self) -> Vec<f32> {
        encode_blobs(&self.latest_blobs())
    }

    /// The first latest blob whose centroid lies within `radius` of (`x`, `y`).
    pub fn blob_near(&self, x: f32, y: f32, radius: f32) -> Option<Blob> {
        find_blob_near(&self.latest_blobs(), x, y, radius)
    }

    /// Number of frames processed successfully since construction.
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed.load(Ordering::SeqCst)
    }

    fn update<F>(&self, apply: F)
    where
        F: FnOnce(&mut DetectorConfig),
    {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut *guard);
    }

    fn reject_logged(&self, check: Result<()>) -> Result<()> {
        if let Err(ref e) = check {
            warn!("Rejected configuration: {e}");
        }
        check
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        Self {
            config: RwLock::new(DetectorConfig::default()),
            latest: RwLock::new(Arc::from(Vec::<Blob>::new())),
            enabled: AtomicBool::new(false),
            frames_processed: AtomicU64::new(0),
        }
    }
}

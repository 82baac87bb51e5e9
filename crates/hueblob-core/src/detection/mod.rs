pub mod blob;
pub mod components;
pub mod config;
pub mod contour;
pub mod detect;
pub mod morphology;
pub mod processor;
pub mod threshold;

pub use blob::{encode_blobs, filter_contours, find_blob_near, Blob};
pub use config::{AreaMethod, AreaMode, ContourApproximation, DetectorConfig, HsvTolerance};
pub use contour::{extract_contours, Contour, Point};
pub use detect::detect_blobs;
pub use processor::FrameProcessor;
pub use threshold::{hue_distance, threshold_mask};

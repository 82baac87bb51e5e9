use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error(
        "Invalid frame geometry: {width}x{height} with {len} bytes (need at least {required})"
    )]
    InvalidFrameGeometry {
        width: u32,
        height: u32,
        len: usize,
        required: usize,
    },

    #[error("Configuration value out of domain: {field} = {value}")]
    ConfigurationOutOfDomain { field: &'static str, value: f64 },

    #[error("Frame processing is not enabled")]
    ProcessingDisabled,

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DetectorError>;

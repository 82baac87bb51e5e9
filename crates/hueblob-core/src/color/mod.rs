pub mod hsv;

pub use hsv::{rgb_to_hsv, rgba_to_hsv};

pub mod consts;
pub mod error;
pub mod frame;
pub mod color;
pub mod filters;
pub mod detection;
pub mod io;

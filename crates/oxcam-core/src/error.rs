//! Error types for oxcam

use thiserror::Error;

/// Result type for oxcam operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcam operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Sampling domain is not a usable wavelength range
    #[error("invalid spectral shape: start {start} nm, end {end} nm, interval {interval} nm")]
    InvalidShape { start: f64, end: f64, interval: f64 },

    /// Value table length disagrees with the declared shape
    #[error("spectral shape mismatch: shape has {expected} samples, table has {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Channel distributions of one display do not share a shape
    #[error("display channel \"{channel}\" is not sampled on the common shape")]
    ChannelShape { channel: &'static str },
}

//! Error types for signature capture and GIF lookup

use thiserror::Error;

/// Result type alias for sigcard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while capturing, trimming, encoding or looking up media
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to encode a raster (e.g. zero width or height)
    #[error("Encoding failed: {0}")]
    EncodingError(String),

    /// Failed to decode an encoded image
    #[error("Decoding failed: {0}")]
    DecodeError(String),

    /// Raster construction or cropping failed
    #[error("Invalid raster: {0}")]
    RasterError(String),

    /// The host could not provide a drawing context
    #[error("Drawing context unavailable: {0}")]
    ContextUnavailable(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// A GIF provider answered with an error or an unreadable payload
    #[error("{provider} failed: {message}")]
    ProviderError { provider: String, message: String },

    /// Operation timed out
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodingError(err.to_string())
    }
}

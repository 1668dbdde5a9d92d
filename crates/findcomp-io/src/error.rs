//! I/O error types
//!
//! Provides a unified error type for decoding, encoding, and rendering.
//! The PNM module maps header and payload problems into `IoError` variants
//! so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for raster I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with a supported PNM magic number
    #[error("unsupported magic number: {0:?}")]
    BadMagic(String),

    /// The header is present but structurally invalid
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The header declares a maximum sample value other than 255
    #[error("unsupported maximum sample value {0}, only 255 is supported")]
    UnsupportedMaxValue(u32),

    /// The pixel payload ended before the header-declared size
    #[error("short read: expected {expected} payload bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] findcomp_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

//! Error type shared by the encode, render and export stages.
//!
//! Payload formatting never fails; everything after it can.

use thiserror::Error;

/// Errors produced while encoding, rendering or exporting a QR code
#[derive(Debug, Error)]
pub enum Error {
    /// The payload does not fit in a version 40 symbol at the requested level
    #[error("payload of {length} bytes does not fit in a QR symbol")]
    Encode {
        /// Payload length in bytes
        length: usize,
    },

    /// A color string is not valid hex
    #[error("invalid hex color '{0}'")]
    InvalidColor(String),

    /// Option or request values that cannot be interpreted
    #[error("invalid options: {0}")]
    Options(String),

    /// Raster decode/encode failure (logo loading, PNG writing)
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// PDF assembly failure
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Archive writing failure
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// JSON request/options parsing failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

//! Artifact export: PNG, SVG and single-page PDF

/// Single-page PDF
pub mod pdf;
/// PNG encoding
pub mod png;

pub use pdf::{PdfLayout, export_pdf};
pub use png::encode_png;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Downloadable artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raster image
    #[default]
    Png,
    /// Vector image
    Svg,
    /// Single-page document
    Pdf,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// MIME type of the artifact
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(Error::Options(format!("unknown export format '{other}'"))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A named, ready-to-write export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested file name
    pub file_name: String,
    /// Format of `bytes`
    pub format: ExportFormat,
    /// File contents
    pub bytes: Vec<u8>,
}

/// `qr-code-{type}-{timestamp}.{ext}`
///
/// Characters of `type_name` outside `[A-Za-z0-9_-]` become `_`, so the
/// name never carries a path separator.
pub fn artifact_file_name(type_name: &str, timestamp_ms: u128, format: ExportFormat) -> String {
    let type_name: String = type_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("qr-code-{}-{}.{}", type_name, timestamp_ms, format.extension())
}

/// Milliseconds since the Unix epoch, 0 if the clock is before it
pub fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

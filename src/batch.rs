//! Batch generation
//!
//! One payload per input line, one PNG per payload, all packed into a single
//! ZIP archive. Lines are taken literally (after trimming); there is no
//! header, quoting or escaping. Processing is sequential and the first
//! failure aborts the whole batch.

use crate::config;
use crate::encoder::encode;
use crate::error::Result;
use crate::export::encode_png;
use crate::models::RenderOptions;
use crate::render::rasterize;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// File name of the batch archive
pub const BATCH_ARCHIVE_NAME: &str = "qr-codes-batch.zip";

/// Render settings applied to every line of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSettings {
    /// Options used for each image; patterns are ignored
    pub options: RenderOptions,
}

impl BatchSettings {
    /// Black on white, width/margin/level from the environment
    pub fn from_env() -> Self {
        Self {
            options: RenderOptions {
                width: config::batch_width(),
                margin: config::batch_margin(),
                error_correction: config::batch_error_correction(),
                ..RenderOptions::default()
            },
        }
    }
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            options: RenderOptions {
                width: config::DEFAULT_BATCH_WIDTH,
                margin: config::DEFAULT_BATCH_MARGIN,
                ..RenderOptions::default()
            },
        }
    }
}

/// Result of a completed batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// ZIP archive bytes
    pub archive: Vec<u8>,
    /// Names of the archive entries, in order
    pub entries: Vec<String>,
}

/// Trimmed, non-blank lines of a batch input, ignoring a leading BOM
pub fn batch_lines(input: &str) -> Vec<&str> {
    input
        .strip_prefix('\u{feff}')
        .unwrap_or(input)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Archive entry name for the `n`th (1-based) payload
pub fn entry_name(n: usize) -> String {
    format!("qr-code-{n}.png")
}

/// Render every line of `input` and pack the PNGs into a ZIP archive
pub fn generate_batch(input: &str, settings: &BatchSettings) -> Result<BatchReport> {
    let lines = batch_lines(input);
    log::info!("generating batch of {} QR codes", lines.len());

    let options = RenderOptions {
        patterns: None,
        ..settings.options
    };
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed timestamps keep archives reproducible
    let file_options = FileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default());
    let mut entries = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let matrix = encode(line, options.error_correction)?;
        let (image, _) = rasterize(&matrix, &options);
        let png = encode_png(&image)?;

        let name = entry_name(index + 1);
        log::trace!("adding {} ({} bytes)", name, png.len());
        writer.start_file(name.as_str(), file_options)?;
        writer.write_all(&png)?;
        entries.push(name);
    }

    let archive = writer.finish()?.into_inner();
    log::info!(
        "batch archive ready: {} entries, {} bytes",
        entries.len(),
        archive.len()
    );
    Ok(BatchReport { archive, entries })
}

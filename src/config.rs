//! Environment-driven defaults
//!
//! Values are read once per process and cached.

use crate::models::ECLevel;
use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Batch image width when `QR_BATCH_WIDTH` is unset
pub const DEFAULT_BATCH_WIDTH: u32 = 512;
/// Batch quiet zone when `QR_BATCH_MARGIN` is unset
pub const DEFAULT_BATCH_MARGIN: u32 = 2;

static BATCH_WIDTH: OnceLock<u32> = OnceLock::new();

/// Pixel width of every batch image (`QR_BATCH_WIDTH`, at least 21)
pub fn batch_width() -> u32 {
    *BATCH_WIDTH.get_or_init(|| parse_env_u32("QR_BATCH_WIDTH", DEFAULT_BATCH_WIDTH).max(21))
}

static BATCH_MARGIN: OnceLock<u32> = OnceLock::new();

/// Quiet zone of every batch image in modules (`QR_BATCH_MARGIN`, at most 16)
pub fn batch_margin() -> u32 {
    *BATCH_MARGIN.get_or_init(|| parse_env_u32("QR_BATCH_MARGIN", DEFAULT_BATCH_MARGIN).min(16))
}

static BATCH_EC: OnceLock<ECLevel> = OnceLock::new();

/// Error correction level of batch images (`QR_BATCH_EC`, one of L/M/Q/H)
pub fn batch_error_correction() -> ECLevel {
    *BATCH_EC.get_or_init(|| {
        std::env::var("QR_BATCH_EC")
            .ok()
            .and_then(|v| v.parse::<ECLevel>().ok())
            .unwrap_or_default()
    })
}

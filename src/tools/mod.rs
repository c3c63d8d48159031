//! File helpers shared by the CLI and tests

use crate::error::Result;
use crate::models::{QrRequest, RenderOptions};
use crate::render::load_logo;
use image::{DynamicImage, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON request such as `{"type":"url","content":"https://..."}`
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<QrRequest> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read JSON render options; absent fields take their defaults
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<RenderOptions> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read and decode a logo image
pub fn load_logo_file<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    load_logo(&fs::read(path)?)
}

/// Load an image as an RGBA canvas
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Read a batch input file
pub fn read_batch_input<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write `bytes` as `dir/file_name`, creating `dir` if needed
pub fn write_artifact<P: AsRef<Path>>(dir: P, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(file_name);
    fs::write(&path, bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

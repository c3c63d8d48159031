//! qrcraft - QR code payload formatting, styled rendering and export
//!
//! Turns a typed request (URL, text, Wi-Fi, contact, e-mail, phone, location,
//! event) into the exact payload string readers expect, encodes it, and
//! renders it as a PNG, SVG or single-page PDF. Raster output can be
//! restyled with module shapes, finder pattern styles and a centered logo.
//! A batch mode packs one PNG per input line into a ZIP archive.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Batch generation into a ZIP archive
pub mod batch;
/// Environment-driven defaults
pub mod config;
/// Text to module matrix
pub mod encoder;
/// Error type and result alias
pub mod error;
/// PNG, SVG and PDF artifacts
pub mod export;
/// Core data structures (requests, options, colors, BitMatrix)
pub mod models;
/// Request to payload string
pub mod payload;
/// Request-to-artifact pipeline
pub mod pipeline;
/// Rasterization, shape and eye styling, logo overlay, SVG
pub mod render;
/// File helpers for the CLI
pub mod tools;

pub use batch::{BatchReport, BatchSettings, generate_batch};
pub use encoder::encode;
pub use error::{Error, Result};
pub use export::{Artifact, ExportFormat};
pub use models::{
    BitMatrix, Color, ECLevel, EyeStyle, ModuleGrid, PatternOptions, QrKind, QrRequest,
    RenderOptions, ShapeStyle,
};
pub use payload::format_payload;
pub use pipeline::Generator;

use image::{ImageBuffer, RgbaImage};
use render::shapes::grid_for;

/// Render `request` with `options` and encode it as PNG bytes
///
/// # Example
/// ```
/// use qrcraft::{QrRequest, RenderOptions};
///
/// let request = QrRequest::Url { content: Some("https://example.com".into()) };
/// let png = qrcraft::generate_png(&request, &RenderOptions::default()).unwrap();
/// assert!(png.starts_with(b"\x89PNG"));
/// ```
pub fn generate_png(request: &QrRequest, options: &RenderOptions) -> Result<Vec<u8>> {
    let image = Generator::new(*options).render(request)?;
    export::encode_png(&image)
}

/// Render `request` with `options` as an SVG document
pub fn generate_svg(request: &QrRequest, options: &RenderOptions) -> Result<String> {
    Generator::new(*options).render_svg(request)
}

/// Apply a module shape style to an existing QR image
///
/// Uses the fixed 25-cell approximation since the symbol geometry of an
/// arbitrary image is unknown. Images narrower than 25 px come back as a
/// plain background canvas.
pub fn restyle(
    image: &RgbaImage,
    foreground: Color,
    background: Color,
    style: ShapeStyle,
) -> RgbaImage {
    match grid_for(image, None, false) {
        Some(grid) => render::apply_shape_style(image, foreground, background, style, &grid),
        None => ImageBuffer::from_pixel(image.width(), image.height(), background.to_rgba()),
    }
}

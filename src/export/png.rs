use crate::error::Result;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

/// Encode an RGBA canvas as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}

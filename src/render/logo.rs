use crate::error::Result;
use crate::models::Color;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

/// Logo side as a fraction of the canvas side
pub const LOGO_FRACTION: f64 = 0.2;
/// White border drawn around the logo, in pixels
pub const LOGO_PADDING: f64 = 5.0;

/// Decode logo bytes (PNG, JPEG or GIF)
pub fn load_logo(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Stamp `logo` onto the center of `image` over a white pad
///
/// The logo is stretched to a square of `0.2 * side` pixels; high error
/// correction keeps the covered modules recoverable.
pub fn overlay_logo(image: &mut RgbaImage, logo: &DynamicImage) {
    let side = image.width().min(image.height()) as f64;
    let logo_size = side * LOGO_FRACTION;
    let target = logo_size.round() as u32;
    if target == 0 {
        return;
    }
    let origin = (side - logo_size) / 2.0;

    let pad_origin = (origin - LOGO_PADDING).floor().max(0.0) as u32;
    let pad_end = ((origin + logo_size + LOGO_PADDING).ceil() as u32).min(side as u32);
    let white = Color::WHITE.to_rgba();
    for y in pad_origin..pad_end {
        for x in pad_origin..pad_end {
            image.put_pixel(x, y, white);
        }
    }

    let resized = imageops::resize(&logo.to_rgba8(), target, target, FilterType::Lanczos3);
    let offset = origin.round() as i64;
    imageops::overlay(image, &resized, offset, offset);

    log::debug!("overlaid {target}px logo at ({offset}, {offset})");
}

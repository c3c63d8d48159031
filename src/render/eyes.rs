use super::raster::SymbolGeometry;
use super::shapes::Shape;
use crate::models::{Color, EyeStyle};
use image::{Rgba, RgbaImage};

/// Finder pattern side in modules
const FINDER_SIZE: f64 = 7.0;

/// Repaint the three finder patterns with the given ring and center styles
///
/// Needs the real symbol geometry; the 7x7 area of each finder is cleared to
/// background before the ring and center are painted.
pub fn apply_eye_styles(
    image: &mut RgbaImage,
    geometry: &SymbolGeometry,
    foreground: Color,
    background: Color,
    eye_style: EyeStyle,
    eye_ball_style: EyeStyle,
) {
    if geometry.modules < FINDER_SIZE as usize {
        return;
    }
    let far = (geometry.modules - FINDER_SIZE as usize) as f64;
    let fg = foreground.to_rgba();
    let bg = background.to_rgba();

    for (mx, my) in [(0.0, 0.0), (far, 0.0), (0.0, far)] {
        paint_eye(image, geometry, mx, my, eye_style, eye_ball_style, fg, bg);
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_eye(
    image: &mut RgbaImage,
    geometry: &SymbolGeometry,
    mx: f64,
    my: f64,
    eye_style: EyeStyle,
    eye_ball_style: EyeStyle,
    fg: Rgba<u8>,
    bg: Rgba<u8>,
) {
    let s = geometry.scale;
    let x = geometry.origin() + mx * s;
    let y = geometry.origin() + my * s;

    Shape::Rect {
        x,
        y,
        w: FINDER_SIZE * s,
        h: FINDER_SIZE * s,
    }
    .fill(image, bg);

    // Ring: 7-module outline minus its 5-module interior
    eye_shape(eye_style, x, y, 7.0 * s, s).fill(image, fg);
    eye_shape(eye_style, x + s, y + s, 5.0 * s, s).fill(image, bg);
    // Center: 3x3 modules
    eye_shape(eye_ball_style, x + 2.0 * s, y + 2.0 * s, 3.0 * s, s).fill(image, fg);
}

fn eye_shape(style: EyeStyle, x: f64, y: f64, side: f64, module: f64) -> Shape {
    match style {
        EyeStyle::Square => Shape::Rect {
            x,
            y,
            w: side,
            h: side,
        },
        EyeStyle::Circle => Shape::Circle {
            cx: x + side / 2.0,
            cy: y + side / 2.0,
            r: side / 2.0,
        },
        EyeStyle::Rounded => Shape::RoundedRect {
            x,
            y,
            w: side,
            h: side,
            radius: module * 1.5,
        },
    }
}

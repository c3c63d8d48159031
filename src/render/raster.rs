use crate::models::{BitMatrix, RenderOptions};
use image::{ImageBuffer, RgbaImage};

/// Module scale used when the requested width cannot hold one pixel per module
pub const FALLBACK_SCALE: f64 = 4.0;

/// Placement of the symbol inside a rendered canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolGeometry {
    /// Modules per side, without quiet zone
    pub modules: usize,
    /// Quiet zone in modules
    pub margin: usize,
    /// Pixels per module (may be fractional)
    pub scale: f64,
    /// Canvas side in pixels
    pub side: u32,
}

impl SymbolGeometry {
    /// Fit `modules + 2 * margin` modules into `width` pixels
    ///
    /// When `width` is too small for one pixel per module the scale falls back
    /// to [`FALLBACK_SCALE`] and the canvas grows accordingly.
    pub fn fit(modules: usize, margin: usize, width: u32) -> Self {
        let total = modules + 2 * margin;
        let (scale, side) = if total > 0 && width as usize >= total {
            (width as f64 / total as f64, width)
        } else {
            (FALLBACK_SCALE, (total as f64 * FALLBACK_SCALE) as u32)
        };
        Self {
            modules,
            margin,
            scale,
            side,
        }
    }

    /// Pixel offset of the first symbol module
    pub fn origin(&self) -> f64 {
        self.margin as f64 * self.scale
    }

    /// Module under pixel (px, py), `None` inside the quiet zone
    pub fn module_at(&self, px: u32, py: u32) -> Option<(usize, usize)> {
        let origin = self.origin();
        let far = self.side as f64 - origin;
        let (fx, fy) = (px as f64, py as f64);
        if fx < origin || fy < origin || fx >= far || fy >= far || self.modules == 0 {
            return None;
        }
        let last = self.modules - 1;
        let mx = (((fx - origin) / self.scale).floor() as usize).min(last);
        let my = (((fy - origin) / self.scale).floor() as usize).min(last);
        Some((mx, my))
    }
}

/// Paint a module matrix onto a square RGBA canvas
pub fn rasterize(matrix: &BitMatrix, options: &RenderOptions) -> (RgbaImage, SymbolGeometry) {
    let geometry = SymbolGeometry::fit(matrix.size(), options.margin as usize, options.width);
    let dark = options.foreground.to_rgba();
    let light = options.background.to_rgba();

    let image = ImageBuffer::from_fn(geometry.side, geometry.side, |px, py| {
        match geometry.module_at(px, py) {
            Some((mx, my)) if matrix.get(mx, my) => dark,
            _ => light,
        }
    });

    log::debug!(
        "rasterized {} modules at scale {:.3} into {}x{} px",
        geometry.modules,
        geometry.scale,
        geometry.side,
        geometry.side
    );

    (image, geometry)
}

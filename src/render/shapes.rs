//! Module shape renderer
//!
//! Re-samples a rendered symbol on a cell grid and repaints each dark cell
//! with the selected shape. Painting is aliasing-free: a pixel takes the
//! foreground color iff its center lies inside the shape, so the output only
//! ever contains the foreground and background colors.

use super::raster::SymbolGeometry;
use crate::models::{Color, ShapeStyle};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::f64::consts::FRAC_PI_4;

/// Red channel value below which a sampled pixel counts as dark
pub const DARK_THRESHOLD: u8 = 128;

/// Modules per side assumed by the approximate grid
pub const APPROXIMATE_MODULES: u32 = 25;

/// Grid of square cells laid over the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    origin: f64,
    cell: f64,
    columns: usize,
    rows: usize,
}

impl CellGrid {
    /// Fixed grid with cell size `floor(width / 25)` walked from the top-left
    /// corner across the whole canvas
    ///
    /// Does not depend on the symbol version, so cells drift off the real
    /// modules for symbols far from 25 modules per side. Returns `None` when
    /// the canvas is narrower than 25 px.
    pub fn approximate(width: u32, height: u32) -> Option<Self> {
        let cell = width / APPROXIMATE_MODULES;
        if cell == 0 {
            return None;
        }
        Some(Self {
            origin: 0.0,
            cell: cell as f64,
            columns: width.div_ceil(cell) as usize,
            rows: height.div_ceil(cell) as usize,
        })
    }

    /// Grid aligned with the real modules of a rendered symbol
    pub fn from_geometry(geometry: &SymbolGeometry) -> Self {
        Self {
            origin: geometry.origin(),
            cell: geometry.scale,
            columns: geometry.modules,
            rows: geometry.modules,
        }
    }

    /// Cell side in pixels
    pub fn cell_size(&self) -> f64 {
        self.cell
    }

    /// Number of cells per row and per column
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    fn cell_origin(&self, column: usize, row: usize) -> (f64, f64) {
        (
            self.origin + column as f64 * self.cell,
            self.origin + row as f64 * self.cell,
        )
    }
}

/// A filled region in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Shape {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    RoundedRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        angle: f64,
    },
    Diamond {
        cx: f64,
        cy: f64,
        half: f64,
    },
}

impl Shape {
    /// Shape used for one dark cell at (x, y) of side `c`
    pub(crate) fn for_cell(style: ShapeStyle, x: f64, y: f64, c: f64) -> Shape {
        let (cx, cy) = (x + c / 2.0, y + c / 2.0);
        match style {
            ShapeStyle::Classic => Shape::Rect { x, y, w: c, h: c },
            ShapeStyle::SoftRounded => Shape::Circle {
                cx,
                cy,
                r: c / 2.0 * 0.8,
            },
            ShapeStyle::Dots => Shape::Circle {
                cx,
                cy,
                r: c / 2.0 * 0.6,
            },
            ShapeStyle::RoundedSquare => Shape::RoundedRect {
                x: x + c * 0.1,
                y: y + c * 0.1,
                w: c * 0.8,
                h: c * 0.8,
                radius: c * 0.2,
            },
            ShapeStyle::Diamond => Shape::Diamond {
                cx,
                cy,
                half: c / 2.0,
            },
            ShapeStyle::HorizontalLines => Shape::Rect {
                x,
                y: y + c * 0.3,
                w: c,
                h: c * 0.4,
            },
            ShapeStyle::VerticalLines => Shape::Rect {
                x: x + c * 0.3,
                y,
                w: c * 0.4,
                h: c,
            },
            ShapeStyle::Fluid => Shape::Circle {
                cx: cx + ((x + y) / 10.0).sin() * 2.0,
                cy,
                r: c / 2.0 * 0.7,
            },
            ShapeStyle::Leaf => Shape::Ellipse {
                cx,
                cy,
                rx: c / 2.0 * 0.8,
                ry: c / 2.0 * 0.6,
                angle: FRAC_PI_4,
            },
        }
    }

    /// True when point (px, py) lies inside
    pub(crate) fn contains(&self, px: f64, py: f64) -> bool {
        match *self {
            Shape::Rect { x, y, w, h } => px >= x && px < x + w && py >= y && py < y + h,
            Shape::RoundedRect { x, y, w, h, radius } => {
                if px < x || px >= x + w || py < y || py >= y + h {
                    return false;
                }
                let r = radius.min(w / 2.0).min(h / 2.0);
                let dx = (px - (x + w / 2.0)).abs() - (w / 2.0 - r);
                let dy = (py - (y + h / 2.0)).abs() - (h / 2.0 - r);
                if dx <= 0.0 || dy <= 0.0 {
                    return true;
                }
                dx * dx + dy * dy <= r * r
            }
            Shape::Circle { cx, cy, r } => {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= r * r
            }
            Shape::Ellipse {
                cx,
                cy,
                rx,
                ry,
                angle,
            } => {
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let (dx, dy) = (px - cx, py - cy);
                let (sin, cos) = angle.sin_cos();
                let u = dx * cos + dy * sin;
                let v = -dx * sin + dy * cos;
                (u / rx).powi(2) + (v / ry).powi(2) <= 1.0
            }
            Shape::Diamond { cx, cy, half } => {
                half > 0.0 && (px - cx).abs() + (py - cy).abs() <= half
            }
        }
    }

    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y)
    fn bounds(&self) -> (f64, f64, f64, f64) {
        match *self {
            Shape::Rect { x, y, w, h } | Shape::RoundedRect { x, y, w, h, .. } => {
                (x, y, x + w, y + h)
            }
            Shape::Circle { cx, cy, r } => (cx - r, cy - r, cx + r, cy + r),
            Shape::Ellipse { cx, cy, rx, ry, .. } => {
                let r = rx.max(ry);
                (cx - r, cy - r, cx + r, cy + r)
            }
            Shape::Diamond { cx, cy, half } => (cx - half, cy - half, cx + half, cy + half),
        }
    }

    /// Set every pixel whose center lies inside to `color`
    pub(crate) fn fill(&self, image: &mut RgbaImage, color: Rgba<u8>) {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return;
        }
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(width);
        let y1 = (max_y.ceil().max(0.0) as u32).min(height);

        for py in y0..y1 {
            for px in x0..x1 {
                if self.contains(px as f64 + 0.5, py as f64 + 0.5) {
                    image.put_pixel(px, py, color);
                }
            }
        }
    }
}

/// Repaint every dark cell of `image` with `style`
///
/// Each cell is classified by the single pixel at its center (red channel
/// below [`DARK_THRESHOLD`] is dark). The result starts as a full background
/// fill, so light cells and anything between cells become background.
pub fn apply_shape_style(
    image: &RgbaImage,
    foreground: Color,
    background: Color,
    style: ShapeStyle,
    grid: &CellGrid,
) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut out: RgbaImage = ImageBuffer::from_pixel(width, height, background.to_rgba());
    if width == 0 || height == 0 {
        return out;
    }

    let fg = foreground.to_rgba();
    let cell = grid.cell;
    let half = (cell / 2.0).floor();
    let mut dark_cells = 0usize;

    for row in 0..grid.rows {
        for column in 0..grid.columns {
            let (x, y) = grid.cell_origin(column, row);
            let sample_x = ((x + half).floor().max(0.0) as u32).min(width - 1);
            let sample_y = ((y + half).floor().max(0.0) as u32).min(height - 1);
            if image.get_pixel(sample_x, sample_y).0[0] >= DARK_THRESHOLD {
                continue;
            }
            dark_cells += 1;
            Shape::for_cell(style, x, y, cell).fill(&mut out, fg);
        }
    }

    log::debug!(
        "applied {} shape to {} dark cells ({}x{} grid, cell {:.2} px)",
        style,
        dark_cells,
        grid.columns,
        grid.rows,
        cell
    );

    out
}

/// Grid for `image` chosen by the pattern options, falling back to the
/// symbol geometry when the canvas is too small for the approximate grid
pub fn grid_for(image: &RgbaImage, geometry: Option<&SymbolGeometry>, exact: bool) -> Option<CellGrid> {
    match (exact, geometry) {
        (true, Some(geometry)) => Some(CellGrid::from_geometry(geometry)),
        _ => {
            let (width, height) = image.dimensions();
            let grid = CellGrid::approximate(width, height);
            if grid.is_none() {
                log::warn!("canvas {width}px wide is too small for the approximate module grid");
            }
            grid.or_else(|| geometry.map(CellGrid::from_geometry))
        }
    }
}

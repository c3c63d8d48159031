//! Rendering of encoded symbols
//!
//! - Rasterization of a module matrix into an RGBA canvas
//! - Module shape restyling (classic, dots, diamond, leaf, ...)
//! - Finder pattern (eye) restyling
//! - Logo overlay
//! - SVG output

/// Finder pattern styles
pub mod eyes;
/// Centered logo stamp
pub mod logo;
/// Matrix to RGBA canvas
pub mod raster;
/// Module shape restyling
pub mod shapes;
/// Vector output
pub mod svg;

pub use eyes::apply_eye_styles;
pub use logo::{load_logo, overlay_logo};
pub use raster::{SymbolGeometry, rasterize};
pub use shapes::{CellGrid, apply_shape_style};
pub use svg::render_svg;

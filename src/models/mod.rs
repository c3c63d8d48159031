/// RGBA colors parsed from hex strings
pub mod color;
/// Square module matrix
pub mod matrix;
/// Render and pattern options
pub mod options;
/// Typed generation requests
pub mod request;

pub use color::Color;
pub use matrix::BitMatrix;
pub use options::{ECLevel, EyeStyle, ModuleGrid, PatternOptions, RenderOptions, ShapeStyle};
pub use request::{CalendarEvent, ContactCard, QrKind, QrRequest, WifiNetwork};

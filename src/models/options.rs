use super::Color;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    #[default]
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Matching level of the symbol encoder
    pub fn to_qrcodegen(self) -> qrcodegen::QrCodeEcc {
        match self {
            ECLevel::L => qrcodegen::QrCodeEcc::Low,
            ECLevel::M => qrcodegen::QrCodeEcc::Medium,
            ECLevel::Q => qrcodegen::QrCodeEcc::Quartile,
            ECLevel::H => qrcodegen::QrCodeEcc::High,
        }
    }
}

impl FromStr for ECLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            other => Err(Error::Options(format!(
                "unknown error correction level '{other}'"
            ))),
        }
    }
}

/// How dark modules are repainted by the shape renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeStyle {
    /// Plain filled squares
    #[default]
    Classic,
    /// Inset squares with rounded corners
    RoundedSquare,
    /// Large circles
    SoftRounded,
    /// Small circles
    Dots,
    /// Four-point polygons through the cell edge midpoints
    Diamond,
    /// Ellipses rotated 45 degrees
    Leaf,
    /// Horizontal bars
    HorizontalLines,
    /// Vertical bars
    VerticalLines,
    /// Circles nudged along a sine wave
    Fluid,
}

impl ShapeStyle {
    /// Every style in picker order
    pub const ALL: [ShapeStyle; 9] = [
        ShapeStyle::Classic,
        ShapeStyle::RoundedSquare,
        ShapeStyle::SoftRounded,
        ShapeStyle::Dots,
        ShapeStyle::Diamond,
        ShapeStyle::Leaf,
        ShapeStyle::HorizontalLines,
        ShapeStyle::VerticalLines,
        ShapeStyle::Fluid,
    ];

    /// Kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeStyle::Classic => "classic",
            ShapeStyle::RoundedSquare => "rounded-square",
            ShapeStyle::SoftRounded => "soft-rounded",
            ShapeStyle::Dots => "dots",
            ShapeStyle::Diamond => "diamond",
            ShapeStyle::Leaf => "leaf",
            ShapeStyle::HorizontalLines => "horizontal-lines",
            ShapeStyle::VerticalLines => "vertical-lines",
            ShapeStyle::Fluid => "fluid",
        }
    }
}

impl FromStr for ShapeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s.trim())
            .ok_or_else(|| Error::Options(format!("unknown shape style '{s}'")))
    }
}

impl fmt::Display for ShapeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a finder pattern ring or its center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    /// Standard square
    #[default]
    Square,
    /// Circular
    Circle,
    /// Square with rounded corners
    Rounded,
}

impl FromStr for EyeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "square" => Ok(EyeStyle::Square),
            "circle" => Ok(EyeStyle::Circle),
            "rounded" => Ok(EyeStyle::Rounded),
            other => Err(Error::Options(format!("unknown eye style '{other}'"))),
        }
    }
}

/// Cell grid used by the shape renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleGrid {
    /// Fixed 25-cell grid over the whole canvas, independent of the symbol
    /// version. Misregisters for symbols far from 25 modules per side.
    #[default]
    Approximate,
    /// Grid taken from the encoded symbol's real module count and margin
    Exact,
}

/// Pattern descriptor attached to [`RenderOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternOptions {
    /// Module shape
    pub shape_style: ShapeStyle,
    /// Finder ring shape
    #[serde(rename = "eyeType")]
    pub eye_style: EyeStyle,
    /// Finder center shape
    #[serde(rename = "eyeBallType")]
    pub eye_ball_style: EyeStyle,
    /// Cell grid for module reshaping
    pub grid: ModuleGrid,
}

impl PatternOptions {
    /// True when the finder patterns need repainting
    pub fn styles_eyes(&self) -> bool {
        self.eye_style != EyeStyle::Square || self.eye_ball_style != EyeStyle::Square
    }
}

/// Render configuration; recreated per render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Dark module color
    #[serde(rename = "color")]
    pub foreground: Color,
    /// Light module and quiet-zone color
    #[serde(rename = "backgroundColor")]
    pub background: Color,
    /// Requested image side in pixels
    pub width: u32,
    /// Quiet zone in modules
    pub margin: u32,
    /// Error correction level
    #[serde(rename = "errorCorrectionLevel")]
    pub error_correction: ECLevel,
    /// Optional module/eye styling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<PatternOptions>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            width: 256,
            margin: 2,
            error_correction: ECLevel::M,
            patterns: None,
        }
    }
}

impl RenderOptions {
    /// Same options at a different pixel width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Shape style in effect, `classic` when no pattern is set
    pub fn shape_style(&self) -> ShapeStyle {
        self.patterns.map(|p| p.shape_style).unwrap_or_default()
    }
}

use crate::error::{Error, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color parsed from a CSS-style hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque black, the default foreground
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white, the default background and logo pad
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(input: &str) -> Result<Self> {
        let hex = input.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(input.to_string()));
        }

        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return Err(Error::InvalidColor(input.to_string())),
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16);
        let parsed = (|| -> std::result::Result<Color, std::num::ParseIntError> {
            let a = if expanded.len() == 8 { channel(6)? } else { 255 };
            Ok(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a,
            })
        })();
        parsed.map_err(|_| Error::InvalidColor(input.to_string()))
    }

    /// Pixel value for `image` buffers
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    /// Lower-case `#rrggbb` form, with alpha appended only when not opaque
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Color::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

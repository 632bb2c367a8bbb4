use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 8-bit RGB color, written and parsed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {0:?}: expected #RRGGBB")]
pub struct ColorParseError(pub String);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default gradient start, #0000FF.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    /// Default gradient end, #FF0000.
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    /// Linear interpolation per channel; `t` is clamped to `[0, 1]`.
    ///
    /// Channel values are truncated toward zero, so `t = 0` gives `self`
    /// and `t = 1` gives `end` exactly.
    pub fn lerp(self, end: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
        Rgb {
            r: channel(self.r, end.r),
            g: channel(self.g, end.g),
            b: channel(self.b, end.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Position of the `index`-th qualifying word along the gradient.
///
/// The first word sits at 0.0 and the last (`total - 1`) at 1.0; a lone
/// word sits at 0.0.
pub fn gradient_position(index: usize, total: usize) -> f64 {
    index as f64 / total.saturating_sub(1).max(1) as f64
}

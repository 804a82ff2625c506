//! Drawing primitives the engine needs from its host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const VIOLET: Rgb = Rgb(124, 58, 237);
    pub const CYAN: Rgb = Rgb(6, 182, 212);
    pub const PINK: Rgb = Rgb(244, 114, 182);

    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Palette colour plus opacity, rendered as a CSS `rgba()` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.rgb;
        write!(f, "rgba({r},{g},{b},{})", self.alpha)
    }
}

/// A 2D raster target. Coordinates are canvas pixels.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Rgba);
}

//! Proximity lines between nearby nodes.
//!
//! Every unordered pair is examined once per frame, so a pool of `n` nodes
//! costs `n * (n - 1) / 2` distance checks. Pools are kept to a few dozen
//! nodes; there is deliberately no spatial index here.

use serde::{Deserialize, Serialize};

use super::pointer::Point;
use super::surface::{Rgb, Surface};

/// Appearance of connector lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorStyle {
    /// Pairs closer than this are connected.
    pub radius: f64,
    /// Opacity of a zero-length connector.
    pub base_alpha: f64,
    pub width: f64,
    pub color: Rgb,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            radius: 120.0,
            base_alpha: 0.12,
            width: 0.8,
            color: Rgb::VIOLET,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectorStats {
    /// Pairwise distance checks performed.
    pub checks: usize,
    /// Lines actually drawn.
    pub drawn: usize,
}

/// Opacity of a connector spanning `dist` pixels.
pub fn connector_alpha(dist: f64, style: &ConnectorStyle) -> f64 {
    if dist.is_nan() || style.radius.is_nan() || dist >= style.radius {
        return 0.0;
    }
    ((1.0 - dist / style.radius) * style.base_alpha).clamp(0.0, 1.0)
}

pub fn draw_connectors<S: Surface + ?Sized>(
    points: &[Point],
    style: &ConnectorStyle,
    surface: &mut S,
) -> ConnectorStats {
    let mut stats = ConnectorStats::default();

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            stats.checks += 1;
            let dist = (a.x - b.x).hypot(a.y - b.y);
            if dist < style.radius {
                let color = style.color.with_alpha(connector_alpha(dist, style));
                surface.stroke_line(a.x, a.y, b.x, b.y, style.width, color);
                stats.drawn += 1;
            }
        }
    }

    stats
}

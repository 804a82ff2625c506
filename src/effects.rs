//! Small page effects: scroll progress, navbar state, card tilt, button
//! ripple and stat counters. The browser wiring lives in `wasm::page`;
//! everything here is plain arithmetic.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SiteError};

/// Axis-aligned box in viewport pixels, as returned by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Scroll thresholds and counter timing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Navbar turns solid past this scroll offset.
    pub navbar_offset: f64,
    /// A section becomes active once its top is this close to the viewport top.
    pub active_section_offset: f64,
    pub back_to_top_offset: f64,
    /// Maximum card tilt in degrees.
    pub max_tilt: f64,
    pub counter_duration_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            navbar_offset: 60.0,
            active_section_offset: 120.0,
            back_to_top_offset: 400.0,
            max_tilt: 6.0,
            counter_duration_ms: 1200,
        }
    }
}

impl EffectsConfig {
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }
}

/// How far down the page the reader is, in percent.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || scroll_y.is_nan() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Last section (in document order) whose top has reached `offset`.
pub fn active_section<'a, I>(sections: I, offset: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| *top <= offset)
        .map(|(id, _)| id)
        .last()
}

/// Rotation around X and Y (degrees) for a card under the pointer.
pub fn tilt_angles(pointer_x: f64, pointer_y: f64, card: Rect, max_tilt: f64) -> (f64, f64) {
    let half_w = card.width / 2.0;
    let half_h = card.height / 2.0;
    if half_w.is_nan() || half_h.is_nan() || half_w <= 0.0 || half_h <= 0.0 {
        return (0.0, 0.0);
    }
    let cx = card.left + half_w;
    let cy = card.top + half_h;
    let rx = ((pointer_y - cy) / half_h * -max_tilt).clamp(-max_tilt, max_tilt);
    let ry = ((pointer_x - cx) / half_w * max_tilt).clamp(-max_tilt, max_tilt);
    (rx, ry)
}

pub fn tilt_transform(rx: f64, ry: f64) -> String {
    format!("perspective(800px) rotateX({rx}deg) rotateY({ry}deg) translateY(-6px)")
}

/// Size and offset of a ripple centred on a click, relative to the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple_geometry(button: Rect, click_x: f64, click_y: f64) -> Ripple {
    let size = button.width.max(button.height) * 2.0;
    Ripple {
        size,
        left: click_x - button.left - size / 2.0,
        top: click_y - button.top - size / 2.0,
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Counter value `elapsed` into an animation of length `duration`.
pub fn counter_value(target: i64, elapsed: Duration, duration: Duration) -> i64 {
    let t = if duration.is_zero() {
        1.0
    } else {
        elapsed.as_secs_f64() / duration.as_secs_f64()
    };
    (ease_out_cubic(t) * target as f64).round() as i64
}

/// Parse a `data-count` attribute.
pub fn parse_count(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SiteError::InvalidCount(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_on_short_page_is_zero() {
        assert_eq!(scroll_progress(100.0, 800.0, 900.0), 0.0);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}

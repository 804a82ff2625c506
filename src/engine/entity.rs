//! Per-entity state and the behaviour of each entity kind.

use std::f64::consts::TAU;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use super::pointer::Point;
use super::surface::{Rgb, Surface};
use super::{Bounds, Physics};

/// How an entity spawns, moves, leaves the canvas and is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Rising dot with a fade-in / plateau / fade-out lifetime.
    Ambient,
    /// Short segment sliding along a fixed heading.
    FlowLine,
    /// Wandering dot pushed away by the pointer; takes part in connectors.
    Node,
    /// Dot drifting diagonally up and to the right.
    Drift,
}

/// Read-only inputs to a single update step.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub bounds: Bounds,
    pub pointer: Option<Point>,
    pub physics: &'a Physics,
    pub palette: &'a [Rgb],
}

/// Stroke width of flow lines, in pixels.
const FLOW_LINE_WIDTH: f64 = 0.8;

/// How far a flow line may leave the canvas before it respawns.
const FLOW_LINE_MARGIN: f64 = 100.0;

/// How far a drift particle may leave the canvas before it respawns.
const DRIFT_MARGIN: f64 = 10.0;

/// Distance below the bottom edge where ambient particles respawn.
const AMBIENT_SPAWN_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radius for dots, segment length for flow lines.
    pub size: f64,
    /// Heading in radians (flow lines).
    pub angle: f64,
    /// Scalar speed (flow lines and drift particles).
    pub speed: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub max_alpha: f64,
    pub age: u32,
    /// Lifetime in frames; `None` for kinds that never expire.
    pub max_age: Option<u32>,
}

impl Entity {
    /// Create an entity of `kind` with its initial-population distribution.
    pub fn spawn<R: Rng + ?Sized>(
        kind: EntityKind,
        bounds: Bounds,
        palette: &[Rgb],
        rng: &mut R,
    ) -> Self {
        let mut entity = Entity {
            kind,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            size: 0.0,
            angle: 0.0,
            speed: 0.0,
            color: Rgb::VIOLET,
            alpha: 0.0,
            max_alpha: 0.0,
            age: 0,
            max_age: None,
        };
        entity.reset(true, bounds, palette, rng);
        entity
    }

    /// Reinitialise every mutable field in place. `initial` is true for the
    /// first population and false for respawns.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        initial: bool,
        bounds: Bounds,
        palette: &[Rgb],
        rng: &mut R,
    ) {
        self.x = rng.gen::<f64>() * bounds.width;
        self.y = rng.gen::<f64>() * bounds.height;
        self.color = palette.choose(rng).copied().unwrap_or(Rgb::VIOLET);
        self.age = 0;
        self.max_age = None;
        self.vx = 0.0;
        self.vy = 0.0;
        self.angle = 0.0;
        self.speed = 0.0;

        match self.kind {
            EntityKind::Ambient => {
                if !initial {
                    self.y = bounds.height + AMBIENT_SPAWN_OFFSET;
                }
                self.size = rng.gen::<f64>() * 2.0 + 0.5;
                self.vy = -(rng.gen::<f64>() * 0.6 + 0.2);
                self.vx = (rng.gen::<f64>() - 0.5) * 0.3;
                self.alpha = 0.0;
                self.max_alpha = rng.gen::<f64>() * 0.5 + 0.1;
                self.max_age = Some((rng.gen::<f64>() * 300.0 + 200.0) as u32);
            }
            EntityKind::FlowLine => {
                self.size = rng.gen::<f64>() * 60.0 + 20.0;
                self.angle = rng.gen::<f64>() * TAU;
                self.speed = rng.gen::<f64>() * 0.5 + 0.2;
                self.alpha = rng.gen::<f64>() * 0.12 + 0.03;
                self.max_alpha = self.alpha;
            }
            EntityKind::Node => {
                self.vx = (rng.gen::<f64>() - 0.5) * 0.4;
                self.vy = (rng.gen::<f64>() - 0.5) * 0.4;
                self.size = rng.gen::<f64>() * 3.0 + 1.0;
                self.alpha = rng.gen::<f64>() * 0.4 + 0.1;
                self.max_alpha = self.alpha;
            }
            EntityKind::Drift => {
                self.size = rng.gen::<f64>() * 2.0 + 0.5;
                self.speed = rng.gen::<f64>() * 0.8 + 0.3;
                self.alpha = rng.gen::<f64>() * 0.3 + 0.05;
                self.max_alpha = self.alpha;
            }
        }
    }

    /// Advance one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, ctx: &StepContext<'_>, rng: &mut R) {
        let Bounds { width, height } = ctx.bounds;

        match self.kind {
            EntityKind::Ambient => {
                self.x += self.vx;
                self.y += self.vy;
                self.age = self.age.saturating_add(1);
                let max_age = self.max_age.unwrap_or(1).max(1);
                let t = f64::from(self.age) / f64::from(max_age);
                self.alpha = lifetime_alpha(t, self.max_alpha);
                if self.age >= max_age || self.y < -(self.size + AMBIENT_SPAWN_OFFSET) {
                    self.reset(false, ctx.bounds, ctx.palette, rng);
                }
            }
            EntityKind::FlowLine => {
                self.x += self.angle.cos() * self.speed;
                self.y += self.angle.sin() * self.speed;
                if self.x < -FLOW_LINE_MARGIN
                    || self.x > width + FLOW_LINE_MARGIN
                    || self.y < -FLOW_LINE_MARGIN
                    || self.y > height + FLOW_LINE_MARGIN
                {
                    self.reset(false, ctx.bounds, ctx.palette, rng);
                }
            }
            EntityKind::Node => {
                if let Some(pointer) = ctx.pointer {
                    let (fx, fy) = repulsion(
                        self.x - pointer.x,
                        self.y - pointer.y,
                        ctx.physics.repulsion_radius,
                        ctx.physics.repulsion_strength,
                    );
                    self.vx += fx;
                    self.vy += fy;
                }
                self.vx *= ctx.physics.damping;
                self.vy *= ctx.physics.damping;
                self.x = wrap(self.x + self.vx, width);
                self.y = wrap(self.y + self.vy, height);
            }
            EntityKind::Drift => {
                self.x += self.speed * 0.7;
                self.y -= self.speed * 0.5;
                if self.x > width + DRIFT_MARGIN || self.y < -DRIFT_MARGIN {
                    self.reset(false, ctx.bounds, ctx.palette, rng);
                }
            }
        }
    }

    /// Paint the current state. Never mutates the entity.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let color = self.color.with_alpha(self.alpha);
        match self.kind {
            EntityKind::FlowLine => surface.stroke_line(
                self.x,
                self.y,
                self.x + self.angle.cos() * self.size,
                self.y + self.angle.sin() * self.size,
                FLOW_LINE_WIDTH,
                color,
            ),
            EntityKind::Ambient | EntityKind::Node | EntityKind::Drift => {
                surface.fill_circle(self.x, self.y, self.size, color)
            }
        }
    }

    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// Fade-in / plateau / fade-out envelope over normalised lifetime `t`.
pub fn lifetime_alpha(t: f64, max_alpha: f64) -> f64 {
    let alpha = if t < 0.1 {
        t * 10.0 * max_alpha
    } else if t > 0.8 {
        (1.0 - t) * 5.0 * max_alpha
    } else {
        max_alpha
    };
    alpha.clamp(0.0, 1.0)
}

/// Velocity impulse pushing an entity away from the pointer.
///
/// `(dx, dy)` is the vector from the pointer to the entity. Outside
/// `radius` the impulse is exactly zero. An entity sitting on the pointer
/// is pushed along +x at full strength.
pub fn repulsion(dx: f64, dy: f64, radius: f64, strength: f64) -> (f64, f64) {
    let dist = dx.hypot(dy);
    if dist.is_nan() || radius.is_nan() || dist >= radius {
        return (0.0, 0.0);
    }
    let force = (radius - dist) / radius * strength;
    if dist == 0.0 {
        return (force, 0.0);
    }
    (dx / dist * force, dy / dist * force)
}

/// Wrap `value` into `[0, extent)`; a zero-length axis collapses to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_has_three_phases() {
        assert!((lifetime_alpha(0.05, 0.4) - 0.2).abs() < 1e-12);
        assert_eq!(lifetime_alpha(0.5, 0.4), 0.4);
        assert!((lifetime_alpha(0.9, 0.4) - 0.2).abs() < 1e-12);
        assert_eq!(lifetime_alpha(1.0, 0.4), 0.0);
    }

    #[test]
    fn wrap_handles_edges() {
        assert_eq!(wrap(-1.0, 10.0), 9.0);
        assert_eq!(wrap(10.0, 10.0), 0.0);
        assert_eq!(wrap(-1e-18, 10.0), 0.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(5.0, f64::NAN), 0.0);
        assert_eq!(wrap(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn repulsion_ignores_nan_distance() {
        assert_eq!(repulsion(f64::NAN, 0.0, 120.0, 0.8), (0.0, 0.0));
        assert_eq!(repulsion(1.0, 1.0, f64::NAN, 0.8), (0.0, 0.0));
    }
}

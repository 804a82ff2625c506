//! Canvas particle engine.
//!
//! One engine type drives every animated canvas on the page. What differs
//! between the hero, services and call-to-action canvases is data: which
//! entity kinds populate the pool, how many, the palette, and whether
//! pointer repulsion and proximity connectors are active.

pub mod connectors;
pub mod driver;
pub mod entity;
pub mod pointer;
pub mod surface;

use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

use connectors::{ConnectorStats, ConnectorStyle};
use entity::{Entity, EntityKind, StepContext};
use pointer::{Point, PointerTracker};
use surface::{Rgb, Surface};

/// Canvas size in pixels. Never negative, never NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

/// Forces acting on `Node` entities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    pub repulsion_radius: f64,
    /// Impulse applied at zero distance from the pointer.
    pub repulsion_strength: f64,
    /// Multiplicative velocity decay applied every frame.
    pub damping: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            repulsion_radius: 120.0,
            repulsion_strength: 0.8,
            damping: 0.98,
        }
    }
}

/// `count` entities of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    pub kind: EntityKind,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub populations: Vec<Population>,
    pub palette: Vec<Rgb>,
    #[serde(default)]
    pub physics: Physics,
    /// Proximity lines between `Node` entities; `None` disables them.
    #[serde(default)]
    pub connectors: Option<ConnectorStyle>,
}

impl EngineConfig {
    /// Hero background: rising particles plus slow data-flow lines.
    pub fn hero() -> Self {
        Self {
            populations: vec![
                Population {
                    kind: EntityKind::Ambient,
                    count: 80,
                },
                Population {
                    kind: EntityKind::FlowLine,
                    count: 25,
                },
            ],
            palette: vec![Rgb::VIOLET, Rgb::CYAN],
            physics: Physics::default(),
            connectors: None,
        }
    }

    /// Services section: pointer-reactive network.
    pub fn services() -> Self {
        Self {
            populations: vec![Population {
                kind: EntityKind::Node,
                count: 60,
            }],
            palette: vec![Rgb::VIOLET, Rgb::CYAN],
            physics: Physics::default(),
            connectors: Some(ConnectorStyle::default()),
        }
    }

    /// Call-to-action banner: diagonal drift.
    pub fn cta() -> Self {
        Self {
            populations: vec![Population {
                kind: EntityKind::Drift,
                count: 50,
            }],
            palette: vec![Rgb::VIOLET, Rgb::CYAN, Rgb::PINK],
            physics: Physics::default(),
            connectors: None,
        }
    }

    pub fn pool_size(&self) -> usize {
        self.populations.iter().map(|p| p.count).sum()
    }
}

/// What a single frame did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub entities: usize,
    pub connectors: Option<ConnectorStats>,
}

/// An entity pool plus everything needed to advance and draw it.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    bounds: Bounds,
    entities: Vec<Entity>,
    pointer: PointerTracker,
    rng: SmallRng,
}

impl Engine {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            bounds: Bounds::default(),
            entities: Vec::new(),
            pointer: PointerTracker::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Throw away the current pool and populate a fresh one for a canvas of
    /// the given size.
    pub fn rebuild(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
        let mut entities = Vec::with_capacity(self.config.pool_size());
        for population in &self.config.populations {
            for _ in 0..population.count {
                entities.push(Entity::spawn(
                    population.kind,
                    self.bounds,
                    &self.config.palette,
                    &mut self.rng,
                ));
            }
        }
        log::debug!(
            "rebuilt pool of {} entities for {}x{}",
            entities.len(),
            self.bounds.width,
            self.bounds.height
        );
        self.entities = entities;
    }

    /// Clear, draw connectors, then update and draw every entity.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear(self.bounds.width, self.bounds.height);

        let connectors = self.config.connectors.map(|style| {
            let nodes: Vec<Point> = self
                .entities
                .iter()
                .filter(|e| e.kind == EntityKind::Node)
                .map(Entity::position)
                .collect();
            connectors::draw_connectors(&nodes, &style, surface)
        });

        let ctx = StepContext {
            bounds: self.bounds,
            pointer: self.pointer.position(),
            physics: &self.config.physics,
            palette: &self.config.palette,
        };
        for entity in &mut self.entities {
            entity.update(&ctx, &mut self.rng);
            entity.draw(surface);
        }

        FrameStats {
            entities: self.entities.len(),
            connectors,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }
}

//! All game entity types: pure data, no logic.

use rand::Rng;

use crate::collision::Crash;
use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box stored as its minimum corner plus extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Box of the given size centred on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Logical controls sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plane {
    pub y: f32,
    /// Vertical velocity, positive = upward.
    pub velocity: f32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    /// Horizontal distance covered per tick.
    pub speed: f32,
    /// Vertical distance covered per tick (negative sinks).
    pub drift: f32,
}

// ── Background & hazards ──────────────────────────────────────────────────────

/// Cosmetic background cloud, centred on `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Enemy plane, centred on `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb::centered(self.x, self.y, self.width, self.height)
    }
}

// ── Session state ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Terminal: the session stays crashed for good.
    Crashed(Crash),
}

/// The entire simulation state for one session.  Owned by the frame loop and
/// mutated in place by the functions in `compute` and `collision`.
#[derive(Clone, Debug)]
pub struct World {
    pub plane: Plane,
    pub projectiles: Vec<Projectile>,
    pub clouds: Vec<Cloud>,
    pub enemies: Vec<Enemy>,
    /// Accumulates `enemy_spawn_increment` per enemy update.
    pub spawn_timer: u32,
    /// Fire state on the previous tick, for edge detection.
    pub fire_held: bool,
    pub status: GameStatus,
    pub tick: u64,
}

impl World {
    /// Fresh session: plane level at y = 0, no projectiles or enemies, and a
    /// full pool of randomly placed clouds.
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        World {
            plane: Plane::default(),
            projectiles: Vec::new(),
            clouds: crate::compute::init_clouds(config, rng),
            enemies: Vec::new(),
            spawn_timer: 0,
            fire_held: false,
            status: GameStatus::Playing,
            tick: 0,
        }
    }

    /// A world with nothing in it, for building scenarios by hand.
    pub fn empty() -> Self {
        World {
            plane: Plane::default(),
            projectiles: Vec::new(),
            clouds: Vec::new(),
            enemies: Vec::new(),
            spawn_timer: 0,
            fire_held: false,
            status: GameStatus::Playing,
            tick: 0,
        }
    }
}

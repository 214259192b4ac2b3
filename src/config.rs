//! Gameplay tunables.
//!
//! All positions and sizes are in normalized screen space, where both axes
//! span `[-1, 1]`.  Speeds are per tick.

use std::time::Duration;

use tracing::warn;
use tracing_subscriber::filter::EnvFilter;

/// Environment variable that pins the RNG seed so a session can be replayed.
pub const SEED_ENV: &str = "PLANE_GAME_SEED";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    // ── Plane ────────────────────────────────────────────────────────────────
    /// Fixed horizontal position of the plane (one third across the screen).
    pub plane_x: f32,
    pub plane_acceleration: f32,
    /// Fraction of velocity lost every tick.
    pub plane_friction: f32,
    pub plane_min_y: f32,
    pub plane_max_y: f32,
    /// Body half-extents used for collision.
    pub plane_half_width: f32,
    pub plane_half_height: f32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    /// Muzzle offset from `plane_x`.
    pub muzzle_offset: f32,
    pub projectile_speed: f32,
    pub projectile_drift: f32,
    pub projectile_half_size: f32,

    // ── Clouds ───────────────────────────────────────────────────────────────
    pub cloud_count: usize,
    pub cloud_scroll: f32,
    pub cloud_x_range: (f32, f32),
    pub cloud_y_range: (f32, f32),
    pub cloud_width_range: (f32, f32),
    pub cloud_height_range: (f32, f32),

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_speed: f32,
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_y_range: (f32, f32),
    /// Added to the spawn timer on every enemy update.
    pub enemy_spawn_increment: u32,
    /// Timer value at which an enemy spawns and the timer resets.
    pub enemy_spawn_threshold: u32,

    // ── World ────────────────────────────────────────────────────────────────
    pub left_bound: f32,
    pub right_bound: f32,
    /// Top of the ground strip; touching it is fatal.
    pub ground_y: f32,
    pub frame_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            plane_x: -0.66,
            plane_acceleration: 0.001,
            plane_friction: 0.02,
            plane_min_y: -0.9,
            plane_max_y: 1.0,
            plane_half_width: 0.05,
            plane_half_height: 0.025,

            muzzle_offset: 0.1,
            projectile_speed: 0.02,
            projectile_drift: -0.001,
            projectile_half_size: 0.01,

            cloud_count: 20,
            cloud_scroll: 0.01,
            cloud_x_range: (-1.0, 2.0),
            cloud_y_range: (-0.8, 1.0),
            cloud_width_range: (0.1, 0.3),
            cloud_height_range: (0.05, 0.15),

            enemy_speed: 0.01,
            enemy_width: 0.4,
            enemy_height: 0.2,
            enemy_y_range: (-0.8, 1.0),
            enemy_spawn_increment: 1,
            enemy_spawn_threshold: 100,

            left_bound: -1.0,
            right_bound: 1.0,
            ground_y: -0.9,
            frame_interval: Duration::from_millis(16), // ≈60 FPS
        }
    }
}

impl GameConfig {
    /// Number of enemy updates between two spawns, starting from a reset timer.
    pub fn spawn_interval_ticks(&self) -> u32 {
        if self.enemy_spawn_increment == 0 {
            return u32::MAX;
        }
        self.enemy_spawn_threshold.div_ceil(self.enemy_spawn_increment)
    }
}

/// Parse a seed value, logging and discarding anything that isn't a `u64`.
pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    match raw.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!(value = raw, error = %e, "ignoring invalid {SEED_ENV}");
            None
        }
    }
}

/// Seed from `PLANE_GAME_SEED`, falling back to OS entropy.
pub fn resolve_seed() -> u64 {
    let from_env = std::env::var(SEED_ENV).ok();
    parse_seed(from_env.as_deref()).unwrap_or_else(rand::random)
}

/// Log filter for a session, or `None` when nothing should be logged.
///
/// Logging is opt-in through `RUST_LOG`.  Stderr shares the screen with the
/// rendered frame when it is a terminal, so logs are only written when it has
/// been redirected.
pub fn log_filter(rust_log: Option<&str>, stderr_is_terminal: bool) -> Option<EnvFilter> {
    let directives = rust_log?.trim();
    if directives.is_empty() || stderr_is_terminal {
        return None;
    }
    EnvFilter::try_new(directives).ok()
}

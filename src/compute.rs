//! Pure game-logic functions.
//!
//! Every public function takes the current `World` by mutable reference plus
//! the session's `GameConfig` and, where needed, an RNG handle.  Side effects
//! are limited to the world and the injected RNG, so a seeded RNG replays a
//! session exactly.

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Cloud, Controls, Enemy, Projectile, World};

fn sample(rng: &mut impl Rng, (lo, hi): (f32, f32)) -> f32 {
    rng.gen_range(lo..hi)
}

// ── Kinematics ────────────────────────────────────────────────────────────────

/// Apply one tick of input, integration, friction and clamping to the plane.
pub fn update_plane(world: &mut World, controls: Controls, config: &GameConfig) {
    let plane = &mut world.plane;
    if controls.up {
        plane.velocity += config.plane_acceleration;
    }
    if controls.down {
        plane.velocity -= config.plane_acceleration;
    }

    plane.y += plane.velocity;
    plane.velocity *= 1.0 - config.plane_friction;

    plane.y = plane.y.clamp(config.plane_min_y, config.plane_max_y);
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Fire on the rising edge of the fire control only.  Returns `true` when a
/// projectile was launched this tick.
pub fn handle_fire(world: &mut World, fire: bool, config: &GameConfig) -> bool {
    let rising = fire && !world.fire_held;
    world.fire_held = fire;
    if !rising {
        return false;
    }

    world.projectiles.push(Projectile {
        x: config.plane_x + config.muzzle_offset,
        y: world.plane.y,
        speed: config.projectile_speed,
        drift: config.projectile_drift,
    });
    true
}

/// Move every projectile and drop the ones past the right edge.
pub fn update_projectiles(world: &mut World, config: &GameConfig) {
    for p in &mut world.projectiles {
        p.x += p.speed;
        p.y += p.drift;
    }
    world.projectiles.retain(|p| p.x <= config.right_bound);
}

// ── Clouds ────────────────────────────────────────────────────────────────────

/// Build the starting cloud pool.
pub fn init_clouds(config: &GameConfig, rng: &mut impl Rng) -> Vec<Cloud> {
    (0..config.cloud_count)
        .map(|_| Cloud {
            x: sample(rng, config.cloud_x_range),
            y: sample(rng, config.cloud_y_range),
            width: sample(rng, config.cloud_width_range),
            height: sample(rng, config.cloud_height_range),
        })
        .collect()
}

/// Scroll clouds left by `offset`, wrapping the ones that leave the screen
/// back to the right edge at a new height.  Size is kept.
pub fn update_clouds(world: &mut World, offset: f32, config: &GameConfig, rng: &mut impl Rng) {
    for cloud in &mut world.clouds {
        cloud.x -= offset;
        let half = cloud.width / 2.0;
        if cloud.x < config.left_bound - half {
            cloud.x = config.right_bound + half;
            cloud.y = sample(rng, config.cloud_y_range);
            debug!(y = cloud.y, "cloud recycled");
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Move enemies left, cull the ones fully off the left edge, then advance the
/// spawn timer and spawn at most one new enemy.  Returns `true` on a spawn.
pub fn update_enemies(world: &mut World, config: &GameConfig, rng: &mut impl Rng) -> bool {
    for enemy in &mut world.enemies {
        enemy.x -= config.enemy_speed;
    }
    world
        .enemies
        .retain(|e| e.x + e.width / 2.0 >= config.left_bound);

    world.spawn_timer = world
        .spawn_timer
        .saturating_add(config.enemy_spawn_increment);
    if world.spawn_timer < config.enemy_spawn_threshold {
        return false;
    }

    let enemy = Enemy {
        x: config.right_bound,
        y: sample(rng, config.enemy_y_range),
        width: config.enemy_width,
        height: config.enemy_height,
    };
    debug!(tick = world.tick, y = enemy.y, "enemy spawned");
    world.enemies.push(enemy);
    world.spawn_timer = 0;
    true
}

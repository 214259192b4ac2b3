//! Axis-aligned bounding-box collision.

use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Aabb, Projectile, World};

/// Strict overlap test: boxes that only share an edge do not collide.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

pub fn plane_bounds(world: &World, config: &GameConfig) -> Aabb {
    Aabb::centered(
        config.plane_x,
        world.plane.y,
        config.plane_half_width * 2.0,
        config.plane_half_height * 2.0,
    )
}

pub fn projectile_bounds(p: &Projectile, config: &GameConfig) -> Aabb {
    let size = config.projectile_half_size * 2.0;
    Aabb::centered(p.x, p.y, size, size)
}

/// What ended the session, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crash {
    Ground,
    /// Index into `World::enemies` of the enemy that was hit.
    Enemy(usize),
}

/// Fatal check: plane belly on the ground, or plane body overlapping any
/// enemy.  Ground wins when both apply.
pub fn check_fatal_collision(world: &World, config: &GameConfig) -> Option<Crash> {
    if world.plane.y - config.plane_half_height <= config.ground_y {
        return Some(Crash::Ground);
    }

    let plane = plane_bounds(world, config);
    world
        .enemies
        .iter()
        .position(|e| overlaps(&plane, &e.bounds()))
        .map(Crash::Enemy)
}

/// Resolve projectile ↔ enemy hits.
///
/// Each projectile, in insertion order, takes out the first enemy it overlaps
/// that hasn't already been hit this pass.  Both are then removed together,
/// so an enemy can never absorb two projectiles nor outlive its hit.
/// Returns the number of enemies destroyed.
pub fn resolve_projectile_hits(world: &mut World, config: &GameConfig) -> usize {
    let mut killed_enemies = vec![false; world.enemies.len()];
    let mut used_projectiles = vec![false; world.projectiles.len()];

    for (pi, projectile) in world.projectiles.iter().enumerate() {
        let shot = projectile_bounds(projectile, config);
        let target = world
            .enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed_enemies[*ei] && overlaps(&shot, &enemy.bounds()));
        if let Some((ei, enemy)) = target {
            debug!(x = enemy.x, y = enemy.y, "enemy shot down");
            killed_enemies[ei] = true;
            used_projectiles[pi] = true;
        }
    }

    let mut flags = killed_enemies.iter();
    world.enemies.retain(|_| !flags.next().copied().unwrap_or(false));
    let mut flags = used_projectiles.iter();
    world.projectiles.retain(|_| !flags.next().copied().unwrap_or(false));

    killed_enemies.iter().filter(|&&k| k).count()
}

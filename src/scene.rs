//! Scene drawing: translates a `World` into quad draw calls.
//!
//! No game logic here; every function only reads state and issues
//! `Renderer::fill_quad` calls.

use glam::{vec2, Vec2};

use crate::config::GameConfig;
use crate::entities::{Cloud, Enemy, Projectile, World};
use crate::platform::{Renderer, Rgb};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_SKY: Rgb = Rgb::new(0.53, 0.81, 0.98);
pub const C_GROUND: Rgb = Rgb::new(0.545, 0.271, 0.075);
pub const C_CLOUD: Rgb = Rgb::new(1.0, 1.0, 1.0);
pub const C_PLANE: Rgb = Rgb::new(1.0, 0.0, 0.0);
pub const C_PROJECTILE: Rgb = Rgb::new(1.0, 0.64, 0.0);
pub const C_ENEMY: Rgb = Rgb::new(0.3, 0.3, 0.3);

/// Axis-aligned quad from two opposite corners, counter-clockwise.
fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> [Vec2; 4] {
    [vec2(x0, y0), vec2(x1, y0), vec2(x1, y1), vec2(x0, y1)]
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Clear and draw one complete frame, back to front.
pub fn draw_world<R: Renderer>(r: &mut R, world: &World, config: &GameConfig) {
    r.clear(C_SKY);

    draw_ground(r, config);
    for cloud in &world.clouds {
        draw_cloud(r, cloud);
    }
    draw_plane(r, config.plane_x, world.plane.y);
    for projectile in &world.projectiles {
        draw_projectile(r, projectile, config.projectile_half_size);
    }
    for enemy in &world.enemies {
        draw_enemy(r, enemy);
    }
}

// ── Pieces ────────────────────────────────────────────────────────────────────

fn draw_ground<R: Renderer>(r: &mut R, config: &GameConfig) {
    r.fill_quad(
        C_GROUND,
        rect(config.left_bound, -1.0, config.right_bound, config.ground_y),
    );
}

fn draw_cloud<R: Renderer>(r: &mut R, cloud: &Cloud) {
    let hw = cloud.width / 2.0;
    let hh = cloud.height / 2.0;
    r.fill_quad(
        C_CLOUD,
        rect(cloud.x - hw, cloud.y - hh, cloud.x + hw, cloud.y + hh),
    );
}

/// Biplane facing right: fuselage, upper wing, lower wing, tail fin.
pub fn draw_plane<R: Renderer>(r: &mut R, x: f32, y: f32) {
    r.fill_quad(C_PLANE, rect(x - 0.05, y - 0.025, x + 0.1, y + 0.025));
    r.fill_quad(C_PLANE, rect(x + 0.02, y + 0.025, x + 0.06, y + 0.075));
    r.fill_quad(C_PLANE, rect(x + 0.02, y - 0.075, x + 0.06, y - 0.025));
    r.fill_quad(C_PLANE, rect(x - 0.1, y + 0.025, x - 0.05, y + 0.075));
}

fn draw_projectile<R: Renderer>(r: &mut R, p: &Projectile, half: f32) {
    r.fill_quad(C_PROJECTILE, rect(p.x - half, p.y - half, p.x + half, p.y + half));
}

/// Biplane facing left, tail fin at the back (right).
pub fn draw_enemy<R: Renderer>(r: &mut R, enemy: &Enemy) {
    let (x, y) = (enemy.x, enemy.y);
    r.fill_quad(C_ENEMY, rect(x - 0.2, y - 0.05, x + 0.1, y + 0.05));
    r.fill_quad(C_ENEMY, rect(x - 0.12, y + 0.05, x - 0.04, y + 0.15));
    r.fill_quad(C_ENEMY, rect(x - 0.12, y - 0.15, x - 0.04, y - 0.05));
    r.fill_quad(C_ENEMY, rect(x + 0.1, y + 0.05, x + 0.2, y + 0.15));
}

//! Frame orchestration.
//!
//! A `Session` owns the world, its tunables and the one RNG every random
//! decision draws from.  `step` advances the simulation by one tick;
//! `run_frame` wraps it with input polling, drawing and presentation in the
//! fixed order the game relies on.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::collision::{self, Crash};
use crate::compute;
use crate::config::GameConfig;
use crate::entities::{Controls, GameStatus, World};
use crate::error::GameError;
use crate::platform::{InputProvider, Key, Renderer};
use crate::scene;

/// Result of advancing the simulation by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Crashed(Crash),
}

/// Result of one full frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    CloseRequested,
    Crashed(Crash),
}

pub struct Session {
    pub world: World,
    pub config: GameConfig,
    rng: ChaCha8Rng,
}

impl Session {
    /// Start a session.  The same `seed` and inputs replay the same game.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = World::new(&config, &mut rng);
        info!(seed, clouds = world.clouds.len(), "session started");
        Self { world, config, rng }
    }

    /// Wrap a hand-built world.
    pub fn with_world(world: World, config: GameConfig, seed: u64) -> Self {
        Self {
            world,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Advance one tick.
    ///
    /// The fatal check runs on the enemy list as it stands after movement and
    /// spawning, before projectiles get a chance to clear it.  Once crashed,
    /// further calls change nothing and keep reporting the same crash.
    pub fn step(&mut self, controls: Controls) -> StepOutcome {
        if let GameStatus::Crashed(crash) = self.world.status {
            return StepOutcome::Crashed(crash);
        }
        let world = &mut self.world;
        let config = &self.config;
        world.tick += 1;

        // ── 1. Input → plane ────────────────────────────────────────────────
        compute::handle_fire(world, controls.fire, config);
        compute::update_plane(world, controls, config);

        // ── 2. Movers ───────────────────────────────────────────────────────
        compute::update_projectiles(world, config);
        compute::update_clouds(world, config.cloud_scroll, config, &mut self.rng);
        compute::update_enemies(world, config, &mut self.rng);

        // ── 3. Fatal collisions ─────────────────────────────────────────────
        if let Some(crash) = collision::check_fatal_collision(world, config) {
            info!(tick = world.tick, ?crash, "plane crashed");
            world.status = GameStatus::Crashed(crash);
            return StepOutcome::Crashed(crash);
        }

        // ── 4. Projectile hits ──────────────────────────────────────────────
        collision::resolve_projectile_hits(world, config);
        StepOutcome::Continue
    }

    /// One full frame: poll → simulate → draw → present.  A crash ends the
    /// frame before anything is drawn.
    pub fn run_frame<I, R>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
    ) -> Result<FrameOutcome, GameError>
    where
        I: InputProvider,
        R: Renderer,
    {
        input.poll();
        if input.is_pressed(Key::Close) {
            info!(tick = self.world.tick, "close requested");
            return Ok(FrameOutcome::CloseRequested);
        }

        let controls = Controls {
            up: input.is_pressed(Key::Up),
            down: input.is_pressed(Key::Down),
            fire: input.is_pressed(Key::Fire),
        };
        if let StepOutcome::Crashed(crash) = self.step(controls) {
            return Ok(FrameOutcome::Crashed(crash));
        }

        scene::draw_world(renderer, &self.world, &self.config);
        renderer.present()?;
        Ok(FrameOutcome::Continue)
    }
}

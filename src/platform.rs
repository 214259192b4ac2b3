//! Seams between the simulation and the outside world.
//!
//! The frame loop only talks to an `InputProvider` and a `Renderer`; the
//! terminal implementations live in `input` and `display`, and tests plug in
//! scripted fakes.

use glam::Vec2;

use crate::error::GameError;

/// Logical keys the game reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Fire,
    /// The user asked to close the game.
    Close,
}

/// Linear RGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// 8-bit channels, clamped.
    pub fn to_bytes(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

pub trait InputProvider {
    /// Drain pending events so `is_pressed` reflects the current frame.
    fn poll(&mut self);

    fn is_pressed(&self, key: Key) -> bool;
}

/// Immediate-mode 2D drawing in normalized coordinates.
pub trait Renderer {
    fn clear(&mut self, color: Rgb);

    /// Fill a convex quadrilateral given by its four corners in order.
    fn fill_quad(&mut self, color: Rgb, corners: [Vec2; 4]);

    /// Show the finished frame.
    fn present(&mut self) -> Result<(), GameError>;
}

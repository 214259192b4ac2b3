//! Rendering backend: all terminal output lives here.
//!
//! Quads are rasterised into an off-screen pixel buffer with two pixels per
//! character cell (upper half-block glyph, foreground = top pixel,
//! background = bottom pixel).  `present` then writes only the rows that
//! changed since the previous frame.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::{vec2, Vec2};

use crate::error::GameError;
use crate::platform::{Renderer, Rgb};

type Pixel = (u8, u8, u8);

const HALF_BLOCK: char = '▀';

// ── Pixel buffer ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![(0, 0, 0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    /// Pixel covering a point in normalized coordinates, if on screen.
    pub fn pixel_at(&self, p: Vec2) -> Option<Pixel> {
        let x = (p.x + 1.0) / 2.0 * self.width as f32;
        let y = (1.0 - p.y) / 2.0 * self.height as f32;
        if x < 0.0 || y < 0.0 || x >= self.width as f32 || y >= self.height as f32 {
            return None;
        }
        Some(self.pixel(x as usize, y as usize))
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_bytes());
    }

    /// Normalized coordinates of a pixel centre.
    fn centre(&self, x: usize, y: usize) -> Vec2 {
        vec2(
            (x as f32 + 0.5) / self.width as f32 * 2.0 - 1.0,
            1.0 - (y as f32 + 0.5) / self.height as f32 * 2.0,
        )
    }

    /// Fill every pixel whose centre lies inside the convex quad.  Either
    /// winding order is accepted.
    pub fn fill_quad(&mut self, color: Rgb, corners: [Vec2; 4]) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let min = corners.iter().copied().fold(Vec2::MAX, Vec2::min);
        let max = corners.iter().copied().fold(Vec2::MIN, Vec2::max);

        let w = self.width as f32;
        let h = self.height as f32;
        let to_col = |x: f32| ((x + 1.0) / 2.0 * w).clamp(0.0, w);
        let to_row = |y: f32| ((1.0 - y) / 2.0 * h).clamp(0.0, h);

        let x0 = to_col(min.x).floor() as usize;
        let x1 = to_col(max.x).ceil() as usize;
        let y0 = to_row(max.y).floor() as usize;
        let y1 = to_row(min.y).ceil() as usize;

        let rgb = color.to_bytes();
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                if inside_convex(&corners, self.centre(x, y)) {
                    self.pixels[y * self.width + x] = rgb;
                }
            }
        }
    }

    fn row_pair(&self, cell_row: usize) -> (&[Pixel], &[Pixel]) {
        let top = cell_row * 2 * self.width;
        let bottom = top + self.width;
        (
            &self.pixels[top..top + self.width],
            &self.pixels[bottom..bottom + self.width],
        )
    }
}

fn inside_convex(corners: &[Vec2; 4], p: Vec2) -> bool {
    let mut positive = false;
    let mut negative = false;
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        let side = (b - a).perp_dot(p - a);
        positive |= side > 0.0;
        negative |= side < 0.0;
        if positive && negative {
            return false;
        }
    }
    true
}

fn color_of((r, g, b): Pixel) -> Color {
    Color::Rgb { r, g, b }
}

// ── Terminal renderer ─────────────────────────────────────────────────────────

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    frame: Framebuffer,
    /// Last frame written to the terminal; `None` forces a full redraw.
    shown: Option<Framebuffer>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer covering a `cols` × `rows` character grid.
    pub fn new(out: W, cols: u16, rows: u16) -> Result<Self, GameError> {
        if cols == 0 || rows == 0 {
            return Err(GameError::Window(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("terminal too small ({cols}x{rows})"),
            )));
        }
        Ok(Self {
            out,
            cols,
            rows,
            frame: Framebuffer::new(cols as usize, rows as usize * 2),
            shown: None,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Adopt a new terminal size.  The next `present` redraws everything.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) == (self.cols, self.rows) || cols == 0 || rows == 0 {
            return;
        }
        tracing::debug!(cols, rows, "terminal resized");
        self.cols = cols;
        self.rows = rows;
        self.frame = Framebuffer::new(cols as usize, rows as usize * 2);
        self.shown = None;
    }

    fn write_row(&mut self, row: usize) -> io::Result<()> {
        let (top, bottom) = self.frame.row_pair(row);
        self.out.queue(cursor::MoveTo(0, row as u16))?;

        let mut current: Option<(Pixel, Pixel)> = None;
        let mut run = String::new();
        for (&t, &b) in top.iter().zip(bottom) {
            if current != Some((t, b)) {
                if !run.is_empty() {
                    self.out.queue(Print(&run))?;
                    run.clear();
                }
                self.out.queue(style::SetForegroundColor(color_of(t)))?;
                self.out.queue(style::SetBackgroundColor(color_of(b)))?;
                current = Some((t, b));
            }
            run.push(HALF_BLOCK);
        }
        if !run.is_empty() {
            self.out.queue(Print(&run))?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self, color: Rgb) {
        self.frame.clear(color);
    }

    fn fill_quad(&mut self, color: Rgb, corners: [Vec2; 4]) {
        self.frame.fill_quad(color, corners);
    }

    fn present(&mut self) -> Result<(), GameError> {
        if self.shown.is_none() {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        for row in 0..self.rows as usize {
            let unchanged = self
                .shown
                .as_ref()
                .is_some_and(|prev| prev.row_pair(row) == self.frame.row_pair(row));
            if !unchanged {
                self.write_row(row)?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        self.shown = Some(self.frame.clone());
        Ok(())
    }
}

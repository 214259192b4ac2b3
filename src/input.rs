//! Keyboard input from crossterm events.
//!
//! Input model: instead of acting on each key event individually, we record
//! the frame number of the last press/repeat event for every key.  A key
//! counts as held while that record is fresh (within `HOLD_WINDOW` frames)
//! or, on terminals that report releases, until its release event arrives.
//! Classic terminals only send presses (OS key-repeat shows as repeated
//! presses), so keys expire naturally shortly after the repeats stop.
//!
//! Fire gets a longer window than movement.  Firing is edge-triggered, so a
//! held key that drops out during the pause before OS repeat kicks in would
//! read as a second press and fire again.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::platform::{InputProvider, Key};

/// A key is "held" if its last press/repeat event arrived within this many
/// frames.  At 60 FPS this is ≈130 ms, longer than a typical OS repeat
/// interval once repeating has started.
pub const HOLD_WINDOW: u64 = 8;

/// Hold window for fire.  At 60 FPS this is ≈670 ms, enough to bridge the
/// initial repeat delay (typically 250 to 600 ms).
pub const FIRE_HOLD_WINDOW: u64 = 40;

fn hold_window(key: Key) -> u64 {
    match key {
        Key::Fire => FIRE_HOLD_WINDOW,
        _ => HOLD_WINDOW,
    }
}

/// Map a raw key to the game key it drives.
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Close),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Close),
        _ => None,
    }
}

pub struct Keyboard {
    rx: Receiver<Event>,
    /// Maps each held key to the frame it was last seen (press or repeat).
    key_frame: HashMap<Key, u64>,
    frame: u64,
    /// Close is sticky: once asked for, it stays asked for.
    close_requested: bool,
}

impl Keyboard {
    pub fn new(rx: Receiver<Event>) -> Self {
        Self {
            rx,
            key_frame: HashMap::new(),
            frame: 0,
            close_requested: false,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event else {
            return;
        };
        let Some(key) = map_key(code, modifiers) else {
            return;
        };
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if key == Key::Close {
                    self.close_requested = true;
                }
                self.key_frame.insert(key, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&key);
            }
        }
    }
}

impl InputProvider for Keyboard {
    fn poll(&mut self) {
        self.frame += 1;
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.handle_event(event),
                Err(TryRecvError::Empty) => break,
                // Reader thread is gone; nothing more will ever arrive.
                Err(TryRecvError::Disconnected) => {
                    if !self.close_requested {
                        warn!("input channel closed, ending session");
                    }
                    self.close_requested = true;
                    break;
                }
            }
        }
    }

    fn is_pressed(&self, key: Key) -> bool {
        if key == Key::Close {
            return self.close_requested;
        }
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= hold_window(key))
            .unwrap_or(false)
    }
}

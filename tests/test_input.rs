use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use plane_game::config::GameConfig;
use plane_game::entities::{Controls, World};
use plane_game::frame::Session;
use plane_game::input::{map_key, Keyboard, FIRE_HOLD_WINDOW, HOLD_WINDOW};
use plane_game::platform::{InputProvider, Key};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

fn controls(kb: &Keyboard) -> Controls {
    Controls {
        up: kb.is_pressed(Key::Up),
        down: kb.is_pressed(Key::Down),
        fire: kb.is_pressed(Key::Fire),
    }
}

/// Feed one frame of keyboard state into the session.
fn frame(kb: &mut Keyboard, session: &mut Session) {
    kb.poll();
    session.step(controls(kb));
}

fn empty_session() -> Session {
    Session::with_world(World::empty(), GameConfig::default(), 42)
}

// ── Mapping and hold window ───────────────────────────────────────────────────

#[test]
fn key_mapping() {
    assert_eq!(map_key(KeyCode::Up, KeyModifiers::NONE), Some(Key::Up));
    assert_eq!(map_key(KeyCode::Char('s'), KeyModifiers::NONE), Some(Key::Down));
    assert_eq!(map_key(KeyCode::Char(' '), KeyModifiers::NONE), Some(Key::Fire));
    assert_eq!(map_key(KeyCode::Esc, KeyModifiers::NONE), Some(Key::Close));
    assert_eq!(map_key(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Key::Close));
    assert_eq!(map_key(KeyCode::Char('c'), KeyModifiers::NONE), None);
}

#[test]
fn pressed_key_expires_after_hold_window() {
    let (tx, rx) = mpsc::channel();
    let mut kb = Keyboard::new(rx);
    tx.send(key(KeyCode::Up, KeyEventKind::Press)).unwrap();
    kb.poll();
    assert!(kb.is_pressed(Key::Up));
    assert!(!kb.is_pressed(Key::Down));

    for _ in 0..HOLD_WINDOW {
        kb.poll();
    }
    assert!(kb.is_pressed(Key::Up));
    kb.poll();
    assert!(!kb.is_pressed(Key::Up));
}

#[test]
fn repeats_keep_key_held_and_release_drops_it() {
    let (tx, rx) = mpsc::channel();
    let mut kb = Keyboard::new(rx);
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    kb.poll();
    for _ in 0..3 * HOLD_WINDOW {
        tx.send(key(KeyCode::Char(' '), KeyEventKind::Repeat)).unwrap();
        kb.poll();
        assert!(kb.is_pressed(Key::Fire));
    }
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Release)).unwrap();
    kb.poll();
    assert!(!kb.is_pressed(Key::Fire));
}

#[test]
fn fire_expires_after_its_own_window() {
    let (tx, rx) = mpsc::channel();
    let mut kb = Keyboard::new(rx);
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    kb.poll();

    for _ in 0..FIRE_HOLD_WINDOW {
        kb.poll();
    }
    assert!(kb.is_pressed(Key::Fire));
    kb.poll();
    assert!(!kb.is_pressed(Key::Fire));
}

// ── Fire through the session ──────────────────────────────────────────────────

/// A classic terminal sends one press, goes quiet for the OS repeat delay,
/// then sends a stream of presses.  That is still one held key.
#[test]
fn held_fire_through_repeat_delay_fires_once() {
    let (tx, rx) = mpsc::channel();
    let mut kb = Keyboard::new(rx);
    let mut session = empty_session();

    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    frame(&mut kb, &mut session);
    for _ in 0..30 {
        frame(&mut kb, &mut session);
    }
    for i in 0..30 {
        if i % 2 == 0 {
            let kind = if i % 4 == 0 {
                KeyEventKind::Press
            } else {
                KeyEventKind::Repeat
            };
            tx.send(key(KeyCode::Char(' '), kind)).unwrap();
        }
        frame(&mut kb, &mut session);
    }

    assert_eq!(session.world.tick, 61);
    assert_eq!(session.world.projectiles.len(), 1);
}

#[test]
fn separate_taps_fire_twice() {
    let (tx, rx) = mpsc::channel();
    let mut kb = Keyboard::new(rx);
    let mut session = empty_session();

    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    for _ in 0..=FIRE_HOLD_WINDOW + 1 {
        frame(&mut kb, &mut session);
    }
    assert_eq!(session.world.projectiles.len(), 1);
    assert!(!kb.is_pressed(Key::Fire));

    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    frame(&mut kb, &mut session);
    assert_eq!(session.world.projectiles.len(), 2);
}

#[test]
fn release_then_press_fires_again() {
    let (tx, rx) = mpsc::channel();
    let mut kb = Keyboard::new(rx);
    let mut session = empty_session();

    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    frame(&mut kb, &mut session);
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Release)).unwrap();
    frame(&mut kb, &mut session);
    tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
    frame(&mut kb, &mut session);

    assert_eq!(session.world.projectiles.len(), 2);
}

// ── Close ─────────────────────────────────────────────────────────────────────

#[test]
fn close_is_sticky() {
    let (tx, rx) = mpsc::channel();
    let mut kb = Keyboard::new(rx);
    tx.send(key(KeyCode::Char('q'), KeyEventKind::Press)).unwrap();
    kb.poll();
    tx.send(key(KeyCode::Char('q'), KeyEventKind::Release)).unwrap();
    for _ in 0..2 * HOLD_WINDOW {
        kb.poll();
    }
    assert!(kb.is_pressed(Key::Close));
}

#[test]
fn lost_input_channel_requests_close() {
    let (tx, rx) = mpsc::channel::<Event>();
    let mut kb = Keyboard::new(rx);
    kb.poll();
    assert!(!kb.is_pressed(Key::Close));
    drop(tx);
    kb.poll();
    assert!(kb.is_pressed(Key::Close));
}

use plane_game::config::{log_filter, parse_seed, GameConfig};
use plane_game::entities::*;
use plane_game::error::GameError;
use plane_game::platform::Rgb;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn centered_box_has_min_corner() {
    let b = Aabb::centered(0.5, 0.5, 0.4, 0.2);
    assert!((b.x - 0.3).abs() < 1e-6);
    assert!((b.y - 0.4).abs() < 1e-6);
    assert_eq!(b.width, 0.4);
    assert_eq!(b.height, 0.2);
}

#[test]
fn enemy_bounds_are_centered() {
    let e = Enemy { x: 0.0, y: 0.0, width: 0.4, height: 0.2 };
    assert_eq!(e.bounds(), Aabb::new(-0.2, -0.1, 0.4, 0.2));
}

#[test]
fn new_world_starting_state() {
    let config = GameConfig::default();
    let w = World::new(&config, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(w.plane, Plane { y: 0.0, velocity: 0.0 });
    assert_eq!(w.clouds.len(), config.cloud_count);
    assert!(w.projectiles.is_empty());
    assert!(w.enemies.is_empty());
    assert_eq!(w.spawn_timer, 0);
    assert_eq!(w.status, GameStatus::Playing);
    assert_eq!(w.tick, 0);
}

#[test]
fn world_clone_is_independent() {
    let original = World::empty();
    let mut copy = original.clone();
    copy.plane.y = 0.7;
    copy.enemies.push(Enemy { x: 1.0, y: 0.0, width: 0.4, height: 0.2 });
    assert_eq!(original.plane.y, 0.0);
    assert!(original.enemies.is_empty());
}

#[test]
fn rgb_quantises_and_clamps() {
    assert_eq!(Rgb::new(1.0, 0.0, 0.5).to_bytes(), (255, 0, 128));
    assert_eq!(Rgb::new(2.0, -1.0, 0.0).to_bytes(), (255, 0, 0));
}

#[test]
fn startup_failures_have_distinct_exit_codes() {
    let io = || std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let codes = [
        GameError::Io(io()).exit_code(),
        GameError::Init(io()).exit_code(),
        GameError::Window(io()).exit_code(),
    ];
    assert!(codes.iter().all(|&c| c != 0));
    assert_ne!(codes[1], codes[2]);
}

#[test]
fn seed_parsing() {
    assert_eq!(parse_seed(Some("1234")), Some(1234));
    assert_eq!(parse_seed(Some(" 7 ")), Some(7));
    assert_eq!(parse_seed(Some("abc")), None);
    assert_eq!(parse_seed(None), None);
}

#[test]
fn logging_needs_rust_log_and_redirected_stderr() {
    assert!(log_filter(None, false).is_none());
    assert!(log_filter(Some("  "), false).is_none());
    assert!(log_filter(Some("debug"), true).is_none());

    assert!(log_filter(Some("plane_game=debug"), false).is_some());
}

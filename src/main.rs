use std::io::{self, stdout, BufWriter, IsTerminal, Stdout, Write};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{error, info};

use plane_game::config::{log_filter, resolve_seed, GameConfig};
use plane_game::display::TerminalRenderer;
use plane_game::error::GameError;
use plane_game::frame::{FrameOutcome, Session};
use plane_game::input::Keyboard;

type Out = BufWriter<Stdout>;

// ── Terminal lifecycle ────────────────────────────────────────────────────────

/// Everything that has to be undone on the way out, whatever happens.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn acquire(out: &mut Out) -> Result<Self, GameError> {
        terminal::enable_raw_mode().map_err(GameError::Init)?;
        let mut guard = TerminalGuard {
            keyboard_enhanced: false,
        };

        out.execute(terminal::EnterAlternateScreen)
            .map_err(GameError::Window)?;
        out.execute(cursor::Hide).map_err(GameError::Window)?;

        // Request key-release (and key-repeat) events from the terminal.
        // Kitty-protocol terminals support this; others fall back gracefully.
        guard.keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Dedicate a thread to blocking event reads, forwarding them through a
/// channel so the frame loop never blocks on input.
fn spawn_event_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!(error = %e, "event reader stopped");
                break;
            }
        }
    });
    rx
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop(
    session: &mut Session,
    keyboard: &mut Keyboard,
    renderer: &mut TerminalRenderer<Out>,
) -> Result<FrameOutcome, GameError> {
    let frame_interval: Duration = session.config.frame_interval;
    loop {
        let frame_start = Instant::now();

        if let Ok((cols, rows)) = terminal::size() {
            renderer.resize(cols, rows);
        }

        match session.run_frame(keyboard, renderer)? {
            FrameOutcome::Continue => {}
            outcome => return Ok(outcome),
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            thread::sleep(frame_interval - elapsed);
        }
    }
}

fn run() -> Result<FrameOutcome, GameError> {
    let mut out = BufWriter::new(stdout());
    let guard = TerminalGuard::acquire(&mut out)?;

    let (cols, rows) = terminal::size().map_err(GameError::Window)?;
    let mut renderer = TerminalRenderer::new(out, cols, rows)?;
    let mut keyboard = Keyboard::new(spawn_event_reader());
    let mut session = Session::new(GameConfig::default(), resolve_seed());

    let outcome = game_loop(&mut session, &mut keyboard, &mut renderer);
    info!(ticks = session.world.tick, ?outcome, "session ended");
    drop(guard);
    outcome
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let rust_log = std::env::var("RUST_LOG").ok();
    let stderr_is_terminal = io::stderr().is_terminal();
    match log_filter(rust_log.as_deref(), stderr_is_terminal) {
        Some(filter) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_ansi(false)
            .init(),
        // Still on the normal screen, so this cannot tear a frame.
        None if rust_log.is_some() && stderr_is_terminal => {
            eprintln!("RUST_LOG ignored: redirect stderr to capture logs (2>game.log)");
        }
        None => {}
    }

    match run() {
        Ok(FrameOutcome::Crashed(_)) => {
            println!("Game Over!");
            let _ = stdout().flush();
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

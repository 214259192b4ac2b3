use std::io;

use thiserror::Error;

/// Failures the game can report.  The first two only happen at startup,
/// before any simulation state exists.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to initialize the terminal: {0}")]
    Init(#[source] io::Error),

    #[error("failed to create the game window: {0}")]
    Window(#[source] io::Error),

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GameError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            GameError::Io(_) => 1,
            GameError::Init(_) => 2,
            GameError::Window(_) => 3,
        }
    }
}

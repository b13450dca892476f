//! Error types for the sequence library.

use thiserror::Error;

/// Failures surfaced by cursors and the handles built on top of them.
///
/// Short or empty inputs are never errors here; they simply produce fewer
/// elements. These variants cover resource misuse and the operating system
/// refusing a worker thread.
#[derive(Debug, Error)]
pub enum Error {
    /// The worker thread backing a bridge could not be started.
    #[error("failed to spawn bridge worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// A cursor or broadcast handle was read after it was released.
    #[error("cursor was advanced after release")]
    CursorReleased,

    /// A group was read after the outer grouping moved past it.
    #[error("group was read after the outer sequence advanced past it")]
    GroupExpired,
}

/// Result type for fallible cursor operations.
pub type Result<T> = std::result::Result<T, Error>;

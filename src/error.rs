//! Crate error type
//!
//! Degenerate geometry (parallel segments, zero-length vectors, zero-mass
//! bodies) is never an error: those cases have defined results. Errors are
//! reserved for malformed construction data and misuse of the tile engine.

use thiserror::Error;

/// Errors surfaced by the engine core. All are synchronous and local to the
/// failing call; the core never retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Construction-time rejection of malformed input (matrix rows of the
    /// wrong shape, insufficient vector data, inverted arc radii, a grid
    /// whose extents disagree with its declared dimensions).
    #[error("invalid {what}: {reason}")]
    Validation {
        what: &'static str,
        reason: String,
    },

    /// `TileMap::render` was called with no draw callback configured.
    /// Raised on every such call; rendering without a draw strategy is a
    /// programming error, not a recoverable condition.
    #[error("tile map render called with no draw callback configured")]
    MissingCallback,

    /// A cell access referenced a column/row outside the grid.
    #[error("tile index ({col}, {row}) is outside the {cols}x{rows} grid")]
    IndexOutOfBounds {
        col: i64,
        row: i64,
        cols: u32,
        rows: u32,
    },
}

impl Error {
    pub(crate) fn validation(what: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            what,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

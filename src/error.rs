//! Fatal error kinds that callers may want to tell apart.
//!
//! Everything else travels as a plain `anyhow::Error` with context attached.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BingoError {
    /// The song pool can't fill a single card.
    #[error("Need at least {required} songs to sample a card, but only {found} were loaded")]
    NotEnoughSongs { found: usize, required: usize },

    /// Single-file PDF mode was selected without an output path.
    #[error("--out is required when converting a single HTML file")]
    MissingOutput,
}

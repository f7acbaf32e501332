//! Error kinds surfaced by the reliability engine.
//!
//! These map directly onto the three failure modes the engine recognizes:
//! malformed input, a frontier that outgrows the 64-component asterisk mask,
//! and a source vertex the edge order never touches. Everything else is an
//! internal-consistency bug, not a caller-facing error, and is caught with
//! `debug_assert!` instead.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// `edges`/`pi`/`sources` don't agree with each other or with `n`.
    #[error("malformed input: {0}")]
    InputShape(String),

    /// Some frontier grew past the 64 simultaneously-live components the
    /// asterisk bitmask can track.
    #[error("frontier at level {level} has {size} components, exceeding the 64-component limit")]
    FrontierOverflow { level: usize, size: usize },

    /// A source vertex is never touched by any edge in the given order.
    #[error("source vertex {0} is never touched by any edge")]
    SourceUntouched(u32),
}

use thiserror::Error;

/// Errors raised by the terminal puzzle engine.
///
/// Only configuration errors prevent a session from being built. Everything
/// else is recovered where it happens and leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("selection index {index} is out of range (selection has {len} words)")]
    InvalidIndex { index: usize, len: usize },
    #[error("cannot spell negative number {0}")]
    InvalidNumber(i64),
    #[error("number {0} is beyond the thousands scale")]
    BeyondCoverage(i64),
    #[error("decoy pool exhausted: requested {requested}, only {available} usable")]
    EmptyPool { requested: usize, available: usize },
    #[error("no tile with id {0}")]
    UnknownTile(u32),
    #[error("tile {0} is already part of the answer")]
    TileAlreadyPicked(u32),
    #[error("no pick with id {0}")]
    UnknownPick(u32),
    #[error("'{0}' is not a numeral word")]
    UnknownWord(String),
    #[error("'{0}' is not how that number is spelled")]
    NotCanonical(String),
    #[error("terminal controls are disabled")]
    ControlsDisabled,
    #[error("invalid terminal config: {0}")]
    InvalidConfig(String),
}

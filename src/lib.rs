//! Game logic for a top-down dungeon crawler's hacking terminals.
//!
//! The terminal puzzle shows a number and a shuffled set of word tiles; the
//! player rebuilds the number's spelling, in French or English, before the
//! timer runs out. [`puzzle::PuzzleSession`] owns one terminal's lifecycle,
//! [`words`] does the spelling, and [`overworld`] holds the player controller
//! and dungeon entrance that lead there.

pub mod error;
pub mod overworld;
pub mod puzzle;
pub mod rng;
pub mod words;

pub use error::PuzzleError;

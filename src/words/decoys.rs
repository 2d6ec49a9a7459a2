//! Building the shuffled tile set shown to the player.

use std::fmt;

use tracing::debug;

use crate::error::PuzzleError;
use crate::rng::GameRng;

/// Stable identifier of a word tile within one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub word: String,
    pub decoy: bool,
}

/// Canonical words and decoys in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateWordSet {
    tiles: Vec<Tile>,
}

impl CandidateWordSet {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tiles.iter().map(|t| t.word.as_str())
    }
}

/// Mixes the canonical words with up to `decoy_count` decoys from `pool`.
///
/// Pool words that already appear in the canonical sequence are never used,
/// so every decoy tile is unambiguously wrong. A pool too small for the
/// request yields fewer decoys rather than an error.
pub fn generate<S: AsRef<str>>(
    canonical: &[S],
    pool: &[S],
    decoy_count: usize,
    rng: &mut GameRng,
) -> CandidateWordSet {
    let mut usable: Vec<&str> = Vec::with_capacity(pool.len());
    for word in pool.iter().map(AsRef::as_ref) {
        let collides = canonical.iter().any(|c| c.as_ref() == word);
        if !collides && !word.is_empty() && !usable.contains(&word) {
            usable.push(word);
        }
    }

    if usable.len() < decoy_count {
        let shortfall = PuzzleError::EmptyPool {
            requested: decoy_count,
            available: usable.len(),
        };
        debug!(error = %shortfall, "decoy_pool_short");
    }

    rng.shuffle(&mut usable);
    usable.truncate(decoy_count);

    let mut words: Vec<(&str, bool)> = canonical
        .iter()
        .map(|w| (w.as_ref(), false))
        .chain(usable.into_iter().map(|w| (w, true)))
        .collect();
    rng.shuffle(&mut words);

    let tiles = words
        .into_iter()
        .enumerate()
        .map(|(i, (word, decoy))| Tile {
            id: TileId(i as u32),
            word: word.to_string(),
            decoy,
        })
        .collect();

    CandidateWordSet { tiles }
}

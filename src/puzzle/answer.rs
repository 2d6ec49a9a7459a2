use std::fmt;

use crate::error::PuzzleError;
use crate::words::{Tile, TileId};

/// Stable identifier of one pick, valid until that pick is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickId(pub u32);

impl fmt::Display for PickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub id: PickId,
    pub tile: TileId,
    pub word: String,
}

/// The player's answer so far, in pick order.
///
/// Positions shift down when an earlier pick is removed, so anything holding
/// an index must re-read it afterwards. Pick ids do not move.
#[derive(Debug, Default, Clone)]
pub struct AnswerTracker {
    picks: Vec<Pick>,
    next_id: u32,
}

impl AnswerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick(&mut self, tile: &Tile) -> PickId {
        let id = PickId(self.next_id);
        self.next_id += 1;
        self.picks.push(Pick {
            id,
            tile: tile.id,
            word: tile.word.clone(),
        });
        id
    }

    pub fn unpick(&mut self, index: usize) -> Result<Pick, PuzzleError> {
        if index >= self.picks.len() {
            return Err(PuzzleError::InvalidIndex {
                index,
                len: self.picks.len(),
            });
        }
        Ok(self.picks.remove(index))
    }

    pub fn unpick_id(&mut self, id: PickId) -> Result<Pick, PuzzleError> {
        let index = self
            .position(id)
            .ok_or(PuzzleError::UnknownPick(id.0))?;
        Ok(self.picks.remove(index))
    }

    pub fn position(&self, id: PickId) -> Option<usize> {
        self.picks.iter().position(|p| p.id == id)
    }

    pub fn contains_tile(&self, tile: TileId) -> bool {
        self.picks.iter().any(|p| p.tile == tile)
    }

    pub fn current(&self) -> Vec<&str> {
        self.picks.iter().map(|p| p.word.as_str()).collect()
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn matches<S: AsRef<str>>(&self, expected: &[S]) -> bool {
        compare_sequences(&self.current(), expected)
    }
}

/// Same length and the same word at every position.
pub fn compare_sequences<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.as_ref() == y.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: u32, word: &str) -> Tile {
        Tile {
            id: TileId(id),
            word: word.to_string(),
            decoy: false,
        }
    }

    #[test]
    fn compare_sequences_is_positional() {
        let empty: [&str; 0] = [];
        assert!(compare_sequences(&empty, &empty));
        assert!(compare_sequences(&["vingt", "et", "un"], &["vingt", "et", "un"]));
        assert!(!compare_sequences(&["et", "vingt", "un"], &["vingt", "et", "un"]));
        assert!(!compare_sequences(&["vingt", "et"], &["vingt", "et", "un"]));
        assert!(!compare_sequences(&["vingt", "et", "un"], &["vingt", "et"]));
        assert!(!compare_sequences(&empty, &["zéro"]));
    }

    #[test]
    fn unpick_shifts_later_positions() {
        let mut tracker = AnswerTracker::new();
        tracker.pick(&tile(0, "mille"));
        let second = tracker.pick(&tile(1, "huit"));
        let third = tracker.pick(&tile(2, "cent"));

        let removed = tracker.unpick(0).unwrap();
        assert_eq!(removed.word, "mille");
        assert_eq!(tracker.current(), vec!["huit", "cent"]);
        assert_eq!(tracker.position(second), Some(0));
        assert_eq!(tracker.position(third), Some(1));
        assert!(!tracker.contains_tile(TileId(0)));
    }

    #[test]
    fn unpick_out_of_range_leaves_answer_alone() {
        let mut tracker = AnswerTracker::new();
        tracker.pick(&tile(0, "deux"));
        assert_eq!(
            tracker.unpick(1),
            Err(PuzzleError::InvalidIndex { index: 1, len: 1 })
        );
        assert_eq!(tracker.current(), vec!["deux"]);
    }

    #[test]
    fn duplicate_words_stay_distinct_by_id() {
        let mut tracker = AnswerTracker::new();
        let first = tracker.pick(&tile(3, "quatre"));
        let second = tracker.pick(&tile(7, "quatre"));

        let removed = tracker.unpick_id(second).unwrap();
        assert_eq!(removed.tile, TileId(7));
        assert!(tracker.contains_tile(TileId(3)));
        assert_eq!(tracker.position(first), Some(0));
        assert_eq!(tracker.unpick_id(second), Err(PuzzleError::UnknownPick(1)));
    }

    #[test]
    fn matches_after_clear_and_repick() {
        let mut tracker = AnswerTracker::new();
        tracker.pick(&tile(0, "one"));
        tracker.clear();
        assert!(tracker.is_empty());
        tracker.pick(&tile(1, "twenty"));
        tracker.pick(&tile(0, "one"));
        assert!(tracker.matches(&["twenty", "one"]));
        assert!(!tracker.matches(&["one", "twenty"]));
    }
}

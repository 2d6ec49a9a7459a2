pub mod convert;
pub mod decoys;

use std::ops::Deref;

use serde::Deserialize;

pub use convert::{convert, parse, spell, MAX_SPELLABLE};
pub use decoys::{generate, CandidateWordSet, Tile, TileId};

/// Language used to spell the terminal's number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "fr")]
    French,
    #[serde(alias = "en")]
    English,
}

const FRENCH_DECOYS: &[&str] = &[
    "zéro",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "quatre-vingt",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "million",
    "milliard",
];

const ENGLISH_DECOYS: &[&str] = &[
    "zero", "twenty", "thirty", "forty", "fifty", "sixty", "eighty", "eleven", "twelve",
    "thirteen", "fourteen", "fifteen", "sixteen", "million", "billion",
];

impl Locale {
    pub fn default_decoys(self) -> Vec<String> {
        let pool = match self {
            Locale::French => FRENCH_DECOYS,
            Locale::English => ENGLISH_DECOYS,
        };
        pool.iter().map(|w| w.to_string()).collect()
    }
}

/// Canonical ordered words of a number in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordSequence(Vec<String>);

impl WordSequence {
    /// Splits a spelled phrase on spaces and hyphens, dropping empty pieces.
    pub fn from_phrase(phrase: &str) -> Self {
        Self(
            phrase
                .split([' ', '-'])
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|t| t == word)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for WordSequence {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

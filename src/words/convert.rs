//! Spelling numbers out as words, and reading them back.
//!
//! Both locales work band by band: thousands, hundreds, then the tens and
//! units remainder. Bands with value zero are skipped, so only zero itself
//! is ever spelled "zéro" / "zero".

use crate::error::PuzzleError;

use super::{Locale, WordSequence};

/// Largest number either locale can spell without a "million" scale word.
pub const MAX_SPELLABLE: i64 = 999_999;

const FRENCH_UNITS: [&str; 20] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit", "dix-neuf",
];

const FRENCH_TENS: [&str; 10] = [
    "",
    "",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante-dix",
    "quatre-vingt",
    "quatre-vingt-dix",
];

const ENGLISH_UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const ENGLISH_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Canonical word tokens for `number` in `locale`.
pub fn convert(number: i64, locale: Locale) -> Result<WordSequence, PuzzleError> {
    spell(number, locale).map(|phrase| WordSequence::from_phrase(&phrase))
}

/// The number written out as a phrase. French keeps its hyphens.
pub fn spell(number: i64, locale: Locale) -> Result<String, PuzzleError> {
    if number < 0 {
        return Err(PuzzleError::InvalidNumber(number));
    }
    if number > MAX_SPELLABLE {
        return Err(PuzzleError::BeyondCoverage(number));
    }
    let number = number as u32;
    Ok(match locale {
        Locale::French => spell_french(number),
        Locale::English => spell_english(number),
    })
}

fn spell_french(number: u32) -> String {
    if number == 0 {
        return "zéro".to_string();
    }

    let mut parts = Vec::new();
    let mut rest = number;

    let thousands = rest / 1000;
    if thousands > 0 {
        if thousands == 1 {
            parts.push("mille".to_string());
        } else {
            parts.push(format!("{} mille", spell_french(thousands)));
        }
        rest %= 1000;
    }

    let hundreds = rest / 100;
    if hundreds > 0 {
        if hundreds == 1 {
            parts.push("cent".to_string());
        } else {
            parts.push(format!("{} cent", FRENCH_UNITS[hundreds as usize]));
        }
        rest %= 100;
    }

    if rest > 0 {
        parts.push(french_below_hundred(rest as usize));
    }

    parts.join(" ")
}

fn french_below_hundred(n: usize) -> String {
    if n < 20 {
        return FRENCH_UNITS[n].to_string();
    }

    let (ten, unit) = (n / 10, n % 10);
    match ten {
        // 70-79 and 90-99 continue counting past ten on top of 60 and 80.
        7 | 9 => {
            let stem = if ten == 7 { "soixante" } else { "quatre-vingt" };
            match unit {
                0 => format!("{stem}-dix"),
                1 if ten == 7 => "soixante-et-onze".to_string(),
                _ => format!("{stem}-{}", FRENCH_UNITS[10 + unit]),
            }
        }
        _ => {
            let decade = FRENCH_TENS[ten];
            match unit {
                0 => decade.to_string(),
                1 if (2..=6).contains(&ten) => format!("{decade}-et-un"),
                _ => format!("{decade}-{}", FRENCH_UNITS[unit]),
            }
        }
    }
}

// "and" only ever precedes the tens/units remainder, never a bare hundreds
// band: 1100 is "one thousand one hundred".
fn spell_english(number: u32) -> String {
    if number == 0 {
        return "zero".to_string();
    }

    let mut parts = Vec::new();
    let mut rest = number;

    if rest / 1000 > 0 {
        parts.push(format!("{} thousand", spell_english(rest / 1000)));
        rest %= 1000;
    }

    if rest / 100 > 0 {
        parts.push(format!("{} hundred", spell_english(rest / 100)));
        rest %= 100;
    }

    if rest > 0 {
        if !parts.is_empty() {
            parts.push("and".to_string());
        }
        let rest = rest as usize;
        if rest < 20 {
            parts.push(ENGLISH_UNITS[rest].to_string());
        } else {
            parts.push(ENGLISH_TENS[rest / 10].to_string());
            if rest % 10 > 0 {
                parts.push(ENGLISH_UNITS[rest % 10].to_string());
            }
        }
    }

    parts.join(" ")
}

/// Reads a canonical token sequence back into its number.
///
/// Only the exact sequence [`convert`] produces is accepted. Anything else,
/// including valid numeral words in a non-canonical order, is rejected.
pub fn parse<S: AsRef<str>>(tokens: &[S], locale: Locale) -> Result<u64, PuzzleError> {
    if tokens.is_empty() {
        return Err(PuzzleError::UnknownWord(String::new()));
    }

    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut previous: Option<&str> = None;

    for token in tokens {
        let token = token.as_ref();
        match (locale, token) {
            (Locale::French, "et") | (Locale::English, "and") => {}
            (Locale::French, "mille") | (Locale::English, "thousand") => {
                total = current
                    .max(1)
                    .checked_mul(1000)
                    .and_then(|band| total.checked_add(band))
                    .ok_or(PuzzleError::BeyondCoverage(i64::MAX))?;
                current = 0;
            }
            (Locale::French, "cent") | (Locale::English, "hundred") => {
                current = current
                    .max(1)
                    .checked_mul(100)
                    .ok_or(PuzzleError::BeyondCoverage(i64::MAX))?;
            }
            // "quatre vingt": the four already counted becomes a multiplier.
            (Locale::French, "vingt") if previous == Some("quatre") => {
                current = current.saturating_sub(4) + 80;
            }
            (locale, word) => {
                let value = word_value(word, locale)
                    .ok_or_else(|| PuzzleError::UnknownWord(word.to_string()))?;
                current = current
                    .checked_add(value)
                    .ok_or(PuzzleError::BeyondCoverage(i64::MAX))?;
            }
        }

        let running = total.saturating_add(current);
        if running > MAX_SPELLABLE as u64 {
            return Err(PuzzleError::BeyondCoverage(
                i64::try_from(running).unwrap_or(i64::MAX),
            ));
        }
        previous = Some(token);
    }

    let value = total + current;
    let canonical = convert(value as i64, locale)?;
    let matches = canonical.len() == tokens.len()
        && canonical.iter().zip(tokens).all(|(a, b)| a == b.as_ref());
    if !matches {
        let phrase: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        return Err(PuzzleError::NotCanonical(phrase.join(" ")));
    }
    Ok(value)
}

fn word_value(word: &str, locale: Locale) -> Option<u64> {
    let value = match (locale, word) {
        (Locale::French, "zéro") => 0,
        (Locale::French, "vingt") => 20,
        (Locale::French, "trente") => 30,
        (Locale::French, "quarante") => 40,
        (Locale::French, "cinquante") => 50,
        (Locale::French, "soixante") => 60,
        (Locale::French, _) => FRENCH_UNITS[1..17].iter().position(|w| *w == word)? + 1,
        (Locale::English, _) => match ENGLISH_UNITS.iter().position(|w| *w == word) {
            Some(i) => i,
            None => ENGLISH_TENS[2..].iter().position(|w| *w == word)? * 10 + 20,
        },
    };
    Some(value as u64)
}

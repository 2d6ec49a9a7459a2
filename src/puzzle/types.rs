use serde::Deserialize;

use crate::error::PuzzleError;
use crate::words::{Locale, MAX_SPELLABLE};

/// One terminal, as read from `terminals/terminal_*.toml`.
///
/// Every table is optional; an empty file yields the stock French terminal.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TerminalConfig {
    #[serde(default)]
    pub meta: TerminalMeta,
    #[serde(default)]
    pub locale: Locale,
    /// Fixed RNG seed for reproducible numbers and tile order.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub number: NumberSource,
    #[serde(default)]
    pub tiles: TileSettings,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub messages: MessageOverrides,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TerminalMeta {
    pub id: String,
    pub title: String,
}

impl Default for TerminalMeta {
    fn default() -> Self {
        Self {
            id: "terminal".to_string(),
            title: "Terminal".to_string(),
        }
    }
}

/// Where the target number comes from. A `fixed` number wins over the range.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct NumberSource {
    pub fixed: Option<i64>,
    pub min: i64,
    pub max: i64,
}

impl Default for NumberSource {
    fn default() -> Self {
        Self {
            fixed: None,
            min: 1,
            max: 9999,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TileSettings {
    pub decoy_count: usize,
    /// Replaces the locale's stock decoy vocabulary.
    pub decoys: Option<Vec<String>>,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            decoy_count: 3,
            decoys: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Timing {
    pub time_limit_secs: f32,
    pub max_attempts: u32,
    pub failure_delay_secs: f32,
    pub timeout_delay_secs: f32,
    pub disappear_delay_secs: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            time_limit_secs: 30.0,
            max_attempts: 3,
            failure_delay_secs: 1.5,
            timeout_delay_secs: 2.0,
            disappear_delay_secs: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MessageOverrides {
    pub instruction: Option<String>,
    pub success: Option<String>,
    pub failure: Option<String>,
    pub timeout: Option<String>,
    pub attempts_exhausted: Option<String>,
}

/// Texts shown in the terminal's message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalMessages {
    pub instruction: String,
    pub success: String,
    pub failure: String,
    pub timeout: String,
    pub attempts_exhausted: String,
    pub attempts_label: String,
}

impl TerminalMessages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::French => Self {
                instruction: "Formez le nombre en mots en sélectionnant les mots dans le bon ordre."
                    .to_string(),
                success: "Correct! Terminal déverrouillé.".to_string(),
                failure: "Incorrect. Essayez encore.".to_string(),
                timeout: "Temps écoulé!".to_string(),
                attempts_exhausted: "Tentatives épuisées. Terminal déverrouillé par défaut."
                    .to_string(),
                attempts_label: "Tentatives".to_string(),
            },
            Locale::English => Self {
                instruction: "Spell the number by selecting the words in the right order."
                    .to_string(),
                success: "Correct! Terminal unlocked.".to_string(),
                failure: "Incorrect. Try again.".to_string(),
                timeout: "Time's up!".to_string(),
                attempts_exhausted: "No attempts left. Terminal unlocked by default.".to_string(),
                attempts_label: "Attempts".to_string(),
            },
        }
    }

    pub fn with_overrides(mut self, overrides: &MessageOverrides) -> Self {
        let fields = [
            (&mut self.instruction, &overrides.instruction),
            (&mut self.success, &overrides.success),
            (&mut self.failure, &overrides.failure),
            (&mut self.timeout, &overrides.timeout),
            (&mut self.attempts_exhausted, &overrides.attempts_exhausted),
        ];
        for (slot, custom) in fields {
            if let Some(text) = custom {
                *slot = text.clone();
            }
        }
        self
    }
}

impl TerminalConfig {
    pub fn messages(&self) -> TerminalMessages {
        TerminalMessages::for_locale(self.locale).with_overrides(&self.messages)
    }

    pub fn decoy_pool(&self) -> Vec<String> {
        self.tiles
            .decoys
            .clone()
            .unwrap_or_else(|| self.locale.default_decoys())
    }

    pub fn validate(&self) -> Result<(), PuzzleError> {
        let invalid = |reason: String| Err(PuzzleError::InvalidConfig(reason));
        let timing = &self.timing;

        if timing.max_attempts == 0 {
            return invalid("max_attempts must be at least 1".to_string());
        }
        if !(timing.time_limit_secs.is_finite() && timing.time_limit_secs > 0.0) {
            return invalid(format!(
                "time_limit_secs must be positive, got {}",
                timing.time_limit_secs
            ));
        }
        for (name, delay) in [
            ("failure_delay_secs", timing.failure_delay_secs),
            ("timeout_delay_secs", timing.timeout_delay_secs),
            ("disappear_delay_secs", timing.disappear_delay_secs),
        ] {
            if !(delay.is_finite() && delay >= 0.0) {
                return invalid(format!("{name} must be zero or positive, got {delay}"));
            }
        }

        let spellable = 0..=MAX_SPELLABLE;
        match self.number.fixed {
            Some(n) if !spellable.contains(&n) => {
                return invalid(format!("fixed number {n} is outside 0..={MAX_SPELLABLE}"));
            }
            Some(_) => {}
            None => {
                let NumberSource { min, max, .. } = self.number;
                if !spellable.contains(&min) || !spellable.contains(&max) || min > max {
                    return invalid(format!(
                        "number range {min}..={max} must lie within 0..={MAX_SPELLABLE}"
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_stock_terminal() {
        let config: TerminalConfig = toml::from_str("").unwrap();
        assert_eq!(config.locale, Locale::French);
        assert_eq!(config.number, NumberSource::default());
        assert_eq!(config.tiles.decoy_count, 3);
        assert_eq!(config.timing.max_attempts, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.decoy_pool(), Locale::French.default_decoys());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config: TerminalConfig = toml::from_str(
            r#"
            locale = "english"

            [number]
            fixed = 1823

            [timing]
            max_attempts = 5

            [messages]
            success = "Access granted."
            "#,
        )
        .unwrap();
        assert_eq!(config.number.fixed, Some(1823));
        assert_eq!(config.timing.max_attempts, 5);
        assert_eq!(config.timing.time_limit_secs, 30.0);

        let messages = config.messages();
        assert_eq!(messages.success, "Access granted.");
        assert_eq!(messages.failure, "Incorrect. Try again.");
    }

    #[test]
    fn validate_rejects_unplayable_settings() {
        let mut config = TerminalConfig::default();
        config.timing.max_attempts = 0;
        assert!(matches!(config.validate(), Err(PuzzleError::InvalidConfig(_))));

        let mut config = TerminalConfig::default();
        config.timing.time_limit_secs = 0.0;
        assert!(config.validate().is_err());

        let mut config = TerminalConfig::default();
        config.number = NumberSource {
            fixed: None,
            min: 50,
            max: 10,
        };
        assert!(config.validate().is_err());

        let mut config = TerminalConfig::default();
        config.number.fixed = Some(-3);
        assert!(config.validate().is_err());

        let mut config = TerminalConfig::default();
        config.number.max = 2_000_000;
        assert!(config.validate().is_err());
    }
}

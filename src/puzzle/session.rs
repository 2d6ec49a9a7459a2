//! One terminal puzzle from first tile to unlock.
//!
//! The session is driven from outside: the front-end feeds it discrete
//! [`PuzzleEvent`]s and calls [`PuzzleSession::advance_time`] once per
//! frame. Delayed work (regenerating after a miss, hiding the terminal) is
//! kept as scheduled actions tagged with the puzzle generation they belong
//! to, so nothing scheduled for a replaced puzzle can fire.

use std::collections::VecDeque;

use tracing::{debug, error, info};

use crate::error::PuzzleError;
use crate::rng::GameRng;
use crate::words::{self, CandidateWordSet, Locale, TileId, WordSequence};

use super::answer::{compare_sequences, AnswerTracker, Pick, PickId};
use super::types::{TerminalConfig, TerminalMessages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    WrongAnswer,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    /// A miss was counted; controls stay disabled until the next puzzle.
    Cooldown(FailureCause),
    Solved,
    /// Out of attempts. The terminal opens anyway.
    LockedDefault,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Solved | Phase::LockedDefault)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Unlocked,
    UnlockedByDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Instruction,
    Success,
    Failure,
    Timeout,
    AttemptsExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUrgency {
    Normal,
    Warning,
    Critical,
}

impl TimerUrgency {
    pub fn from_remaining(secs: f32) -> Self {
        if secs <= 10.0 {
            TimerUrgency::Critical
        } else if secs <= 20.0 {
            TimerUrgency::Warning
        } else {
            TimerUrgency::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleEvent {
    WordPicked(TileId),
    WordUnpicked(usize),
    PickRemoved(PickId),
    Submit,
    Clear,
    Tick(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Ignored,
    Solved,
    Incorrect { remaining_attempts: u32 },
    LockedDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub id: TileId,
    pub word: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickView {
    pub id: PickId,
    pub word: String,
}

/// Everything a front-end needs to draw the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub title: String,
    pub number: u32,
    pub tiles: Vec<TileView>,
    pub selection: Vec<PickView>,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
    pub attempts_label: String,
    pub remaining_time: f32,
    pub timer_label: String,
    pub timer_urgency: TimerUrgency,
    pub message_kind: MessageKind,
    pub message: String,
    pub controls_enabled: bool,
    pub phase: Phase,
    pub outcome: Outcome,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduledAction {
    Regenerate,
    Dismiss,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    generation: u64,
    remaining: f32,
    action: ScheduledAction,
}

pub struct PuzzleSession {
    config: TerminalConfig,
    messages: TerminalMessages,
    decoy_pool: Vec<String>,
    rng: GameRng,
    number: u32,
    canonical: WordSequence,
    candidates: CandidateWordSet,
    answer: AnswerTracker,
    remaining_attempts: u32,
    remaining_time: f32,
    timer_running: bool,
    phase: Phase,
    message: MessageKind,
    visible: bool,
    generation: u64,
    scheduled: Vec<Scheduled>,
    queue: VecDeque<PuzzleEvent>,
}

impl PuzzleSession {
    pub fn new(config: TerminalConfig) -> Result<Self, PuzzleError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut session = Self {
            messages: config.messages(),
            decoy_pool: config.decoy_pool(),
            remaining_attempts: config.timing.max_attempts,
            remaining_time: config.timing.time_limit_secs,
            config,
            rng,
            number: 0,
            canonical: WordSequence::default(),
            candidates: CandidateWordSet::default(),
            answer: AnswerTracker::new(),
            timer_running: false,
            phase: Phase::Active,
            message: MessageKind::Instruction,
            visible: true,
            generation: 0,
            scheduled: Vec::new(),
            queue: VecDeque::new(),
        };
        session.regenerate()?;
        Ok(session)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn canonical(&self) -> &WordSequence {
        &self.canonical
    }

    pub fn candidates(&self) -> &CandidateWordSet {
        &self.candidates
    }

    pub fn answer(&self) -> &AnswerTracker {
        &self.answer
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    pub fn remaining_time(&self) -> f32 {
        self.remaining_time
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Solved => Outcome::Unlocked,
            Phase::LockedDefault => Outcome::UnlockedByDefault,
            Phase::Active | Phase::Cooldown(_) => Outcome::Pending,
        }
    }

    pub fn controls_enabled(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn pick_tile(&mut self, tile: TileId) -> Result<PickId, PuzzleError> {
        self.ensure_controls()?;
        let tile = self
            .candidates
            .get(tile)
            .ok_or(PuzzleError::UnknownTile(tile.0))?;
        if self.answer.contains_tile(tile.id) {
            return Err(PuzzleError::TileAlreadyPicked(tile.id.0));
        }
        Ok(self.answer.pick(tile))
    }

    pub fn unpick(&mut self, index: usize) -> Result<Pick, PuzzleError> {
        self.ensure_controls()?;
        self.answer.unpick(index)
    }

    pub fn remove_pick(&mut self, id: PickId) -> Result<Pick, PuzzleError> {
        self.ensure_controls()?;
        self.answer.unpick_id(id)
    }

    pub fn clear(&mut self) -> Result<(), PuzzleError> {
        self.ensure_controls()?;
        self.answer.clear();
        Ok(())
    }

    pub fn submit(&mut self) -> SubmitResult {
        if self.phase != Phase::Active || self.remaining_attempts == 0 {
            return SubmitResult::Ignored;
        }

        self.timer_running = false;
        if compare_sequences(&self.answer.current(), self.canonical.tokens()) {
            info!(number = self.number, "terminal_solved");
            self.phase = Phase::Solved;
            self.message = MessageKind::Success;
            self.schedule(self.config.timing.disappear_delay_secs, ScheduledAction::Dismiss);
            return SubmitResult::Solved;
        }

        debug!(
            expected = %self.canonical.join("-"),
            got = %self.answer.current().join("-"),
            "terminal_wrong_answer"
        );
        self.message = MessageKind::Failure;
        self.count_miss(FailureCause::WrongAnswer);
        match self.phase {
            Phase::LockedDefault => SubmitResult::LockedDefault,
            _ => SubmitResult::Incorrect {
                remaining_attempts: self.remaining_attempts,
            },
        }
    }

    /// Moves the countdown and any pending delays forward by `delta` seconds.
    pub fn advance_time(&mut self, delta: f32) {
        if !(delta.is_finite() && delta > 0.0) {
            return;
        }

        let generation = self.generation;
        self.run_scheduled(delta);
        // A puzzle created during this tick starts its countdown next tick.
        if self.generation != generation {
            return;
        }

        if self.phase == Phase::Active && self.timer_running {
            self.remaining_time = (self.remaining_time - delta).max(0.0);
            if self.remaining_time <= 0.0 {
                self.timer_running = false;
                self.on_timeout();
            }
        }
    }

    pub fn dispatch(&mut self, event: PuzzleEvent) -> Result<(), PuzzleError> {
        match event {
            PuzzleEvent::WordPicked(tile) => self.pick_tile(tile).map(drop),
            PuzzleEvent::WordUnpicked(index) => self.unpick(index).map(drop),
            PuzzleEvent::PickRemoved(id) => self.remove_pick(id).map(drop),
            PuzzleEvent::Submit => {
                self.submit();
                Ok(())
            }
            PuzzleEvent::Clear => self.clear(),
            PuzzleEvent::Tick(delta) => {
                self.advance_time(delta);
                Ok(())
            }
        }
    }

    pub fn enqueue(&mut self, event: PuzzleEvent) {
        self.queue.push_back(event);
    }

    /// Applies queued events in arrival order. Rejected events are logged and
    /// dropped; they never change the session.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            if let Err(error) = self.dispatch(event.clone()) {
                debug!(?event, error = %error, "terminal_event_rejected");
            }
            handled += 1;
        }
        handled
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let controls_enabled = self.controls_enabled();
        let tiles = self
            .candidates
            .tiles()
            .iter()
            .map(|tile| TileView {
                id: tile.id,
                word: tile.word.clone(),
                enabled: controls_enabled && !self.answer.contains_tile(tile.id),
            })
            .collect();
        let selection = self
            .answer
            .picks()
            .iter()
            .map(|pick| PickView {
                id: pick.id,
                word: pick.word.clone(),
            })
            .collect();

        SessionSnapshot {
            title: self.config.meta.title.clone(),
            number: self.number,
            tiles,
            selection,
            remaining_attempts: self.remaining_attempts,
            max_attempts: self.config.timing.max_attempts,
            attempts_label: format!(
                "{}: {}/{}",
                self.messages.attempts_label, self.remaining_attempts, self.config.timing.max_attempts
            ),
            remaining_time: self.remaining_time,
            timer_label: format!("{}s", self.remaining_time.floor() as u32),
            timer_urgency: TimerUrgency::from_remaining(self.remaining_time),
            message_kind: self.message,
            message: self.message_text().to_string(),
            controls_enabled,
            phase: self.phase,
            outcome: self.outcome(),
            visible: self.visible,
        }
    }

    fn message_text(&self) -> &str {
        match self.message {
            MessageKind::Instruction => &self.messages.instruction,
            MessageKind::Success => &self.messages.success,
            MessageKind::Failure => &self.messages.failure,
            MessageKind::Timeout => &self.messages.timeout,
            MessageKind::AttemptsExhausted => &self.messages.attempts_exhausted,
        }
    }

    fn ensure_controls(&self) -> Result<(), PuzzleError> {
        if self.controls_enabled() {
            Ok(())
        } else {
            Err(PuzzleError::ControlsDisabled)
        }
    }

    fn on_timeout(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        info!(number = self.number, "terminal_timeout");
        self.message = MessageKind::Timeout;
        self.count_miss(FailureCause::Timeout);
    }

    fn count_miss(&mut self, cause: FailureCause) {
        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        if self.remaining_attempts == 0 {
            self.lock_default();
            return;
        }

        self.phase = Phase::Cooldown(cause);
        let delay = match cause {
            FailureCause::WrongAnswer => self.config.timing.failure_delay_secs,
            FailureCause::Timeout => self.config.timing.timeout_delay_secs,
        };
        info!(
            ?cause,
            remaining_attempts = self.remaining_attempts,
            delay,
            "terminal_attempt_failed"
        );
        self.schedule(delay, ScheduledAction::Regenerate);
    }

    fn lock_default(&mut self) {
        info!(number = self.number, "terminal_unlocked_by_default");
        self.phase = Phase::LockedDefault;
        self.timer_running = false;
        self.message = MessageKind::AttemptsExhausted;
        self.schedule(self.config.timing.disappear_delay_secs, ScheduledAction::Dismiss);
    }

    fn schedule(&mut self, delay: f32, action: ScheduledAction) {
        self.scheduled.push(Scheduled {
            generation: self.generation,
            remaining: delay,
            action,
        });
    }

    fn run_scheduled(&mut self, delta: f32) {
        let generation = self.generation;
        self.scheduled.retain(|s| s.generation == generation);
        for entry in &mut self.scheduled {
            entry.remaining -= delta;
        }

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .scheduled
            .drain(..)
            .partition(|s| s.remaining <= 0.0);
        self.scheduled = waiting;

        for entry in due {
            // An earlier action in this batch may already have moved on.
            if entry.generation != self.generation {
                continue;
            }
            match entry.action {
                ScheduledAction::Regenerate if matches!(self.phase, Phase::Cooldown(_)) => {
                    if let Err(error) = self.regenerate() {
                        error!(error = %error, "terminal_regenerate_failed");
                        self.lock_default();
                    }
                }
                ScheduledAction::Regenerate => {}
                ScheduledAction::Dismiss => {
                    debug!("terminal_dismissed");
                    self.visible = false;
                }
            }
        }
    }

    /// Replaces the number, words, tiles and answer, and restarts the timer.
    /// Attempts carry over.
    fn regenerate(&mut self) -> Result<(), PuzzleError> {
        let number = match self.config.number.fixed {
            Some(fixed) => fixed,
            None => {
                let (min, max) = (self.config.number.min, self.config.number.max);
                i64::from(self.rng.range(min as u32, max as u32))
            }
        };
        let canonical = words::convert(number, self.config.locale)?;
        let candidates = words::generate(
            canonical.tokens(),
            &self.decoy_pool,
            self.config.tiles.decoy_count,
            &mut self.rng,
        );

        self.generation += 1;
        self.scheduled.clear();
        self.number = number as u32;
        self.canonical = canonical;
        self.candidates = candidates;
        self.answer.clear();
        self.remaining_time = self.config.timing.time_limit_secs;
        self.timer_running = true;
        self.phase = Phase::Active;
        self.message = MessageKind::Instruction;

        info!(
            generation = self.generation,
            number = self.number,
            tiles = self.candidates.len(),
            "terminal_puzzle_generated"
        );
        debug!(answer = %self.canonical.join(" "), "terminal_answer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::types::NumberSource;

    fn config(fixed: Option<i64>, locale: Locale) -> TerminalConfig {
        let mut config = TerminalConfig {
            locale,
            seed: Some(42),
            ..TerminalConfig::default()
        };
        config.number = NumberSource {
            fixed,
            ..NumberSource::default()
        };
        config
    }

    fn session(fixed: i64) -> PuzzleSession {
        PuzzleSession::new(config(Some(fixed), Locale::French)).unwrap()
    }

    fn pick_words(session: &mut PuzzleSession, words: &[&str]) {
        for word in words {
            let id = session
                .candidates()
                .tiles()
                .iter()
                .find(|t| t.word == *word && !session.answer().contains_tile(t.id))
                .map(|t| t.id)
                .unwrap();
            session.pick_tile(id).unwrap();
        }
    }

    fn pick_answer(session: &mut PuzzleSession) {
        let words = session.canonical().to_vec();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        pick_words(session, &words);
    }

    #[test]
    fn starts_active_with_full_budget() {
        let s = session(1823);
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.remaining_attempts(), 3);
        assert_eq!(s.remaining_time(), 30.0);
        assert_eq!(s.number(), 1823);
        assert_eq!(s.canonical().tokens(), ["mille", "huit", "cent", "vingt", "trois"]);
        assert_eq!(s.candidates().len(), 8);
        assert_eq!(s.outcome(), Outcome::Pending);
    }

    #[test]
    fn correct_answer_solves_once() {
        let mut s = session(1823);
        pick_answer(&mut s);
        assert_eq!(s.submit(), SubmitResult::Solved);
        assert_eq!(s.phase(), Phase::Solved);
        assert!(s.phase().is_terminal());
        assert_eq!(s.outcome(), Outcome::Unlocked);

        assert_eq!(s.submit(), SubmitResult::Ignored);
        assert_eq!(s.remaining_attempts(), 3);
        assert_eq!(s.pick_tile(TileId(0)), Err(PuzzleError::ControlsDisabled));

        s.advance_time(60.0);
        assert_eq!(s.phase(), Phase::Solved);
        assert!(!s.is_visible());
    }

    #[test]
    fn wrong_answers_exhaust_to_locked_default() {
        let mut s = session(71);
        for expected_left in [2, 1] {
            pick_words(&mut s, &["onze", "et", "soixante"]);
            assert_eq!(
                s.submit(),
                SubmitResult::Incorrect {
                    remaining_attempts: expected_left
                }
            );
            assert_eq!(s.snapshot().message_kind, MessageKind::Failure);
            assert_eq!(s.submit(), SubmitResult::Ignored);
            s.advance_time(1.5);
            assert_eq!(s.phase(), Phase::Active);
        }
        assert_eq!(s.submit(), SubmitResult::LockedDefault);
        assert_eq!(s.phase(), Phase::LockedDefault);
        assert_eq!(s.outcome(), Outcome::UnlockedByDefault);
        assert_eq!(s.remaining_attempts(), 0);

        s.advance_time(5.0);
        assert_eq!(s.phase(), Phase::LockedDefault);
        assert_eq!(s.submit(), SubmitResult::Ignored);
    }

    #[test]
    fn regeneration_keeps_attempts_and_resets_the_rest() {
        let mut s = PuzzleSession::new(config(None, Locale::English)).unwrap();
        s.advance_time(4.0);
        let decoy = s.candidates().tiles().iter().find(|t| t.decoy).unwrap().id;
        s.pick_tile(decoy).unwrap();
        let generation = s.generation();

        s.submit();
        assert!(matches!(s.phase(), Phase::Cooldown(FailureCause::WrongAnswer)));
        assert!(!s.snapshot().controls_enabled);
        assert!(s.snapshot().tiles.iter().all(|t| !t.enabled));

        s.advance_time(1.0);
        assert_eq!(s.generation(), generation);
        s.advance_time(0.5);
        assert_eq!(s.generation(), generation + 1);
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.remaining_attempts(), 2);
        assert_eq!(s.remaining_time(), 30.0);
        assert!(s.answer().is_empty());
        assert_eq!(s.snapshot().message_kind, MessageKind::Instruction);
    }

    #[test]
    fn timeout_counts_as_one_miss() {
        let mut s = session(42);
        s.advance_time(29.0);
        assert_eq!(s.remaining_attempts(), 3);
        s.advance_time(1.0);
        assert_eq!(s.phase(), Phase::Cooldown(FailureCause::Timeout));
        assert_eq!(s.remaining_attempts(), 2);
        assert_eq!(s.remaining_time(), 0.0);
        assert_eq!(s.snapshot().message_kind, MessageKind::Timeout);

        // The expired timer does not fire again while cooling down.
        s.advance_time(1.0);
        assert_eq!(s.remaining_attempts(), 2);
        s.advance_time(1.0);
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.remaining_time(), 30.0);
    }

    #[test]
    fn repeated_timeouts_lock_default() {
        let mut s = session(5);
        s.advance_time(30.0);
        s.advance_time(2.0);
        s.advance_time(30.0);
        s.advance_time(2.0);
        s.advance_time(30.0);
        assert_eq!(s.phase(), Phase::LockedDefault);
        assert_eq!(s.snapshot().message_kind, MessageKind::AttemptsExhausted);
        assert!(s.is_visible());
        s.advance_time(2.0);
        assert!(!s.is_visible());
    }

    #[test]
    fn submit_stops_the_timer() {
        let mut s = session(1823);
        pick_answer(&mut s);
        s.advance_time(10.0);
        s.submit();
        let left = s.remaining_time();
        s.advance_time(25.0);
        assert_eq!(s.remaining_time(), left);
    }

    #[test]
    fn stale_scheduled_actions_are_dropped() {
        let mut s = session(12);
        pick_words(&mut s, &["douze"]);
        s.clear().unwrap();
        s.submit();
        assert_eq!(s.phase(), Phase::Cooldown(FailureCause::WrongAnswer));

        let generation = s.generation();
        // Age the pending regeneration and add a dismissal, both from a
        // puzzle that no longer exists.
        for entry in &mut s.scheduled {
            entry.generation = generation - 1;
        }
        s.scheduled.push(Scheduled {
            generation: generation - 1,
            remaining: 0.1,
            action: ScheduledAction::Dismiss,
        });

        s.advance_time(5.0);
        assert_eq!(s.generation(), generation);
        assert_eq!(s.phase(), Phase::Cooldown(FailureCause::WrongAnswer));
        assert!(s.is_visible());
        assert!(s.scheduled.is_empty());
    }

    #[test]
    fn queued_events_apply_in_order() {
        let mut s = session(21);
        let ids: Vec<TileId> = ["vingt", "et", "un"]
            .iter()
            .map(|w| s.candidates().tiles().iter().find(|t| t.word == *w).unwrap().id)
            .collect();

        s.enqueue(PuzzleEvent::WordPicked(ids[1]));
        s.enqueue(PuzzleEvent::WordPicked(ids[1]));
        s.enqueue(PuzzleEvent::WordUnpicked(5));
        s.enqueue(PuzzleEvent::WordUnpicked(0));
        for id in &ids {
            s.enqueue(PuzzleEvent::WordPicked(*id));
        }
        s.enqueue(PuzzleEvent::Tick(3.0));
        s.enqueue(PuzzleEvent::Submit);
        s.enqueue(PuzzleEvent::Submit);
        assert_eq!(s.process_events(), 10);

        assert_eq!(s.phase(), Phase::Solved);
        assert_eq!(s.remaining_attempts(), 3);
        assert_eq!(s.remaining_time(), 27.0);
    }

    #[test]
    fn pick_rules() {
        let mut s = session(21);
        let tile = s.candidates().tiles()[0].id;
        let pick = s.pick_tile(tile).unwrap();
        assert_eq!(s.pick_tile(tile), Err(PuzzleError::TileAlreadyPicked(tile.0)));
        assert_eq!(s.pick_tile(TileId(500)), Err(PuzzleError::UnknownTile(500)));
        assert!(!s.snapshot().tiles.iter().find(|t| t.id == tile).unwrap().enabled);

        assert_eq!(s.remove_pick(pick).unwrap().tile, tile);
        assert!(matches!(s.unpick(0), Err(PuzzleError::InvalidIndex { .. })));
        assert!(s.snapshot().tiles.iter().all(|t| t.enabled));
    }

    #[test]
    fn snapshot_labels_follow_locale() {
        let mut s = session(1823);
        s.advance_time(12.5);
        let snap = s.snapshot();
        assert_eq!(snap.attempts_label, "Tentatives: 3/3");
        assert_eq!(snap.timer_label, "17s");
        assert_eq!(snap.timer_urgency, TimerUrgency::Warning);
        assert_eq!(snap.number, 1823);
        assert!(snap.visible);

        let en = PuzzleSession::new(config(Some(7), Locale::English)).unwrap();
        assert_eq!(en.snapshot().attempts_label, "Attempts: 3/3");
        assert_eq!(en.canonical().tokens(), ["seven"]);
    }

    #[test]
    fn timer_urgency_thresholds() {
        assert_eq!(TimerUrgency::from_remaining(25.0), TimerUrgency::Normal);
        assert_eq!(TimerUrgency::from_remaining(20.0), TimerUrgency::Warning);
        assert_eq!(TimerUrgency::from_remaining(10.0), TimerUrgency::Critical);
    }

    #[test]
    fn seeded_sessions_repeat() {
        let a = PuzzleSession::new(config(None, Locale::French)).unwrap();
        let b = PuzzleSession::new(config(None, Locale::French)).unwrap();
        assert_eq!(a.number(), b.number());
        assert_eq!(a.candidates(), b.candidates());
        assert!((1..=9999).contains(&a.number()));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut bad = config(Some(10), Locale::French);
        bad.timing.max_attempts = 0;
        assert!(matches!(
            PuzzleSession::new(bad),
            Err(PuzzleError::InvalidConfig(_))
        ));
    }
}

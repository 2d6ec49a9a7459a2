pub mod answer;
pub mod loader;
pub mod session;
pub mod types;

pub use answer::{compare_sequences, AnswerTracker, Pick, PickId};
pub use loader::{load_terminal, load_terminals};
pub use session::{
    FailureCause, MessageKind, Outcome, Phase, PuzzleEvent, PuzzleSession, SessionSnapshot,
    SubmitResult, TimerUrgency,
};
pub use types::{TerminalConfig, TerminalMessages};

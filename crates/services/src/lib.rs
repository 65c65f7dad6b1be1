#![forbid(unsafe_code)]

pub mod error;
pub mod pacing;
pub mod quiz_service;
pub mod view;

pub use capitals_core::Clock;

pub use error::QuizServiceError;
pub use pacing::{DEFAULT_PACING, PendingAdvance};
pub use quiz_service::{AnswerFeedback, GuessResult, QuizService};
pub use view::{CountryStanding, ExpansionNotice, QuizView};

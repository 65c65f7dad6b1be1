#![forbid(unsafe_code)]

//! Domain core for the capital-city quiz: reference data, per-country
//! mastery, the active rotation and question selection.
//!
//! Nothing in this crate performs I/O. Randomness and time are injected so
//! every decision can be replayed in tests.

pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod selector;
pub mod time;

pub use engine::{AnswerRecord, GuessReport, QuizEngine};
pub use error::{Error, QuizError};
pub use time::Clock;

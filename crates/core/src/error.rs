use thiserror::Error;

use crate::model::{DatasetError, SettingsError};

/// Failures raised while selecting or building a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("reference dataset has no country with a known capital")]
    EmptyDataset,

    #[error("active set is empty")]
    EmptyActiveSet,

    #[error("need {needed} distractor capitals for {country}, found {available}")]
    InsufficientDistractors {
        country: String,
        needed: usize,
        available: usize,
    },
}

/// Umbrella error for consumers that load data, settings and run the engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

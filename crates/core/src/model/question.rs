use serde::{Deserialize, Serialize};

use crate::model::CountryRecord;

/// Where the current round stands.
///
/// A wrong answer leaves the question open for another try; a correct one
/// locks it until the next question is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    #[default]
    AwaitingAnswer,
    AnsweredIncorrect,
    AnsweredCorrect,
}

/// A multiple-choice question about one country's capital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    country: String,
}

/// Outcome of comparing one chosen option against a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCheck {
    pub correct: bool,
}

impl Question {
    /// `options` must include the correct capital and already be shuffled into
    /// final display order.
    #[must_use]
    pub fn new(target: &CountryRecord, options: Vec<String>) -> Self {
        Self {
            prompt: Self::prompt_for(target.country()),
            options,
            correct_answer: target.capital().to_owned(),
            country: target.country().to_owned(),
        }
    }

    #[must_use]
    pub fn prompt_for(country: &str) -> String {
        format!("What is the capital city of {country}?")
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Exact string comparison. Anything that is not the capital, including
    /// text that is not among the options, is incorrect.
    #[must_use]
    pub fn check(&self, chosen: &str) -> AnswerCheck {
        AnswerCheck {
            correct: chosen == self.correct_answer,
        }
    }
}

//! Round state machine tying the progress book, active set and selector together.

use rand::RngCore;

use crate::error::QuizError;
use crate::model::{
    ActiveSet, CountryRecord, Dataset, Expansion, ProgressBook, Question, QuizSettings,
    RecentlyAsked, RoundState, Snapshot,
};
use crate::selector;
use crate::time::Clock;

/// Result of one answer that was accepted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub country: String,
    pub correct: bool,
    pub points: u32,
    pub expansion: Option<Expansion>,
}

/// What `submit_guess` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessReport {
    /// The question was already answered correctly; nothing changed.
    Ignored,
    Recorded(AnswerRecord),
}

/// Synchronous quiz engine. Owns all mutable quiz state; performs no I/O.
///
/// Every method that returns normally after mutating progress or the active
/// set leaves `snapshot()` ready to be persisted by the caller.
pub struct QuizEngine {
    dataset: Dataset,
    settings: QuizSettings,
    clock: Clock,
    rng: Box<dyn RngCore + Send>,
    progress: ProgressBook,
    active: ActiveSet,
    recent: RecentlyAsked,
    question: Question,
    state: RoundState,
    selected: Option<String>,
}

impl QuizEngine {
    /// Start from a restored snapshot, or from a fresh random sample when
    /// there is none (or its active set is unusable).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyDataset` if no country has a capital, or a
    /// selection error if the first question cannot be built.
    pub fn start(
        dataset: Dataset,
        settings: QuizSettings,
        restored: Option<Snapshot>,
        clock: Clock,
        mut rng: Box<dyn RngCore + Send>,
    ) -> Result<Self, QuizError> {
        if dataset.is_empty() {
            return Err(QuizError::EmptyDataset);
        }

        let (progress, restored_active) = match restored {
            Some(snapshot) => (
                ProgressBook::from_entries(snapshot.progress),
                ActiveSet::restore(snapshot.active_countries, &dataset),
            ),
            None => (ProgressBook::default(), None),
        };
        let active = restored_active.unwrap_or_else(|| {
            ActiveSet::sample(&dataset, settings.initial_active_size(), rng.as_mut())
        });

        let recent = RecentlyAsked::new(settings.recent_capacity());
        let (question, recent) = selector::next_question(
            &active,
            &progress,
            recent,
            &dataset,
            &settings,
            rng.as_mut(),
        )?;

        Ok(Self {
            dataset,
            settings,
            clock,
            rng,
            progress,
            active,
            recent,
            question,
            state: RoundState::AwaitingAnswer,
            selected: None,
        })
    }

    /// Score a guess against the current question.
    ///
    /// A wrong guess keeps the question open for another attempt. Once the
    /// question has been answered correctly further guesses are ignored until
    /// [`QuizEngine::advance`] is called.
    pub fn submit_guess(&mut self, option: &str) -> GuessReport {
        if self.state == RoundState::AnsweredCorrect {
            return GuessReport::Ignored;
        }

        let check = self.question.check(option);
        let country = self.question.country().to_owned();
        let points = self.progress.record_answer(
            &country,
            check.correct,
            self.settings.scoring(),
            self.clock.now(),
        );
        self.selected = Some(option.to_owned());
        self.state = if check.correct {
            RoundState::AnsweredCorrect
        } else {
            RoundState::AnsweredIncorrect
        };

        let expansion = self.check_expansion();
        GuessReport::Recorded(AnswerRecord {
            country,
            correct: check.correct,
            points,
            expansion,
        })
    }

    /// Grow the active set if every member is mastered.
    ///
    /// Clears the recently-asked queue on growth so new countries are
    /// immediately eligible.
    pub fn check_expansion(&mut self) -> Option<Expansion> {
        let expansion = self.active.maybe_expand(
            &self.dataset,
            &self.progress,
            self.settings.mastery_threshold(),
            self.settings.expansion_batch_size(),
            self.rng.as_mut(),
        )?;
        self.recent.clear();
        Some(expansion)
    }

    /// Replace the current question with a freshly selected one.
    ///
    /// # Errors
    ///
    /// Returns a selection error if no question can be built.
    pub fn advance(&mut self) -> Result<&Question, QuizError> {
        let recent = std::mem::replace(
            &mut self.recent,
            RecentlyAsked::new(self.settings.recent_capacity()),
        );
        let (question, recent) = selector::next_question(
            &self.active,
            &self.progress,
            recent,
            &self.dataset,
            &self.settings,
            self.rng.as_mut(),
        )?;
        self.recent = recent;
        self.question = question;
        self.state = RoundState::AwaitingAnswer;
        self.selected = None;
        Ok(&self.question)
    }

    /// Forget all progress and start over with a new random active set.
    ///
    /// # Errors
    ///
    /// Returns a selection error if the first new question cannot be built.
    pub fn reset(&mut self) -> Result<&Question, QuizError> {
        self.progress.reset();
        self.active = ActiveSet::sample(
            &self.dataset,
            self.settings.initial_active_size(),
            self.rng.as_mut(),
        );
        self.recent.clear();
        self.advance()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            progress: self.progress.to_entries(),
            active_countries: self.active.members().to_vec(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn is_answer_correct(&self) -> bool {
        self.state == RoundState::AnsweredCorrect
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Points for the country the current question is about.
    #[must_use]
    pub fn current_points(&self) -> u32 {
        self.progress.points(self.question.country())
    }

    /// Active countries paired with their points, in active-set order.
    #[must_use]
    pub fn active_with_points(&self) -> Vec<(&CountryRecord, u32)> {
        self.active
            .members()
            .iter()
            .map(|m| (m, self.progress.points(m.country())))
            .collect()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressBook {
        &self.progress
    }

    #[must_use]
    pub fn active(&self) -> &ActiveSet {
        &self.active
    }

    #[must_use]
    pub fn recent(&self) -> &RecentlyAsked {
        &self.recent
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

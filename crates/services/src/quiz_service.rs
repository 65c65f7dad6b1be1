use std::time::Duration;

use capitals_core::model::{Dataset, QuizSettings};
use capitals_core::{Clock, GuessReport, QuizEngine};
use rand::RngCore;
use storage::repository::Storage;
use storage::state::StateStore;

use crate::error::QuizServiceError;
use crate::pacing::{DEFAULT_PACING, PendingAdvance};
use crate::view::{ExpansionNotice, QuizView};

/// Feedback for an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub points: u32,
    pub expansion: Option<ExpansionNotice>,
    /// Present after a correct answer: redeem it once the delay has elapsed.
    pub advance: Option<PendingAdvance>,
    /// `false` when the new state could not be written. The next successful
    /// save stores it, so the quiz keeps running.
    pub saved: bool,
}

/// Outcome of `QuizService::submit_guess`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// The current question was already answered correctly.
    Ignored,
    Answered(AnswerFeedback),
}

/// Runs the quiz engine and persists its state after every change.
pub struct QuizService {
    engine: QuizEngine,
    store: StateStore,
    pacing: Duration,
    generation: u64,
    expansion: Option<ExpansionNotice>,
}

impl QuizService {
    /// Load saved state once, start the engine and persist the starting point.
    ///
    /// Saved state that cannot be used is discarded and the quiz starts fresh.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` if storage cannot be reached or the first
    /// question cannot be built.
    pub async fn open(
        dataset: Dataset,
        settings: QuizSettings,
        store: StateStore,
        clock: Clock,
        rng: Box<dyn RngCore + Send>,
    ) -> Result<Self, QuizServiceError> {
        let restored = store.load().await?;
        if restored.is_none() {
            tracing::info!("no saved quiz state, drawing a new active set");
        }

        let mut engine = QuizEngine::start(dataset, settings, restored, clock, rng)?;
        let expansion = engine.check_expansion().map(|e| ExpansionNotice::from(&e));

        let service = Self {
            engine,
            store,
            pacing: DEFAULT_PACING,
            generation: 0,
            expansion,
        };
        service.persist().await?;
        Ok(service)
    }

    /// Open the quiz against a `SQLite` database, creating tables as needed.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` if storage initialization or [`QuizService::open`] fails.
    pub async fn open_sqlite(
        db_url: &str,
        dataset: Dataset,
        settings: QuizSettings,
        clock: Clock,
        rng: Box<dyn RngCore + Send>,
    ) -> Result<Self, QuizServiceError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::open(dataset, settings, StateStore::new(storage.state), clock, rng).await
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    #[must_use]
    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Score a guess for the current question and persist the result.
    ///
    /// Wrong guesses may be retried on the same question. A correct guess
    /// returns a [`PendingAdvance`] for the next question, even when the
    /// save fails.
    pub async fn submit_guess(&mut self, option: &str) -> GuessResult {
        let record = match self.engine.submit_guess(option) {
            GuessReport::Ignored => return GuessResult::Ignored,
            GuessReport::Recorded(record) => record,
        };

        let expansion = record.expansion.as_ref().map(ExpansionNotice::from);
        if let Some(notice) = &expansion {
            tracing::info!(
                added = ?notice.added,
                active = notice.active_len,
                "active set expanded"
            );
            self.expansion = Some(notice.clone());
        }

        let advance = record
            .correct
            .then(|| PendingAdvance::new(self.generation, self.pacing));

        let saved = match self.persist().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "failed to save quiz state after answer");
                false
            }
        };

        GuessResult::Answered(AnswerFeedback {
            correct: record.correct,
            points: record.points,
            expansion,
            advance,
            saved,
        })
    }

    /// Show the next question if `ticket` has not been superseded.
    ///
    /// Returns `false` without touching state for a stale ticket.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if no question can be built.
    pub fn advance(&mut self, ticket: PendingAdvance) -> Result<bool, QuizServiceError> {
        if ticket.generation() != self.generation {
            tracing::debug!(
                ticket = ticket.generation(),
                current = self.generation,
                "skipping superseded advance"
            );
            return Ok(false);
        }
        self.generation += 1;
        self.engine.advance()?;
        self.expansion = None;
        Ok(true)
    }

    /// Run the expansion check outside of an answer and persist any growth.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the grown set cannot be saved.
    pub async fn check_expansion(&mut self) -> Result<Option<ExpansionNotice>, QuizServiceError> {
        let Some(expansion) = self.engine.check_expansion() else {
            return Ok(None);
        };
        let notice = ExpansionNotice::from(&expansion);
        self.expansion = Some(notice.clone());
        self.persist().await?;
        Ok(Some(notice))
    }

    /// Clear all progress, draw a new active set and overwrite saved state.
    ///
    /// Any pending advance is superseded.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` if the reset state cannot be built or saved.
    pub async fn reset_all_progress(&mut self) -> Result<(), QuizServiceError> {
        self.generation += 1;
        self.engine.reset()?;
        self.expansion = None;
        tracing::info!(active = self.engine.active().len(), "progress reset");
        self.persist().await
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        QuizView::build(&self.engine, self.expansion.as_ref())
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    async fn persist(&self) -> Result<(), QuizServiceError> {
        self.store.save(&self.engine.snapshot()).await?;
        Ok(())
    }
}

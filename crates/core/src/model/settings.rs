use thiserror::Error;

use crate::model::Scoring;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("initial active size must be > 0")]
    InvalidInitialActiveSize,

    #[error("expansion batch size must be > 0")]
    InvalidExpansionBatchSize,

    #[error("correct reward must be > 0")]
    InvalidCorrectReward,

    #[error("weak candidate count must be > 0")]
    InvalidWeakCandidates,

    #[error("recently asked capacity must be > 0")]
    InvalidRecentCapacity,

    #[error("distractor count must be > 0")]
    InvalidDistractorCount,

    #[error("distractor pool must hold at least {needed} countries")]
    InvalidDistractorPool { needed: u32 },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tuning knobs for mastery scoring, rotation growth and question building.
///
/// Defaults:
/// - 5 countries in the first rotation, grown by 3 at a time
/// - a country counts as mastered at 8 points
/// - +2 for a correct answer, -3 for a wrong one (never below 0)
/// - questions are drawn from the 5 weakest countries, skipping the last 5 asked
/// - 3 distractors picked from the first 20 other countries in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    initial_active_size: u32,
    expansion_batch_size: u32,
    mastery_threshold: u32,
    correct_reward: u32,
    incorrect_penalty: u32,
    weak_candidates: u32,
    recent_capacity: u32,
    distractor_pool: u32,
    distractor_count: u32,
}

impl QuizSettings {
    /// Creates custom settings.
    ///
    /// A zero mastery threshold or zero penalty is allowed; every other knob
    /// must be positive.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` naming the first invalid knob.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        initial_active_size: u32,
        expansion_batch_size: u32,
        mastery_threshold: u32,
        correct_reward: u32,
        incorrect_penalty: u32,
        weak_candidates: u32,
        recent_capacity: u32,
        distractor_pool: u32,
        distractor_count: u32,
    ) -> Result<Self, SettingsError> {
        if initial_active_size == 0 {
            return Err(SettingsError::InvalidInitialActiveSize);
        }
        if expansion_batch_size == 0 {
            return Err(SettingsError::InvalidExpansionBatchSize);
        }
        if correct_reward == 0 {
            return Err(SettingsError::InvalidCorrectReward);
        }
        if weak_candidates == 0 {
            return Err(SettingsError::InvalidWeakCandidates);
        }
        if recent_capacity == 0 {
            return Err(SettingsError::InvalidRecentCapacity);
        }
        if distractor_count == 0 {
            return Err(SettingsError::InvalidDistractorCount);
        }
        if distractor_pool < distractor_count {
            return Err(SettingsError::InvalidDistractorPool {
                needed: distractor_count,
            });
        }

        Ok(Self {
            initial_active_size,
            expansion_batch_size,
            mastery_threshold,
            correct_reward,
            incorrect_penalty,
            weak_candidates,
            recent_capacity,
            distractor_pool,
            distractor_count,
        })
    }

    #[must_use]
    pub fn initial_active_size(&self) -> usize {
        to_usize(self.initial_active_size)
    }

    #[must_use]
    pub fn expansion_batch_size(&self) -> usize {
        to_usize(self.expansion_batch_size)
    }

    #[must_use]
    pub fn mastery_threshold(&self) -> u32 {
        self.mastery_threshold
    }

    #[must_use]
    pub fn scoring(&self) -> Scoring {
        Scoring {
            reward: self.correct_reward,
            penalty: self.incorrect_penalty,
        }
    }

    #[must_use]
    pub fn weak_candidates(&self) -> usize {
        to_usize(self.weak_candidates)
    }

    #[must_use]
    pub fn recent_capacity(&self) -> usize {
        to_usize(self.recent_capacity)
    }

    #[must_use]
    pub fn distractor_pool(&self) -> usize {
        to_usize(self.distractor_pool)
    }

    #[must_use]
    pub fn distractor_count(&self) -> usize {
        to_usize(self.distractor_count)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            initial_active_size: 5,
            expansion_batch_size: 3,
            mastery_threshold: 8,
            correct_reward: 2,
            incorrect_penalty: 3,
            weak_candidates: 5,
            recent_capacity: 5,
            distractor_pool: 20,
            distractor_count: 3,
        }
    }
}

fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points awarded and deducted per answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    pub reward: u32,
    pub penalty: u32,
}

impl Scoring {
    /// New point total after one answer. Never drops below zero.
    #[must_use]
    pub fn apply(self, points: u32, correct: bool) -> u32 {
        if correct {
            points.saturating_add(self.reward)
        } else {
            points.saturating_sub(self.penalty)
        }
    }
}

/// Mastery record for a single country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub country: String,
    pub points: u32,
    #[serde(default, rename = "lastAskedTimestamp")]
    pub last_asked_at: Option<DateTime<Utc>>,
}

/// Per-country mastery points, one entry per country ever answered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressBook {
    entries: BTreeMap<String, ProgressEntry>,
}

impl ProgressBook {
    /// Rebuild from persisted entries. If a country appears twice, the first entry is kept.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = ProgressEntry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.entry(entry.country.clone()).or_insert(entry);
        }
        Self { entries: map }
    }

    /// Apply one answer for `country`, creating its entry at 0 if needed.
    ///
    /// Returns the new point total.
    pub fn record_answer(
        &mut self,
        country: &str,
        correct: bool,
        scoring: Scoring,
        now: DateTime<Utc>,
    ) -> u32 {
        let entry = self
            .entries
            .entry(country.to_owned())
            .or_insert_with(|| ProgressEntry {
                country: country.to_owned(),
                points: 0,
                last_asked_at: None,
            });
        entry.points = scoring.apply(entry.points, correct);
        entry.last_asked_at = Some(now);
        entry.points
    }

    /// Stored points, or 0 for a country never answered.
    #[must_use]
    pub fn points(&self, country: &str) -> u32 {
        self.entries.get(country).map_or(0, |e| e.points)
    }

    #[must_use]
    pub fn entry(&self, country: &str) -> Option<&ProgressEntry> {
        self.entries.get(country)
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn to_entries(&self) -> Vec<ProgressEntry> {
        self.entries.values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

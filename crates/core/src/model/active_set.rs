use std::collections::HashSet;

use rand::Rng;
use rand::seq::index;

use crate::model::{CountryRecord, Dataset, ProgressBook};

/// Countries added to the rotation by one expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub added: Vec<CountryRecord>,
    pub active_len: usize,
}

/// The countries currently in rotation, in the order they joined.
///
/// Only grows, except when replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveSet {
    members: Vec<CountryRecord>,
}

impl ActiveSet {
    /// Draw `size` distinct countries from the dataset, or all of them if it is smaller.
    pub fn sample<R: Rng + ?Sized>(dataset: &Dataset, size: usize, rng: &mut R) -> Self {
        let records = dataset.records();
        let amount = size.min(records.len());
        let members = index::sample(rng, records.len(), amount)
            .into_iter()
            .map(|i| records[i].clone())
            .collect();
        Self { members }
    }

    /// Rebuild a persisted rotation against the current dataset.
    ///
    /// Countries the dataset no longer knows are dropped and repeats collapse.
    /// Returns `None` when nothing usable remains.
    #[must_use]
    pub fn restore(saved: Vec<CountryRecord>, dataset: &Dataset) -> Option<Self> {
        let mut seen = HashSet::new();
        let members: Vec<CountryRecord> = saved
            .into_iter()
            .filter_map(|record| dataset.get(record.country()).cloned())
            .filter(|record| seen.insert(record.country().to_owned()))
            .collect();
        if members.is_empty() {
            None
        } else {
            Some(Self { members })
        }
    }

    #[must_use]
    pub fn members(&self) -> &[CountryRecord] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.members.iter().any(|m| m.country() == country)
    }

    /// True when every active country has at least `threshold` points.
    #[must_use]
    pub fn all_mastered(&self, progress: &ProgressBook, threshold: u32) -> bool {
        !self.members.is_empty()
            && self
                .members
                .iter()
                .all(|m| progress.points(m.country()) >= threshold)
    }

    /// Dataset countries not yet in rotation, in dataset order.
    #[must_use]
    pub fn unused<'a>(&self, dataset: &'a Dataset) -> Vec<&'a CountryRecord> {
        dataset
            .records()
            .iter()
            .filter(|r| !self.contains(r.country()))
            .collect()
    }

    /// Append a random batch of unused countries once the whole rotation is mastered.
    ///
    /// Returns `None` when some active country is still below `threshold` or
    /// when the dataset is exhausted.
    pub fn maybe_expand<R: Rng + ?Sized>(
        &mut self,
        dataset: &Dataset,
        progress: &ProgressBook,
        threshold: u32,
        batch: usize,
        rng: &mut R,
    ) -> Option<Expansion> {
        if !self.all_mastered(progress, threshold) {
            return None;
        }
        let unused = self.unused(dataset);
        if unused.is_empty() {
            return None;
        }

        let amount = batch.min(unused.len());
        let added: Vec<CountryRecord> = index::sample(rng, unused.len(), amount)
            .into_iter()
            .map(|i| unused[i].clone())
            .collect();
        self.members.extend(added.iter().cloned());

        Some(Expansion {
            added,
            active_len: self.members.len(),
        })
    }
}

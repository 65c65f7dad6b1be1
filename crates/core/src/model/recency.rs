use std::collections::VecDeque;

/// Bounded, most-recent-first list of countries asked lately.
///
/// Pushing a country already present moves it to the front, so the queue
/// never holds duplicates. Once over capacity the oldest name is evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentlyAsked {
    capacity: usize,
    items: VecDeque<String>,
}

impl RecentlyAsked {
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity + 1),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.items.iter().any(|c| c == country)
    }

    /// Most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn push(&mut self, country: &str) {
        self.items.retain(|c| c != country);
        self.items.push_front(country.to_owned());
        self.items.truncate(self.capacity);
    }

    /// Forget everything except `country`.
    pub fn reset_to(&mut self, country: &str) {
        self.items.clear();
        self.items.push_front(country.to_owned());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

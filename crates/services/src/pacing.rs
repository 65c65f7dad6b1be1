use std::time::Duration;

/// Delay between a correct answer and the next question.
pub const DEFAULT_PACING: Duration = Duration::from_millis(1000);

/// A scheduled "show the next question" action.
///
/// Issued after a correct answer and redeemed with
/// [`QuizService::advance`](crate::QuizService::advance). A ticket only
/// works once, and any reset or earlier advance supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    generation: u64,
    delay: Duration,
}

impl PendingAdvance {
    pub(crate) fn new(generation: u64, delay: Duration) -> Self {
        Self { generation, delay }
    }

    pub(crate) fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn delay(self) -> Duration {
        self.delay
    }

    /// Sleep for the pacing delay, then hand the ticket back for redemption.
    pub async fn wait(self) -> Self {
        tokio::time::sleep(self.delay).await;
        self
    }
}

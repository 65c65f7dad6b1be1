mod active_set;
mod country;
mod progress;
mod question;
mod recency;
mod settings;
mod snapshot;

pub use active_set::{ActiveSet, Expansion};
pub use country::{CountryRecord, Dataset, DatasetError, RawCountry};
pub use progress::{ProgressBook, ProgressEntry, Scoring};
pub use question::{AnswerCheck, Question, RoundState};
pub use recency::RecentlyAsked;
pub use settings::{QuizSettings, SettingsError};
pub use snapshot::Snapshot;

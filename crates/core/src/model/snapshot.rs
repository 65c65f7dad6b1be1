use serde::{Deserialize, Serialize};

use crate::model::{CountryRecord, ProgressEntry};

/// Everything that survives a restart: mastery points and the active rotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub progress: Vec<ProgressEntry>,
    pub active_countries: Vec<CountryRecord>,
}

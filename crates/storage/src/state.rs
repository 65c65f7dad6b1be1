//! Versioned JSON envelope for the quiz snapshot.
//!
//! ```json
//! { "schemaVersion": 1, "data": { "progress": [...], "activeCountries": [...] } }
//! ```
//!
//! A blob with another version, or one that does not parse, is discarded and
//! reported as absent. There is no migration path between versions.

use std::sync::Arc;

use capitals_core::model::Snapshot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::{StateRepository, StorageError};

/// Envelope version understood by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Namespaced key the quiz state is stored under.
pub const STATE_KEY: &str = "capital-city-guesser:state";

/// Why a stored blob could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("malformed state blob: {0}")]
    Malformed(String),

    #[error("schema version {found} does not match {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    schema_version: u32,
    data: &'a Snapshot,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VersionProbe {
    schema_version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    data: Snapshot,
}

/// Serialize a snapshot into the current envelope format.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode(snapshot: &Snapshot) -> Result<String, StorageError> {
    serde_json::to_string(&EnvelopeRef {
        schema_version: SCHEMA_VERSION,
        data: snapshot,
    })
    .map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse a stored blob, checking the version before the payload.
///
/// # Errors
///
/// Returns `DecodeError` if the blob is unreadable or from another schema version.
pub fn decode(blob: &str) -> Result<Snapshot, DecodeError> {
    let probe: VersionProbe =
        serde_json::from_str(blob).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    if probe.schema_version != SCHEMA_VERSION {
        return Err(DecodeError::VersionMismatch {
            found: probe.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    let envelope: Envelope =
        serde_json::from_str(blob).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    Ok(envelope.data)
}

/// Reads and writes the quiz snapshot under a single key.
#[derive(Clone)]
pub struct StateStore {
    repo: Arc<dyn StateRepository>,
    key: String,
}

impl StateStore {
    #[must_use]
    pub fn new(repo: Arc<dyn StateRepository>) -> Self {
        Self {
            repo,
            key: STATE_KEY.to_owned(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the saved snapshot.
    ///
    /// Unusable blobs are logged and reported as `None`, never as errors.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the backend itself cannot be read.
    pub async fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let Some(blob) = self.repo.load(&self.key).await? else {
            return Ok(None);
        };
        match decode(&blob) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding saved quiz state");
                Ok(None)
            }
        }
    }

    /// Overwrite the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let blob = encode(snapshot)?;
        self.repo.save(&self.key, &blob).await?;
        tracing::debug!(
            key = %self.key,
            progress = snapshot.progress.len(),
            active = snapshot.active_countries.len(),
            "saved quiz state"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use capitals_core::model::{CountryRecord, ProgressEntry};
    use capitals_core::time::fixed_now;

    fn snapshot() -> Snapshot {
        Snapshot {
            progress: vec![
                ProgressEntry {
                    country: "France".into(),
                    points: 4,
                    last_asked_at: Some(fixed_now()),
                },
                ProgressEntry {
                    country: "Peru".into(),
                    points: 0,
                    last_asked_at: None,
                },
            ],
            active_countries: vec![
                CountryRecord::new("France", "Paris"),
                CountryRecord::new("Peru", "Lima"),
            ],
        }
    }

    fn store() -> (InMemoryRepository, StateStore) {
        let repo = InMemoryRepository::new();
        let store = StateStore::new(Arc::new(repo.clone()));
        (repo, store)
    }

    #[test]
    fn envelope_uses_camel_case_fields() {
        let blob = encode(&snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();

        assert_eq!(value["schemaVersion"], 1);
        assert_eq!(value["data"]["activeCountries"][0]["country"], "France");
        assert_eq!(value["data"]["activeCountries"][0]["capital"], "Paris");
        assert_eq!(value["data"]["progress"][0]["points"], 4);
        assert!(value["data"]["progress"][0]["lastAskedTimestamp"].is_string());
    }

    #[test]
    fn other_versions_are_rejected() {
        let blob = r#"{"schemaVersion": 2, "data": {"progress": [], "activeCountries": []}}"#;
        assert_eq!(
            decode(blob).unwrap_err(),
            DecodeError::VersionMismatch {
                found: 2,
                expected: 1
            }
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(decode("not json"), Err(DecodeError::Malformed(_))));
        assert!(matches!(
            decode(r#"{"schemaVersion": 1, "data": {"progress": "nope"}}"#),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn missing_timestamp_defaults_to_none() {
        let blob = r#"{"schemaVersion":1,"data":{"progress":[{"country":"Chad","points":3}],"activeCountries":[]}}"#;
        let decoded = decode(blob).unwrap();
        assert_eq!(decoded.progress[0].last_asked_at, None);
        assert_eq!(decoded.progress[0].points, 3);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (_repo, store) = store();
        store.save(&snapshot()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(snapshot()));
    }

    #[tokio::test]
    async fn absent_state_loads_as_none() {
        let (_repo, store) = store();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_or_stale_blob_loads_as_none() {
        let (repo, store) = store();
        repo.save(STATE_KEY, "{{{").await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);

        repo.save(
            STATE_KEY,
            r#"{"schemaVersion":0,"data":{"progress":[],"activeCountries":[]}}"#,
        )
        .await
        .unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn custom_key_is_isolated() {
        let (repo, store) = store();
        let other = StateStore::new(Arc::new(repo)).with_key("other");
        store.save(&snapshot()).await.unwrap();

        assert_eq!(other.key(), "other");
        assert_eq!(other.load().await.unwrap(), None);
    }
}

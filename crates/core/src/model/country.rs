use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("invalid dataset json: {0}")]
    Json(#[from] serde_json::Error),
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// A reference row as it arrives from a data source. The capital may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCountry {
    pub country: String,
    pub capital: Option<String>,
}

impl RawCountry {
    #[must_use]
    pub fn new(country: impl Into<String>, capital: Option<&str>) -> Self {
        Self {
            country: country.into(),
            capital: capital.map(str::to_owned),
        }
    }
}

/// A playable country: a unique name paired with a known capital.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryRecord {
    country: String,
    capital: String,
}

impl CountryRecord {
    #[must_use]
    pub fn new(country: impl Into<String>, capital: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            capital: capital.into(),
        }
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn capital(&self) -> &str {
        &self.capital
    }
}

//
// ─── DATASET ───────────────────────────────────────────────────────────────────
//

/// Ordered reference set of playable countries.
///
/// Built once at startup. Rows without a capital are dropped and the first
/// occurrence of a country name wins, so names are unique within the set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    #[must_use]
    pub fn from_raw(rows: impl IntoIterator<Item = RawCountry>) -> Self {
        let mut seen = HashSet::new();
        let records = rows
            .into_iter()
            .filter_map(|row| {
                let capital = row
                    .capital
                    .map(|c| c.trim().to_owned())
                    .filter(|c| !c.is_empty())?;
                let country = row.country.trim().to_owned();
                if country.is_empty() || !seen.insert(country.clone()) {
                    return None;
                }
                Some(CountryRecord { country, capital })
            })
            .collect();
        Self { records }
    }

    /// Parse a JSON array of `{ "country": ..., "capital": ... | null }`.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Json` if the document is not such an array.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let rows: Vec<RawCountry> = serde_json::from_str(json)?;
        Ok(Self::from_raw(rows))
    }

    #[must_use]
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.country == country)
    }

    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.get(country).is_some()
    }
}

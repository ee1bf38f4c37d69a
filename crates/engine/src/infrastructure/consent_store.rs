//! JSON-file consent storage.
//!
//! The file is a flat JSON object so it can hold other keys next to ours;
//! saving rewrites only [`DATA_PRIVACY_CONSENT_KEY`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pinball_ads_domain::ConsentStatus;
use serde_json::Value;

use crate::infrastructure::ports::{ConsentStore, ConsentStoreError};

pub const DATA_PRIVACY_CONSENT_KEY: &str = "pinball_ads.rewarded.data_privacy_consent";

/// Environment variable naming the consent file.
pub const CONSENT_FILE_ENV: &str = "PINBALL_ADS_CONSENT_FILE";
pub const DEFAULT_CONSENT_FILE: &str = "ad_consent.json";

#[derive(Debug, Clone)]
pub struct FileConsentStore {
    path: PathBuf,
}

impl FileConsentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var(CONSENT_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONSENT_FILE.to_string()),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConsentStoreError {
        ConsentStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, Value>, ConsentStoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_str(&json).map_err(|e| ConsentStoreError::Serialization(e.to_string()))
    }
}

impl ConsentStore for FileConsentStore {
    fn load(&self) -> Result<Option<ConsentStatus>, ConsentStoreError> {
        self.read_entries()?
            .remove(DATA_PRIVACY_CONSENT_KEY)
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|e| ConsentStoreError::Serialization(e.to_string()))
            })
            .transpose()
    }

    fn save(&self, consent: ConsentStatus) -> Result<(), ConsentStoreError> {
        let mut entries = self.read_entries()?;
        let value = serde_json::to_value(consent)
            .map_err(|e| ConsentStoreError::Serialization(e.to_string()))?;
        entries.insert(DATA_PRIVACY_CONSENT_KEY.to_string(), value);

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| ConsentStoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

//! Persisted data-privacy consent.

use std::path::PathBuf;

use pinball_ads_domain::ConsentStatus;

#[derive(Debug, thiserror::Error)]
pub enum ConsentStoreError {
    #[error("Consent store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Consent store data is invalid: {0}")]
    Serialization(String),
}

/// Keeps the player's consent across sessions.
#[cfg_attr(test, mockall::automock)]
pub trait ConsentStore: Send + Sync {
    /// `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<ConsentStatus>, ConsentStoreError>;

    fn save(&self, consent: ConsentStatus) -> Result<(), ConsentStoreError>;
}

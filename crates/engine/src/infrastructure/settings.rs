//! Ad network settings
//!
//! The settings document configures which ad units back which placements and
//! how requests are built. It is read from a JSON file whose path comes from
//! `PINBALL_ADS_SETTINGS` (default `ad_settings.json`). A missing file falls
//! back to the network's public test units, so a fresh checkout runs.
//!
//! ```json
//! {
//!   "app_id": "ca-app-pub-3940256099942544~3347511713",
//!   "default_rewarded_ad_id": "ca-app-pub-3940256099942544/5224354917",
//!   "custom_rewarded_ad_ids": { "lvl2": "ca-app-pub-3940256099942544/5224354917" },
//!   "enable_test_mode": true,
//!   "test_device_ids": ["33BE2250B43518CCDA7DE426D04EE231"],
//!   "targeting": {
//!     "child_directed_treatment": "unspecified",
//!     "extra_options": { "max_ad_content_rating": "G" }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pinball_ads_domain::{
    AdRequestProfile, AdUnitId, ChildDirectedTreatment, Placement, PlacementName,
};

use crate::infrastructure::ports::PlacementConfig;

/// Environment variable naming the settings file.
pub const SETTINGS_PATH_ENV: &str = "PINBALL_ADS_SETTINGS";
pub const DEFAULT_SETTINGS_PATH: &str = "ad_settings.json";
/// Environment override for `enable_test_mode`.
pub const TEST_MODE_ENV: &str = "PINBALL_ADS_TEST_MODE";

/// Public sample IDs published by the network for integration testing.
const TEST_APP_ID: &str = "ca-app-pub-3940256099942544~3347511713";
const TEST_REWARDED_AD_ID: &str = "ca-app-pub-3940256099942544/5224354917";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read ad settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ad settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Request targeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TargetingSettings {
    pub child_directed_treatment: ChildDirectedTreatment,
    pub extra_options: BTreeMap<String, String>,
}

/// Settings for one ad network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AdNetworkSettings {
    pub app_id: String,
    pub default_rewarded_ad_id: String,
    /// Keyed by placement name. Blank IDs count as unconfigured.
    pub custom_rewarded_ad_ids: BTreeMap<String, String>,
    pub enable_test_mode: bool,
    pub test_device_ids: Vec<String>,
    pub targeting: TargetingSettings,
}

impl AdNetworkSettings {
    /// Settings wired to the network's public test units, with test mode on.
    pub fn test_defaults() -> Self {
        let mut custom_rewarded_ad_ids = BTreeMap::new();
        custom_rewarded_ad_ids.insert("lvl2".to_string(), TEST_REWARDED_AD_ID.to_string());

        Self {
            app_id: TEST_APP_ID.to_string(),
            default_rewarded_ad_id: TEST_REWARDED_AD_ID.to_string(),
            custom_rewarded_ad_ids,
            enable_test_mode: true,
            test_device_ids: Vec::new(),
            targeting: TargetingSettings::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Like [`load`](Self::load), but a missing file yields
    /// [`test_defaults`](Self::test_defaults).
    pub fn load_or_test_defaults(path: &Path) -> Result<Self, SettingsError> {
        match Self::load(path) {
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::info!(
                    path = %path.display(),
                    "Ad settings file not found, using network test units"
                );
                Ok(Self::test_defaults())
            }
            other => other,
        }
    }

    /// Load from the path in `PINBALL_ADS_SETTINGS` and apply environment
    /// overrides.
    pub fn from_env() -> Result<Self, SettingsError> {
        let path = std::env::var(SETTINGS_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        let settings = Self::load_or_test_defaults(Path::new(&path))?;
        Ok(settings.with_test_mode_override(std::env::var(TEST_MODE_ENV).ok().as_deref()))
    }

    /// Apply a textual test-mode override. Unrecognised values are logged and
    /// leave the setting unchanged.
    pub fn with_test_mode_override(mut self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        match parse_flag(raw) {
            Some(enabled) => self.enable_test_mode = enabled,
            None => tracing::warn!(
                value = %raw,
                env = TEST_MODE_ENV,
                "Ignoring unrecognised test mode override"
            ),
        }
        self
    }

    /// Static request parameters derived from these settings.
    pub fn request_profile(&self) -> AdRequestProfile {
        AdRequestProfile {
            test_mode: self.enable_test_mode,
            test_device_ids: self.test_device_ids.clone(),
            child_directed_treatment: self.targeting.child_directed_treatment,
            extras: self.targeting.extra_options.clone(),
        }
    }

    /// Custom placements that have a usable ad-unit ID, in key order.
    ///
    /// Keys that are not valid placement names are skipped with a warning.
    pub fn custom_placements(&self) -> Vec<Placement> {
        self.custom_rewarded_ad_ids
            .iter()
            .filter(|(_, id)| AdUnitId::parse_optional(id).is_some())
            .filter_map(|(key, _)| match PlacementName::new(key.as_str()) {
                Ok(name) => Some(Placement::Custom(name)),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping invalid custom placement key");
                    None
                }
            })
            .collect()
    }
}

impl PlacementConfig for AdNetworkSettings {
    fn rewarded_unit_id(&self, placement: &Placement) -> Option<AdUnitId> {
        match placement {
            Placement::Default => AdUnitId::parse_optional(&self.default_rewarded_ad_id),
            Placement::Custom(name) => self
                .custom_rewarded_ad_ids
                .iter()
                .find(|(key, _)| key.trim() == name.as_str())
                .and_then(|(_, id)| AdUnitId::parse_optional(id)),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

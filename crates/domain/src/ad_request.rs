//! Ad request parameters.
//!
//! Every load the client issues carries an [`AdRequest`]. Requests are built
//! from an [`AdRequestProfile`] (the static part, from network settings) plus
//! the player's current [`ConsentStatus`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::{ChildDirectedTreatment, ConsentStatus};

/// Device ID that matches every emulator/simulator in test mode.
pub const SIMULATOR_TEST_DEVICE: &str = "SIMULATOR";

/// Extra that asks the network for non-personalized ads.
pub const NON_PERSONALIZED_EXTRA_KEY: &str = "npa";
pub const NON_PERSONALIZED_EXTRA_VALUE: &str = "1";

/// Parameters sent with a single load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdRequest {
    test_devices: Vec<String>,
    child_directed: Option<bool>,
    extras: BTreeMap<String, String>,
}

impl AdRequest {
    pub fn test_devices(&self) -> &[String] {
        &self.test_devices
    }

    /// `None` when the request is untagged.
    pub fn child_directed(&self) -> Option<bool> {
        self.child_directed
    }

    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    pub fn is_test_request(&self) -> bool {
        !self.test_devices.is_empty()
    }

    pub fn is_non_personalized(&self) -> bool {
        self.extra(NON_PERSONALIZED_EXTRA_KEY) == Some(NON_PERSONALIZED_EXTRA_VALUE)
    }
}

/// Static request settings: targeting and test mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AdRequestProfile {
    pub test_mode: bool,
    pub test_device_ids: Vec<String>,
    pub child_directed_treatment: ChildDirectedTreatment,
    pub extras: BTreeMap<String, String>,
}

impl AdRequestProfile {
    /// Build the request for one load.
    ///
    /// - Test mode lists the simulator plus each configured device ID, trimmed;
    ///   blank IDs are dropped.
    /// - Extras with an empty key or value are skipped.
    /// - Revoked consent adds `npa=1`, overriding any configured `npa` extra.
    ///
    /// ```
    /// use pinball_ads_domain::{AdRequestProfile, ConsentStatus};
    ///
    /// let profile = AdRequestProfile::default();
    /// assert!(profile.build(ConsentStatus::Revoked).is_non_personalized());
    /// assert!(!profile.build(ConsentStatus::Granted).is_non_personalized());
    /// ```
    pub fn build(&self, consent: ConsentStatus) -> AdRequest {
        let mut request = AdRequest {
            child_directed: self.child_directed_treatment.as_tag(),
            ..AdRequest::default()
        };

        for (key, value) in &self.extras {
            if !key.is_empty() && !value.is_empty() {
                request.extras.insert(key.clone(), value.clone());
            }
        }

        if self.test_mode {
            request.test_devices.push(SIMULATOR_TEST_DEVICE.to_string());
            request.test_devices.extend(
                self.test_device_ids
                    .iter()
                    .map(|id| id.trim())
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
            );
        }

        if consent.requires_non_personalized() {
            request.extras.insert(
                NON_PERSONALIZED_EXTRA_KEY.to_string(),
                NON_PERSONALIZED_EXTRA_VALUE.to_string(),
            );
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_builds_plain_request() {
        let request = AdRequestProfile::default().build(ConsentStatus::Unknown);
        assert!(request.test_devices().is_empty());
        assert!(request.extras().is_empty());
        assert_eq!(request.child_directed(), None);
        assert!(!request.is_test_request());
    }

    #[test]
    fn test_mode_adds_simulator_and_trimmed_devices() {
        let profile = AdRequestProfile {
            test_mode: true,
            test_device_ids: vec!["  ABC123 ".into(), "".into(), "\tDEF456".into()],
            ..AdRequestProfile::default()
        };

        let request = profile.build(ConsentStatus::Granted);
        assert_eq!(
            request.test_devices(),
            &[
                SIMULATOR_TEST_DEVICE.to_string(),
                "ABC123".to_string(),
                "DEF456".to_string()
            ]
        );
    }

    #[test]
    fn test_devices_ignored_outside_test_mode() {
        let profile = AdRequestProfile {
            test_mode: false,
            test_device_ids: vec!["ABC123".into()],
            ..AdRequestProfile::default()
        };
        assert!(!profile.build(ConsentStatus::Unknown).is_test_request());
    }

    #[test]
    fn blank_extras_are_skipped() {
        let mut extras = BTreeMap::new();
        extras.insert("max_ad_content_rating".to_string(), "G".to_string());
        extras.insert("".to_string(), "orphan".to_string());
        extras.insert("empty_value".to_string(), "".to_string());

        let profile = AdRequestProfile {
            extras,
            ..AdRequestProfile::default()
        };
        let request = profile.build(ConsentStatus::Unknown);

        assert_eq!(request.extras().len(), 1);
        assert_eq!(request.extra("max_ad_content_rating"), Some("G"));
    }

    #[test]
    fn child_directed_treatment_is_tagged() {
        let profile = AdRequestProfile {
            child_directed_treatment: ChildDirectedTreatment::Yes,
            ..AdRequestProfile::default()
        };
        assert_eq!(profile.build(ConsentStatus::Unknown).child_directed(), Some(true));
    }

    #[test]
    fn revoked_consent_forces_npa() {
        let mut extras = BTreeMap::new();
        extras.insert(NON_PERSONALIZED_EXTRA_KEY.to_string(), "0".to_string());
        let profile = AdRequestProfile {
            extras,
            ..AdRequestProfile::default()
        };

        assert!(!profile.build(ConsentStatus::Granted).is_non_personalized());
        assert!(profile.build(ConsentStatus::Revoked).is_non_personalized());
    }

    #[test]
    fn request_serializes_with_snake_case_keys() {
        let profile = AdRequestProfile {
            test_mode: true,
            child_directed_treatment: ChildDirectedTreatment::No,
            ..AdRequestProfile::default()
        };
        let json = serde_json::to_value(profile.build(ConsentStatus::Revoked)).unwrap();

        assert_eq!(json["test_devices"][0], SIMULATOR_TEST_DEVICE);
        assert_eq!(json["child_directed"], false);
        assert_eq!(json["extras"][NON_PERSONALIZED_EXTRA_KEY], "1");
    }
}

//! Reward payload granted by a rewarded ad.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the network grants when a rewarded ad is watched to the end.
///
/// Amount and type come from the ad-unit configuration on the network side;
/// the game decides what they mean (extra balls, score multiplier, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Reward {
    pub amount: f64,
    pub reward_type: String,
}

impl Reward {
    pub fn new(amount: f64, reward_type: impl Into<String>) -> Self {
        Self {
            amount,
            reward_type: reward_type.into(),
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.reward_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_keys() {
        let json = serde_json::to_value(Reward::new(2.0, "extra_ball")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "amount": 2.0, "reward_type": "extra_ball" })
        );
    }

    #[test]
    fn display_shows_amount_then_type() {
        assert_eq!(Reward::new(1.0, "multiplier").to_string(), "1 multiplier");
    }
}

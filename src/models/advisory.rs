//! Advisory tiers selected by risk index

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed guidance tier for a risk index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    /// Risk index 80 and above
    Severe,
    /// 70-79
    High,
    /// 50-69
    Moderate,
    /// 30-49
    LowModerate,
    /// Below 30
    Low,
}

impl Advisory {
    /// Select the advisory for a risk index, highest threshold first
    #[must_use]
    pub fn for_risk_index(risk_index: u32) -> Self {
        match risk_index {
            80.. => Advisory::Severe,
            70..=79 => Advisory::High,
            50..=69 => Advisory::Moderate,
            30..=49 => Advisory::LowModerate,
            _ => Advisory::Low,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Severe => "Severe health risk. Avoid outdoor activity and stay indoors.",
            Advisory::High => "High health risk. Limit time outdoors and wear protective gear.",
            Advisory::Moderate => {
                "Moderate health risk. Sensitive groups should reduce prolonged exertion outdoors."
            }
            Advisory::LowModerate => {
                "Low to moderate health risk. Conditions are generally acceptable."
            }
            Advisory::Low => "Low health risk. Enjoy your time outdoors.",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(85, Advisory::Severe)]
    #[case(133, Advisory::Severe)]
    #[case(80, Advisory::Severe)]
    #[case(79, Advisory::High)]
    #[case(72, Advisory::High)]
    #[case(70, Advisory::High)]
    #[case(55, Advisory::Moderate)]
    #[case(50, Advisory::Moderate)]
    #[case(49, Advisory::LowModerate)]
    #[case(35, Advisory::LowModerate)]
    #[case(30, Advisory::LowModerate)]
    #[case(29, Advisory::Low)]
    #[case(10, Advisory::Low)]
    #[case(0, Advisory::Low)]
    fn test_advisory_thresholds(#[case] risk_index: u32, #[case] expected: Advisory) {
        assert_eq!(Advisory::for_risk_index(risk_index), expected);
    }

    #[test]
    fn test_messages_are_distinct() {
        let tiers = [
            Advisory::Severe,
            Advisory::High,
            Advisory::Moderate,
            Advisory::LowModerate,
            Advisory::Low,
        ];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
        assert!(Advisory::Severe.to_string().starts_with("Severe"));
    }
}

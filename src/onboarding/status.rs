//! Onboarding status — the durable marker distinguishing identities that
//! never finished onboarding from fully onboarded ones.

use serde::{Deserialize, Serialize};

/// Per-identity onboarding status.
///
/// Written exactly once per identity, only after profile publication has
/// succeeded; it never regresses automatically. A failed start attempt
/// leaves no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    #[default]
    NotStarted,
    Started,
}

impl OnboardingStatus {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: OnboardingStatus) -> bool {
        matches!((self, target), (Self::NotStarted, Self::Started))
    }
}

impl std::fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotStarted => "not_started",
            Self::Started => "started",
        };
        write!(f, "{s}")
    }
}

//! Onboarding: the fixed three-question setup a new user completes.

use serde::{Deserialize, Serialize};

/// One of the three onboarding questions, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnboardingStep {
    #[default]
    Q1,
    Q2,
    Q3,
}

impl OnboardingStep {
    /// Number of onboarding steps.
    pub const TOTAL: usize = 3;

    /// Zero-based index.
    pub fn index(self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
        }
    }

    /// One-based index, as shown to the user ("第 2 题").
    pub fn display_index(self) -> usize {
        self.index() + 1
    }

    /// The following step, or `None` after the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Q1 => Some(Self::Q2),
            Self::Q2 => Some(Self::Q3),
            Self::Q3 => None,
        }
    }

    /// Whether this is the final step.
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_advance_in_order_and_stop() {
        assert_eq!(OnboardingStep::Q1.next(), Some(OnboardingStep::Q2));
        assert_eq!(OnboardingStep::Q2.next(), Some(OnboardingStep::Q3));
        assert_eq!(OnboardingStep::Q3.next(), None);
    }

    #[test]
    fn indices_cover_total() {
        let mut step = OnboardingStep::Q1;
        let mut seen = vec![step.display_index()];
        while let Some(next) = step.next() {
            assert!(next > step);
            step = next;
            seen.push(step.display_index());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(seen.len(), OnboardingStep::TOTAL);
    }
}

//! Overlays: modal screens presented above the current tab.

use serde::{Deserialize, Serialize};

use super::{MessageItem, OnboardingStep, Viewpoint};

/// The modal screen currently presented, if any.
///
/// Held as `Option<Overlay>`: at most one is presented at a time and
/// presenting a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "overlay", rename_all = "camelCase")]
pub enum Overlay {
    /// Recording an answer to an onboarding question.
    OnboardingRecording { step: OnboardingStep },

    /// Previewing what the persona made of the recorded answer.
    OnboardingPreview { step: OnboardingStep },

    /// All onboarding questions answered.
    OnboardingDone,

    /// Detail of my persona's answer to today's question.
    AnswerDetail,

    /// Composing a probe to another persona's viewpoint.
    Probe { viewpoint: Viewpoint },

    Settings,

    /// Inviting friends to calibrate my persona.
    Invite,

    /// A message thread, as it looked when opened.
    MessageDetail { message: MessageItem },

    /// One of my earlier answers.
    PastAnswer { viewpoint: Viewpoint },
}

impl Overlay {
    /// Stable identifier, distinct per variant and payload.
    pub fn key(&self) -> String {
        match self {
            Self::OnboardingRecording { step } => format!("onboarding-recording-{}", step.index()),
            Self::OnboardingPreview { step } => format!("onboarding-preview-{}", step.index()),
            Self::OnboardingDone => "onboarding-done".into(),
            Self::AnswerDetail => "answer-detail".into(),
            Self::Probe { viewpoint } => format!("probe-{}", viewpoint.id),
            Self::Settings => "settings".into(),
            Self::Invite => "invite".into(),
            Self::MessageDetail { message } => format!("message-{}", message.id),
            Self::PastAnswer { viewpoint } => format!("past-{}", viewpoint.id),
        }
    }

    /// Whether this is an onboarding recording overlay.
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::OnboardingRecording { .. })
    }
}

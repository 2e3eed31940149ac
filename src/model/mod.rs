//! Core data model for Lumos.
//!
//! These types are the content and navigation vocabulary of the app:
//! tabs, onboarding steps, questions, viewpoints, messages, and the
//! overlay that may be presented on top of the current tab.

mod message;
mod onboarding;
mod overlay;
mod question;
mod tab;
mod viewpoint;

pub use message::{MessageItem, MessageKind};
pub use onboarding::OnboardingStep;
pub use overlay::Overlay;
pub use question::Question;
pub use tab::NavigationTab;
pub use viewpoint::Viewpoint;

//! Daily questions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily question. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub text: String,

    /// How many people have answered so far.
    pub answered_count: u32,

    /// Relative date label for past questions ("昨天", "周一").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,

    pub is_today: bool,
}

impl Question {
    /// Today's question: no date label.
    pub fn today(text: impl Into<String>, answered_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            answered_count,
            date_label: None,
            is_today: true,
        }
    }

    /// A past question with its relative date label.
    pub fn past(text: impl Into<String>, answered_count: u32, date_label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            answered_count,
            date_label: Some(date_label.into()),
            is_today: false,
        }
    }
}

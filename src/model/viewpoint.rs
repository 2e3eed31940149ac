//! Viewpoints: answers to questions, by me or by another persona.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An answer to a question.
///
/// The question is carried as text, not as a reference to a [`Question`](super::Question).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewpoint {
    pub id: Uuid,
    pub owner_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_title: Option<String>,

    pub is_mine: bool,
    pub question: String,
    pub answer: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// How many probes this viewpoint has received.
    #[serde(default)]
    pub probe_count: u32,

    /// Relative time label ("刚刚", "2天前").
    pub time_label: String,
}

impl Viewpoint {
    /// Whether the viewpoint carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match over owner, title, question, and answer.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let owner_title = self.owner_title.as_deref().unwrap_or_default();
        [
            self.owner_name.as_str(),
            owner_title,
            self.question.as_str(),
            self.answer.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

//! Message list entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a message thread is with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    /// A thread with someone else's persona, opened by probing them.
    OtherPersona,

    /// Someone probing my persona.
    MyPersona,

    /// System notices.
    System,
}

/// One row in the message list.
///
/// `title` and `kind` are fixed; preview, time label, and unread state
/// change as probes arrive and the thread is opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageItem {
    pub id: Uuid,
    pub title: String,
    pub preview: String,
    pub time_label: String,
    pub is_unread: bool,
    pub kind: MessageKind,
}

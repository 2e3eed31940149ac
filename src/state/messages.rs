//! The message list and its per-persona thread index.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use uuid::Uuid;

use crate::model::{MessageItem, MessageKind};

/// Time label for anything that just happened.
pub const JUST_NOW: &str = "刚刚";

/// Messages, most recent first, with other-persona threads indexed by title.
///
/// The index holds at most one entry per title, so probing the same persona
/// twice updates one thread instead of opening a second.
#[derive(Debug, Clone, Default)]
pub struct MessageBook {
    items: Vec<MessageItem>,
    threads: HashMap<String, Uuid>,
}

impl MessageBook {
    /// Builds the book from an ordered list.
    ///
    /// If several other-persona messages share a title, the front-most one
    /// is the thread; seeds are validated against this beforehand.
    pub fn new(items: Vec<MessageItem>) -> Self {
        let mut threads = HashMap::new();
        for item in &items {
            if item.kind == MessageKind::OtherPersona {
                threads.entry(item.title.clone()).or_insert(item.id);
            }
        }
        Self { items, threads }
    }

    pub fn items(&self) -> &[MessageItem] {
        &self.items
    }

    /// Clears the unread flag in place. Returns whether the message exists.
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|m| m.id == id) {
            Some(item) => {
                item.is_unread = false;
                true
            }
            None => false,
        }
    }

    /// Records a new outgoing line on the thread titled `title`.
    ///
    /// An existing thread is updated where it stands; otherwise a new one
    /// is inserted at the front. Either way it ends up unread and stamped
    /// [`JUST_NOW`]. Returns the thread's id.
    pub fn upsert_thread(&mut self, title: String, preview: &str) -> Uuid {
        match self.threads.entry(title) {
            Entry::Occupied(entry) => {
                let id = *entry.get();
                if let Some(item) = self.items.iter_mut().find(|m| m.id == id) {
                    item.preview = preview.to_string();
                    item.time_label = JUST_NOW.to_string();
                    item.is_unread = true;
                }
                id
            }
            Entry::Vacant(entry) => {
                let item = MessageItem {
                    id: Uuid::new_v4(),
                    title: entry.key().clone(),
                    preview: preview.to_string(),
                    time_label: JUST_NOW.to_string(),
                    is_unread: true,
                    kind: MessageKind::OtherPersona,
                };
                let id = item.id;
                self.items.insert(0, item);
                entry.insert(id);
                id
            }
        }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|m| m.is_unread).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(title: &str, kind: MessageKind) -> MessageItem {
        MessageItem {
            id: Uuid::new_v4(),
            title: title.into(),
            preview: "old".into(),
            time_label: "昨天".into(),
            is_unread: false,
            kind,
        }
    }

    #[test]
    fn new_thread_goes_to_front() {
        let mut book = MessageBook::new(vec![message("系统通知", MessageKind::System)]);
        let id = book.upsert_thread("林晓的分身".into(), "hello");

        assert_eq!(book.items().len(), 2);
        assert_eq!(book.items()[0].id, id);
        assert_eq!(book.items()[0].kind, MessageKind::OtherPersona);
        assert!(book.items()[0].is_unread);
        assert_eq!(book.items()[0].time_label, JUST_NOW);
    }

    #[test]
    fn existing_thread_updates_in_place() {
        let existing = message("林晓的分身", MessageKind::OtherPersona);
        let existing_id = existing.id;
        let mut book = MessageBook::new(vec![message("系统通知", MessageKind::System), existing]);

        let id = book.upsert_thread("林晓的分身".into(), "second");

        assert_eq!(id, existing_id);
        assert_eq!(book.items().len(), 2);
        // Position is kept: still behind the system notice.
        assert_eq!(book.items()[1].id, existing_id);
        assert_eq!(book.items()[1].preview, "second");
        assert_eq!(book.items()[1].time_label, JUST_NOW);
        assert!(book.items()[1].is_unread);
    }

    #[test]
    fn same_title_of_other_kind_is_not_a_thread() {
        let mut book = MessageBook::new(vec![message("林晓的分身", MessageKind::MyPersona)]);
        book.upsert_thread("林晓的分身".into(), "probe");

        assert_eq!(book.items().len(), 2);
        assert_eq!(book.items()[0].kind, MessageKind::OtherPersona);
        assert_eq!(book.items()[1].preview, "old");
    }

    #[test]
    fn mark_read_reports_missing() {
        let item = message("a", MessageKind::System);
        let id = item.id;
        let mut book = MessageBook::new(vec![item]);

        assert!(book.mark_read(id));
        assert!(!book.mark_read(Uuid::new_v4()));
        assert_eq!(book.unread_count(), 0);
    }

    #[test]
    fn seeded_duplicate_titles_index_the_front_most() {
        let front = message("陈磊的分身", MessageKind::OtherPersona);
        let front_id = front.id;
        let mut book = MessageBook::new(vec![front, message("陈磊的分身", MessageKind::OtherPersona)]);

        assert_eq!(book.upsert_thread("陈磊的分身".into(), "hi"), front_id);
        assert_eq!(book.items()[0].preview, "hi");
        assert_eq!(book.items()[1].preview, "old");
    }
}

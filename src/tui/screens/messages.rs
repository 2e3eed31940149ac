//! Messages: probes to my persona first, then everything else.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::model::{MessageItem, MessageKind, NavigationTab};
use crate::state::AppState;

use super::{ACCENT, MUTED, NORMAL, pointer, row_style, step};

#[derive(Debug, Default)]
pub struct MessagesScreen {
    selected: usize,
}

/// Messages in display order: the two sections, concatenated.
fn rows(state: &AppState) -> Vec<&MessageItem> {
    let mut rows = state.persona_messages();
    rows.extend(state.other_messages());
    rows
}

impl MessagesScreen {
    pub fn help(state: &AppState) -> &'static str {
        if state.messages().is_empty() {
            " d discover  1-4 tabs  q quit"
        } else {
            " ↑↓ navigate  ⏎ open  1-4 tabs  q quit"
        }
    }

    pub fn on_key(&mut self, code: KeyCode, state: &mut AppState) {
        let len = state.messages().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = step(self.selected, len, false),
            KeyCode::Down | KeyCode::Char('j') => self.selected = step(self.selected, len, true),
            KeyCode::Char('d') if len == 0 => state.select_tab(NavigationTab::Discover),
            KeyCode::Enter => {
                let message = rows(state).get(self.selected).map(|m| (*m).clone());
                if let Some(message) = message {
                    state.open_message_detail(&message);
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.messages().is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled("还没有消息", NORMAL)),
                Line::from(Span::styled("去发现页追问一个分身，回复会出现在这里。", MUTED)),
                Line::default(),
                Line::from(Span::styled("d 去发现页看看", ACCENT)),
            ])
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
            frame.render_widget(empty, area);
            return;
        }

        let mine = state.persona_messages();
        let others = state.other_messages();
        let mut items = Vec::new();
        let mut index = 0;
        for (header, section) in [("对你分身的追问", &mine), ("分身世界的其他动静", &others)] {
            if section.is_empty() {
                continue;
            }
            items.push(ListItem::new(Line::from(Span::styled(header, MUTED))));
            for message in section {
                items.push(self.row(message, index));
                index += 1;
            }
            items.push(ListItem::new(Line::default()));
        }
        let list = List::new(items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(list, area);
    }

    fn row(&self, message: &MessageItem, index: usize) -> ListItem<'static> {
        let selected = index == self.selected;
        let dot = if message.is_unread {
            Span::styled("● ", ACCENT)
        } else {
            Span::raw("  ")
        };
        let kind = match message.kind {
            MessageKind::OtherPersona => "分身",
            MessageKind::MyPersona => "追问",
            MessageKind::System => "系统",
        };
        ListItem::new(vec![
            Line::from(vec![
                pointer(selected),
                dot,
                Span::styled(message.title.clone(), row_style(selected)),
                Span::styled(format!("  [{kind}] {}", message.time_label), MUTED),
            ]),
            Line::from(Span::styled(format!("    {}", message.preview), NORMAL)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    use crate::model::Overlay;
    use crate::seed::Seed;

    #[test]
    fn empty_list_offers_discover() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = MessagesScreen::default();
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(state.active_overlay().is_none());

        screen.on_key(KeyCode::Char('d'), &mut state);
        assert_eq!(state.current_tab(), NavigationTab::Discover);
    }

    #[test]
    fn rows_put_my_persona_section_first() {
        let mut seed = Seed::builtin();
        seed.messages = vec![MessageItem {
            id: Uuid::new_v4(),
            title: "有人追问了你的分身".into(),
            preview: "?".into(),
            time_label: "1小时前".into(),
            is_unread: true,
            kind: MessageKind::MyPersona,
        }];
        let mut state = AppState::new(seed);
        let vp = state.discover_feed()[0].clone();
        state.record_probe(&vp, "hello persona");

        // The probe thread is first in the list but second on screen.
        assert_eq!(state.messages()[0].kind, MessageKind::OtherPersona);
        let rows = rows(&state);
        assert_eq!(rows[0].kind, MessageKind::MyPersona);
        assert_eq!(rows[1].kind, MessageKind::OtherPersona);

        let mut screen = MessagesScreen::default();
        screen.on_key(KeyCode::Down, &mut state);
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(matches!(
            state.active_overlay(),
            Some(Overlay::MessageDetail { message }) if message.title == "林晓的分身"
        ));
        assert!(!state.messages()[0].is_unread);
    }
}

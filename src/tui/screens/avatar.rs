//! Avatar: my persona's profile and the answers it was built from.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::state::{ALL_TOPICS, AppState};

use super::{ACCENT, HIGHLIGHT, MUTED, NORMAL, pointer, row_style, step};

/// Mock alignment between the persona and its owner, in percent.
const ALIGNMENT_PERCENT: u16 = 68;

#[derive(Debug, Default)]
pub struct AvatarScreen {
    /// Index into [`AppState::my_topics`].
    topic: usize,
    selected: usize,
}

impl AvatarScreen {
    pub const HELP: &str = " ←→ topic  ↑↓ navigate  ⏎ open  i invite  1-4 tabs  q quit";

    fn topic<'a>(&self, state: &'a AppState) -> &'a str {
        state
            .my_topics()
            .get(self.topic)
            .copied()
            .unwrap_or(ALL_TOPICS)
    }

    pub fn on_key(&mut self, code: KeyCode, state: &mut AppState) {
        let topics = state.my_topics().len();
        let shown = state.my_viewpoints_in(self.topic(state)).len();
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.topic = (self.topic + topics - 1) % topics;
                self.selected = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.topic = (self.topic + 1) % topics;
                self.selected = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = step(self.selected, shown, false),
            KeyCode::Down | KeyCode::Char('j') => self.selected = step(self.selected, shown, true),
            KeyCode::Char('i') => state.open_invite_flow(),
            KeyCode::Enter => {
                let question = state
                    .my_viewpoints_in(self.topic(state))
                    .get(self.selected)
                    .and_then(|vp| {
                        std::iter::once(state.today_question())
                            .chain(state.past_questions())
                            .find(|q| q.text == vp.question)
                    })
                    .cloned();
                if let Some(question) = question {
                    state.open_past_answer(&question);
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(5), // profile
            Constraint::Length(2), // topics
            Constraint::Min(0),    // answers
        ])
        .split(area);

        let (name, title) = state
            .my_viewpoints()
            .first()
            .map(|vp| (vp.owner_name.as_str(), vp.owner_title.as_deref().unwrap_or_default()))
            .unwrap_or_default();
        let status = if state.has_finished_onboarding() {
            Span::styled("分身在线", ACCENT)
        } else {
            Span::styled("分身还在建立中，先回答今日页的问题", MUTED)
        };
        let profile = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{name}的分身"), HIGHLIGHT),
                Span::styled(format!("  {title}"), MUTED),
            ]),
            Line::from(status),
            Line::from(vec![
                Span::styled("分身对齐率 ", MUTED),
                Span::styled(format!("{ALIGNMENT_PERCENT}%"), ACCENT),
            ]),
            Line::from(Span::styled("i 邀请朋友校准分身", MUTED)),
        ])
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(profile, chunks[0]);

        let current = self.topic(state);
        let mut chips = Vec::new();
        for topic in state.my_topics() {
            let style = if topic == current { ACCENT } else { MUTED };
            chips.push(Span::styled(format!("[{topic}] "), style));
        }
        let chips = Paragraph::new(Line::from(chips))
            .block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(chips, chunks[1]);

        let items: Vec<ListItem> = state
            .my_viewpoints_in(current)
            .iter()
            .enumerate()
            .map(|(i, vp)| {
                let selected = i == self.selected;
                ListItem::new(vec![
                    Line::from(vec![
                        pointer(selected),
                        Span::styled(vp.question.clone(), row_style(selected)),
                    ]),
                    Line::from(Span::styled(format!("  {}", vp.answer), NORMAL)),
                    Line::from(Span::styled(
                        format!("  {} · {} 次追问", vp.time_label, vp.probe_count),
                        MUTED,
                    )),
                    Line::default(),
                ])
            })
            .collect();
        let list = List::new(items).block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(list, chunks[2]);
    }
}

//! Discover: other personas' viewpoints, searchable, each probe-able once.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::state::AppState;

use super::{ACCENT, HIGHLIGHT, MUTED, NORMAL, pointer, row_style, step};

#[derive(Debug, Default)]
pub struct DiscoverScreen {
    selected: usize,

    /// `Some` while the search box has focus.
    query: Option<String>,
}

impl DiscoverScreen {
    /// Whether typed characters go to the search box.
    pub fn captures_text(&self) -> bool {
        self.query.is_some()
    }

    fn query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    pub fn on_key(&mut self, code: KeyCode, state: &mut AppState) {
        let shown = state.search_discover(self.query()).len();
        let searching = self.captures_text();
        match code {
            KeyCode::Esc if searching => {
                self.query = None;
                self.selected = 0;
            }
            KeyCode::Backspace if searching => {
                if let Some(query) = self.query.as_mut() {
                    query.pop();
                }
                self.selected = 0;
            }
            KeyCode::Char(c) if searching => {
                if let Some(query) = self.query.as_mut() {
                    query.push(c);
                }
                self.selected = 0;
            }
            KeyCode::Char('/') => self.query = Some(String::new()),
            KeyCode::Up | KeyCode::Char('k') => self.selected = step(self.selected, shown, false),
            KeyCode::Down | KeyCode::Char('j') => self.selected = step(self.selected, shown, true),
            KeyCode::Enter | KeyCode::Char('p') => self.probe_selected(state),
            _ => {}
        }
    }

    fn probe_selected(&self, state: &mut AppState) {
        let target = state
            .search_discover(self.query())
            .get(self.selected)
            .map(|v| (*v).clone());
        // One probe per viewpoint: the action is disabled once sent.
        if let Some(viewpoint) = target
            && !state.has_probed(viewpoint.id)
        {
            state.open_probe_composer(&viewpoint);
        }
    }

    pub fn help(&self) -> &'static str {
        if self.captures_text() {
            " type to search  ↑↓ navigate  ⏎ probe  esc done"
        } else {
            " ↑↓ navigate  ⏎ probe  / search  1-4 tabs  q quit"
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // search
            Constraint::Min(0),    // feed
        ])
        .split(area);

        let search = match &self.query {
            Some(q) => Line::from(vec![
                Span::styled("搜索 ", ACCENT),
                Span::styled(q.clone(), HIGHLIGHT),
                Span::styled("▏", ACCENT),
            ]),
            None => Line::from(vec![
                Span::styled("/ 搜索问题、回答或人名…", MUTED),
                Span::styled(
                    format!(
                        "  {} 条观点 · 已追问 {}",
                        state.discover_feed().len(),
                        state.probed().len()
                    ),
                    MUTED,
                ),
            ]),
        };
        let search = Paragraph::new(search).block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(search, chunks[0]);

        let feed = state.search_discover(self.query());
        if feed.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled("暂时没有匹配的观点", MUTED)),
                Line::from(Span::styled("可以换个说法再试试。", MUTED)),
            ])
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
            frame.render_widget(empty, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = feed
            .iter()
            .enumerate()
            .map(|(i, vp)| {
                let selected = i == self.selected;
                let title = vp.owner_title.as_deref().unwrap_or_default();
                let action = if state.has_probed(vp.id) {
                    Span::styled("已追问", MUTED)
                } else {
                    Span::styled("追问分身", ACCENT)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        pointer(selected),
                        Span::styled(vp.owner_name.clone(), row_style(selected)),
                        Span::styled(format!("  {title} · {}", vp.time_label), MUTED),
                    ]),
                    Line::from(Span::styled(format!("  {}", vp.question), MUTED)),
                    Line::from(Span::styled(format!("  {}", vp.answer), NORMAL)),
                    Line::from(vec![
                        Span::styled(
                            format!("  #{}  {} 次追问  ", vp.tags.join(" #"), vp.probe_count),
                            MUTED,
                        ),
                        action,
                    ]),
                    Line::default(),
                ])
            })
            .collect();
        let list = List::new(items).block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(list, chunks[1]);
    }
}

//! Today: onboarding or today's persona answer, then past questions.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph, Wrap};

use crate::model::OnboardingStep;
use crate::state::AppState;

use super::{ACCENT, MUTED, NORMAL, pointer, row_style, step};

/// Row 0 is the top card; rows after it are past questions.
#[derive(Debug, Default)]
pub struct TodayScreen {
    selected: usize,
}

impl TodayScreen {
    pub fn on_key(&mut self, code: KeyCode, state: &mut AppState) {
        let rows = state.past_questions().len() + 1;
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = step(self.selected, rows, false),
            KeyCode::Down | KeyCode::Char('j') => self.selected = step(self.selected, rows, true),
            KeyCode::Char('s') => state.open_settings(),
            KeyCode::Enter => {
                if self.selected == 0 {
                    if state.has_finished_onboarding() {
                        state.open_answer_detail();
                    } else {
                        state.begin_onboarding_recording();
                    }
                } else if let Some(question) = state.past_questions().get(self.selected - 1) {
                    let question = question.clone();
                    state.open_past_answer(&question);
                }
            }
            _ => {}
        }
    }

    pub const HELP: &str = " ↑↓ navigate  ⏎ open  s settings  1-4 tabs  q quit";

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(7), // top card
            Constraint::Length(1), // past header
            Constraint::Min(0),    // past questions
        ])
        .split(area);

        let card_style = row_style(self.selected == 0);
        let mut card = Vec::new();
        if state.has_finished_onboarding() {
            let question = state.today_question();
            card.push(Line::from(Span::styled(
                format!("今日问题 · {} 人已回答", question.answered_count),
                MUTED,
            )));
            card.push(Line::from(vec![
                pointer(self.selected == 0),
                Span::styled(question.text.clone(), card_style),
            ]));
            card.push(Line::from(Span::styled("你的分身已经回答了 · ⏎ 查看", ACCENT)));
        } else {
            let current = state.onboarding_step();
            let progress: String = (0..OnboardingStep::TOTAL)
                .map(|i| if i <= current.index() { '●' } else { '○' })
                .collect();
            card.push(Line::from(vec![
                Span::styled(progress, ACCENT),
                Span::styled(
                    format!(
                        "  帮分身打基础 · 第 {} 题 / 共 {} 题",
                        current.display_index(),
                        OnboardingStep::TOTAL
                    ),
                    MUTED,
                ),
            ]));
            card.push(Line::from(vec![
                pointer(self.selected == 0),
                Span::styled(state.onboarding_question().text.clone(), card_style),
            ]));
            card.push(Line::from(Span::styled("⏎ 开始录音", ACCENT)));
        }
        let card = Paragraph::new(card)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().padding(Padding::horizontal(1)));
        frame.render_widget(card, chunks[0]);

        let header = Paragraph::new(Line::from(Span::styled("往期问题", MUTED)))
            .block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(header, chunks[1]);

        let items: Vec<ListItem> = state
            .past_questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let selected = self.selected == i + 1;
                let date = q.date_label.as_deref().unwrap_or_default();
                ListItem::new(Line::from(vec![
                    pointer(selected),
                    Span::styled(q.text.clone(), row_style(selected)),
                    Span::styled(format!("  {date} · {} 人", q.answered_count), MUTED),
                ]))
            })
            .collect();
        let list = List::new(items)
            .style(NORMAL)
            .block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(list, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Overlay;
    use crate::seed::Seed;

    #[test]
    fn enter_on_card_starts_recording_before_onboarding() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = TodayScreen::default();
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(matches!(
            state.active_overlay(),
            Some(Overlay::OnboardingRecording { .. })
        ));
    }

    #[test]
    fn enter_on_card_opens_answer_after_onboarding() {
        let mut state = AppState::new(Seed::builtin());
        for _ in 0..OnboardingStep::TOTAL {
            state.confirm_onboarding_answer();
        }
        state.close_overlay();

        let mut screen = TodayScreen::default();
        screen.on_key(KeyCode::Enter, &mut state);
        assert_eq!(state.active_overlay(), Some(&Overlay::AnswerDetail));
    }

    #[test]
    fn enter_on_past_question_opens_my_answer() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = TodayScreen::default();
        screen.on_key(KeyCode::Down, &mut state);
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(matches!(state.active_overlay(), Some(Overlay::PastAnswer { .. })));
    }

    #[test]
    fn past_question_without_answer_opens_nothing() {
        // Third past question has no answer of mine in the built-in seed.
        let mut state = AppState::new(Seed::builtin());
        let mut screen = TodayScreen::default();
        for _ in 0..3 {
            screen.on_key(KeyCode::Down, &mut state);
        }
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(state.active_overlay().is_none());
    }
}

//! Overlay router: one screen per [`Overlay`] variant, drawn over the tab.
//!
//! Every overlay can be dismissed with Esc. Terminal actions (sending a
//! probe, finishing onboarding) dismiss it too.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::model::{MessageItem, MessageKind, NavigationTab, OnboardingStep, Overlay, Viewpoint};
use crate::state::{
    AppState, MIN_PROBE_CHARS, MIN_RECORDING_SECONDS, ProbeDraft, RecordingTimer, persona_title,
    probe_presets,
};

use super::{ACCENT, HIGHLIGHT, MUTED, NORMAL};

const INVITE_LINK: &str = "https://lumos.app/invite/mock-abc123";

/// Transient state of whichever overlay is on top.
///
/// Reset whenever a different overlay is presented.
#[derive(Debug)]
pub struct OverlayScreen {
    /// Mock playback of a stopped recording.
    playing_back: bool,

    /// Probe composer text.
    draft: ProbeDraft,
    /// Preset last picked in the probe composer.
    preset: Option<usize>,

    /// "Take over" reply typed on the answer detail.
    takeover: String,
    takeover_sent: bool,

    notify_on_probe: bool,
    persona_replies_first: bool,

    link_copied: bool,
}

impl Default for OverlayScreen {
    fn default() -> Self {
        Self {
            playing_back: false,
            draft: ProbeDraft::new(),
            preset: None,
            takeover: String::new(),
            takeover_sent: false,
            notify_on_probe: true,
            persona_replies_first: true,
            link_copied: false,
        }
    }
}

impl OverlayScreen {
    pub fn on_key(&mut self, code: KeyCode, state: &mut AppState) {
        let Some(overlay) = state.active_overlay().cloned() else {
            return;
        };

        match overlay {
            Overlay::OnboardingRecording { .. } => match code {
                KeyCode::Esc => state.close_overlay(),
                KeyCode::Char(' ') => {
                    if state.is_recording() {
                        state.stop_recording();
                    } else {
                        self.playing_back = false;
                        state.start_recording();
                    }
                }
                KeyCode::Char('l')
                    if !state.is_recording()
                        && state.recording().is_some_and(RecordingTimer::has_recorded) =>
                {
                    self.playing_back = !self.playing_back;
                }
                KeyCode::Char('r') => {
                    self.playing_back = false;
                    state.begin_onboarding_recording();
                }
                KeyCode::Enter => {
                    state.stop_recording();
                    if state.recording().is_some_and(RecordingTimer::is_submittable) {
                        state.show_onboarding_preview();
                    }
                }
                _ => {}
            },
            Overlay::OnboardingPreview { .. } => match code {
                KeyCode::Esc => state.close_overlay(),
                KeyCode::Enter => state.confirm_onboarding_answer(),
                KeyCode::Char('r') => state.begin_onboarding_recording(),
                _ => {}
            },
            Overlay::OnboardingDone => match code {
                KeyCode::Esc | KeyCode::Enter => state.finish_onboarding_flow(),
                KeyCode::Char('d') => state.finish_onboarding_to_discover(),
                _ => {}
            },
            Overlay::AnswerDetail => match code {
                KeyCode::Esc => state.close_overlay(),
                KeyCode::Enter if !self.takeover_sent && !self.takeover.trim().is_empty() => {
                    self.takeover_sent = true;
                }
                KeyCode::Backspace if !self.takeover_sent => {
                    self.takeover.pop();
                }
                KeyCode::Char(c) if !self.takeover_sent => self.takeover.push(c),
                _ => {}
            },
            Overlay::Probe { viewpoint } => self.on_probe_key(code, state, &viewpoint),
            Overlay::Settings => match code {
                KeyCode::Esc => state.close_overlay(),
                KeyCode::Char('n') => self.notify_on_probe = !self.notify_on_probe,
                KeyCode::Char('p') => self.persona_replies_first = !self.persona_replies_first,
                KeyCode::Char('r') => {
                    state.select_tab(NavigationTab::Today);
                    state.close_overlay();
                }
                _ => {}
            },
            Overlay::Invite => match code {
                KeyCode::Esc | KeyCode::Enter => state.close_overlay(),
                KeyCode::Char('c') => self.link_copied = true,
                _ => {}
            },
            Overlay::MessageDetail { .. } | Overlay::PastAnswer { .. } => {
                if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                    state.close_overlay();
                }
            }
        }
    }

    fn on_probe_key(&mut self, code: KeyCode, state: &mut AppState, viewpoint: &Viewpoint) {
        let presets = probe_presets(viewpoint);
        match code {
            KeyCode::Esc => state.close_overlay(),
            KeyCode::Up | KeyCode::Down => {
                let next = match (self.preset, code) {
                    (None, KeyCode::Up) => presets.len() - 1,
                    (None, _) => 0,
                    (Some(i), KeyCode::Up) => (i + presets.len() - 1) % presets.len(),
                    (Some(i), _) => (i + 1) % presets.len(),
                };
                self.preset = Some(next);
                self.draft.set(presets[next]);
            }
            KeyCode::Backspace => self.draft.pop(),
            KeyCode::Char(c) => self.draft.push(c),
            KeyCode::Enter if self.draft.is_sendable() => {
                state.record_probe(viewpoint, self.draft.text());
                state.close_overlay();
            }
            _ => {}
        }
    }

    pub fn help(state: &AppState) -> &'static str {
        match state.active_overlay() {
            Some(Overlay::OnboardingRecording { .. }) => {
                if state.is_recording() {
                    " space stop  ⏎ submit  esc close"
                } else if state.recording().is_some_and(RecordingTimer::has_recorded) {
                    " space resume  l listen  ⏎ submit  r re-record  esc close"
                } else {
                    " space record  esc close"
                }
            }
            Some(Overlay::OnboardingPreview { .. }) => " ⏎ confirm  r re-record  esc close",
            Some(Overlay::OnboardingDone) => " ⏎ done  d discover",
            Some(Overlay::AnswerDetail) => " type to take over  ⏎ send  esc close",
            Some(Overlay::Probe { .. }) => " ↑↓ presets  type to edit  ⏎ send  esc close",
            Some(Overlay::Settings) => " n notifications  p persona first  r reset  esc close",
            Some(Overlay::Invite) => " c copy link  ⏎ done  esc close",
            Some(Overlay::MessageDetail { .. } | Overlay::PastAnswer { .. }) => " ⏎ / esc close",
            None => "",
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let Some(overlay) = state.active_overlay() else {
            return;
        };

        let (title, lines) = match overlay {
            Overlay::OnboardingRecording { step } => self.recording_lines(state, *step),
            Overlay::OnboardingPreview { step } => preview_lines(state, *step),
            Overlay::OnboardingDone => done_lines(),
            Overlay::AnswerDetail => self.answer_detail_lines(state),
            Overlay::Probe { viewpoint } => self.probe_lines(viewpoint),
            Overlay::Settings => self.settings_lines(state),
            Overlay::Invite => self.invite_lines(),
            Overlay::MessageDetail { message } => message_lines(message),
            Overlay::PastAnswer { viewpoint } => past_answer_lines(viewpoint),
        };

        let area = centered(frame.area(), 80, 70);
        frame.render_widget(Clear, area);
        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(Span::styled(format!(" {title} "), HIGHLIGHT))
                    .padding(Padding::new(2, 2, 1, 1)),
            );
        frame.render_widget(body, area);
    }

    fn answer_detail_lines(&self, state: &AppState) -> (String, Vec<Line<'static>>) {
        let question = state.today_question();
        let me = state
            .my_viewpoints()
            .first()
            .map_or("我", |vp| vp.owner_name.as_str());
        let mut lines = vec![
            Line::from(Span::styled("今日问题", MUTED)),
            Line::from(Span::styled(question.text.clone(), HIGHLIGHT)),
            Line::default(),
            Line::from(Span::styled(format!("{} · 今天 09:14", persona_title(me)), MUTED)),
            Line::from(Span::styled(
                "可能会去做乐队吧。不是那种想靠音乐赚钱的，就是纯粹想跟几个真正喜欢音乐的人，做出一点点让自己觉得有意思的东西。",
                NORMAL,
            )),
            Line::default(),
            Line::from(Span::styled("亲自接管一下？", ACCENT)),
        ];
        if self.takeover_sent {
            lines.push(Line::from(Span::styled(format!("{me} · 真人"), MUTED)));
            lines.push(Line::from(Span::styled(self.takeover.clone(), NORMAL)));
            lines.push(Line::from(Span::styled("已接管并回复（Mock）", MUTED)));
        } else if self.takeover.is_empty() {
            lines.push(Line::from(Span::styled("写下你想亲自说的话（Mock，不会真的发送）…", MUTED)));
        } else {
            lines.push(Line::from(Span::styled(format!("{}▏", self.takeover), NORMAL)));
        }
        ("分身的回答".into(), lines)
    }

    fn probe_lines(&self, viewpoint: &Viewpoint) -> (String, Vec<Line<'static>>) {
        let mut lines = vec![
            Line::from(Span::styled(format!("{} 的分身说", viewpoint.owner_name), MUTED)),
            Line::from(Span::styled(viewpoint.answer.clone(), NORMAL)),
            Line::default(),
            Line::from(Span::styled("选一个追问方向", MUTED)),
        ];
        for (i, preset) in probe_presets(viewpoint).iter().enumerate() {
            let style = if self.preset == Some(i) { HIGHLIGHT } else { NORMAL };
            let marker = if self.preset == Some(i) { "› " } else { "  " };
            lines.push(Line::from(Span::styled(format!("{marker}{preset}"), style)));
        }
        lines.push(Line::default());
        let draft = if self.draft.raw().is_empty() {
            Span::styled("在这里写下你的追问（20—100字）…", MUTED)
        } else {
            Span::styled(format!("{}▏", self.draft.raw()), HIGHLIGHT)
        };
        lines.push(Line::from(draft));
        let count = self.draft.text().chars().count();
        let send = if self.draft.is_sendable() {
            Span::styled("⏎ 发送追问", ACCENT)
        } else {
            Span::styled(format!("至少 {MIN_PROBE_CHARS} 个字（{count}）"), MUTED)
        };
        lines.push(Line::from(send));
        (format!("追问 {}", viewpoint.owner_name), lines)
    }

    fn settings_lines(&self, state: &AppState) -> (String, Vec<Line<'static>>) {
        let toggle = |on: bool| if on { "[开]" } else { "[关]" };
        let (name, title) = state
            .my_viewpoints()
            .first()
            .map(|vp| (vp.owner_name.clone(), vp.owner_title.clone().unwrap_or_default()))
            .unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled("账号", MUTED)),
            Line::from(vec![
                Span::styled(name, HIGHLIGHT),
                Span::styled(format!("  {title}"), MUTED),
            ]),
            Line::default(),
            Line::from(Span::styled("通知 & 分身", MUTED)),
            Line::from(Span::styled(
                format!("{} 有新追问时提醒我（Mock）", toggle(self.notify_on_probe)),
                NORMAL,
            )),
            Line::from(Span::styled(
                format!("{} 优先用分身先回复，再提醒真人接管", toggle(self.persona_replies_first)),
                NORMAL,
            )),
            Line::default(),
            Line::from(Span::styled("r 重置体验（回到今日页）", ACCENT)),
            Line::from(Span::styled(
                "本页为 Demo 设置，仅用于体验流程，不会真的修改系统权限或网络配置。",
                MUTED,
            )),
        ];
        ("设置 / 个人信息".into(), lines)
    }

    fn recording_lines(&self, state: &AppState, step: OnboardingStep) -> (String, Vec<Line<'static>>) {
        let seconds = state.recorded_seconds();
        let recorded = !state.is_recording()
            && state.recording().is_some_and(RecordingTimer::has_recorded);
        let status = if state.is_recording() {
            Span::styled(format!("● 录音中 {:02}:{:02}", seconds / 60, seconds % 60), ACCENT)
        } else if recorded {
            Span::styled(format!("已录 {:02}:{:02}", seconds / 60, seconds % 60), NORMAL)
        } else {
            Span::styled("按空格开始录音", MUTED)
        };
        let mut lines = vec![
            Line::from(Span::styled(state.onboarding_question().text.clone(), HIGHLIGHT)),
            Line::default(),
            Line::from(status),
        ];
        if recorded {
            let playback = if self.playing_back {
                Span::styled("正在回放（Mock）", ACCENT)
            } else {
                Span::styled("l 听一遍（Mock）", MUTED)
            };
            lines.push(Line::from(playback));
        }
        if !state.recording().is_some_and(RecordingTimer::is_submittable) {
            lines.push(Line::from(Span::styled(
                format!("至少录 {MIN_RECORDING_SECONDS} 秒才能提交"),
                MUTED,
            )));
        }
        (format!("建立分身 · 第 {} 题", step.display_index()), lines)
    }

    fn invite_lines(&self) -> (String, Vec<Line<'static>>) {
        let copied = if self.link_copied {
            Span::styled("已复制", ACCENT)
        } else {
            Span::styled("c 复制链接", MUTED)
        };
        let lines = vec![
            Line::from(Span::styled("他们比任何模型都更了解你。", NORMAL)),
            Line::default(),
            Line::from(Span::styled("Mock 邀请链接", MUTED)),
            Line::from(vec![Span::styled(format!("{INVITE_LINK}  "), HIGHLIGHT), copied]),
        ];
        ("邀请朋友校准分身".into(), lines)
    }
}

fn preview_lines(state: &AppState, step: OnboardingStep) -> (String, Vec<Line<'static>>) {
    let confirm = if step.is_last() {
        "⏎ 就是这个感觉，完成"
    } else {
        "⏎ 就是这个感觉，下一题"
    };
    let lines = vec![
        Line::from(Span::styled("你的分身会这样说", MUTED)),
        Line::default(),
        Line::from(Span::styled(state.onboarding_preview_text(), NORMAL)),
        Line::default(),
        Line::from(Span::styled("像你说话的方式吗？不像可以调。", MUTED)),
        Line::from(Span::styled(confirm, ACCENT)),
    ];
    (format!("建立分身 · 第 {} 题预览", step.display_index()), lines)
}

fn done_lines() -> (String, Vec<Line<'static>>) {
    let lines = vec![
        Line::from(Span::styled("从今天起，分身会自动回答每日问题，", NORMAL)),
        Line::from(Span::styled("同频的人就能找到你了。", NORMAL)),
        Line::default(),
        Line::from(Span::styled("初始对齐率 42%", ACCENT)),
        Line::from(Span::styled(
            "继续回答更多问题或邀请朋友校准，分身对齐率会越来越高。",
            MUTED,
        )),
        Line::default(),
        Line::from(Span::styled("⏎ 看看分身今天说了什么   d 去发现页看看", ACCENT)),
    ];
    ("你的分身上线了".into(), lines)
}

fn message_lines(message: &MessageItem) -> (String, Vec<Line<'static>>) {
    let heading = match message.kind {
        MessageKind::OtherPersona => format!("你对 {} 说", message.title),
        MessageKind::MyPersona => "有人在追问你的分身".to_string(),
        MessageKind::System => message.title.clone(),
    };
    let lines = vec![
        Line::from(Span::styled(heading, MUTED)),
        Line::from(Span::styled(message.preview.clone(), NORMAL)),
        Line::from(Span::styled(message.time_label.clone(), MUTED)),
        Line::default(),
        Line::from(Span::styled(
            "完整聊天页会在接入真实后端时实现。",
            MUTED,
        )),
    ];
    (message.title.clone(), lines)
}

fn past_answer_lines(viewpoint: &Viewpoint) -> (String, Vec<Line<'static>>) {
    let lines = vec![
        Line::from(Span::styled("当时的问题", MUTED)),
        Line::from(Span::styled(viewpoint.question.clone(), HIGHLIGHT)),
        Line::default(),
        Line::from(Span::styled(
            format!("{} · {}", persona_title(&viewpoint.owner_name), viewpoint.time_label),
            MUTED,
        )),
        Line::from(Span::styled(viewpoint.answer.clone(), NORMAL)),
        Line::default(),
        Line::from(Span::styled(
            format!("#{}  {} 次追问", viewpoint.tags.join(" #"), viewpoint.probe_count),
            MUTED,
        )),
    ];
    ("过往回答".into(), lines)
}

/// A rectangle `percent_x` by `percent_y` of `area`, centered.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::seed::Seed;

    fn type_str(screen: &mut OverlayScreen, state: &mut AppState, s: &str) {
        for c in s.chars() {
            screen.on_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn recording_submit_needs_some_recording() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = OverlayScreen::default();
        state.begin_onboarding_recording();

        screen.on_key(KeyCode::Enter, &mut state);
        assert!(state.active_overlay().is_some_and(Overlay::is_recording));

        screen.on_key(KeyCode::Char(' '), &mut state);
        assert!(state.is_recording());
        for _ in 0..MIN_RECORDING_SECONDS {
            state.tick();
        }
        screen.on_key(KeyCode::Enter, &mut state);

        assert_eq!(
            state.active_overlay(),
            Some(&Overlay::OnboardingPreview {
                step: OnboardingStep::Q1
            })
        );
        assert!(state.recording().is_none());
    }

    #[test]
    fn recording_submit_needs_three_seconds() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = OverlayScreen::default();
        state.begin_onboarding_recording();

        screen.on_key(KeyCode::Char(' '), &mut state);
        state.tick();
        state.tick();
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(state.active_overlay().is_some_and(Overlay::is_recording));
        assert_eq!(state.recorded_seconds(), 2);

        // Resuming keeps the two seconds already recorded.
        screen.on_key(KeyCode::Char(' '), &mut state);
        state.tick();
        screen.on_key(KeyCode::Enter, &mut state);
        assert_eq!(
            state.active_overlay(),
            Some(&Overlay::OnboardingPreview {
                step: OnboardingStep::Q1
            })
        );
    }

    #[test]
    fn listen_toggles_only_after_recording_stops() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = OverlayScreen::default();
        state.begin_onboarding_recording();

        screen.on_key(KeyCode::Char('l'), &mut state);
        assert!(!screen.playing_back);

        screen.on_key(KeyCode::Char(' '), &mut state);
        state.tick();
        screen.on_key(KeyCode::Char('l'), &mut state);
        assert!(!screen.playing_back);

        screen.on_key(KeyCode::Char(' '), &mut state);
        screen.on_key(KeyCode::Char('l'), &mut state);
        assert!(screen.playing_back);
        screen.on_key(KeyCode::Char('l'), &mut state);
        assert!(!screen.playing_back);

        screen.on_key(KeyCode::Char('l'), &mut state);
        screen.on_key(KeyCode::Char('r'), &mut state);
        assert!(!screen.playing_back);
        assert_eq!(state.recorded_seconds(), 0);
    }

    #[test]
    fn recording_help_lists_submit_while_live() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = OverlayScreen::default();
        state.begin_onboarding_recording();
        assert!(!OverlayScreen::help(&state).contains("⏎ submit"));

        screen.on_key(KeyCode::Char(' '), &mut state);
        assert!(OverlayScreen::help(&state).contains("⏎ submit"));
        state.tick();
        screen.on_key(KeyCode::Char(' '), &mut state);
        assert!(OverlayScreen::help(&state).contains("l listen"));
    }

    #[test]
    fn preview_rerecord_returns_to_recording() {
        let mut state = AppState::new(Seed::builtin());
        let mut screen = OverlayScreen::default();
        state.show_onboarding_preview();
        screen.on_key(KeyCode::Char('r'), &mut state);
        assert_eq!(state.recorded_seconds(), 0);
        assert!(state.active_overlay().is_some_and(Overlay::is_recording));
    }

    #[test]
    fn done_can_go_to_discover() {
        let mut state = AppState::new(Seed::builtin());
        for _ in 0..OnboardingStep::TOTAL {
            state.confirm_onboarding_answer();
        }
        OverlayScreen::default().on_key(KeyCode::Char('d'), &mut state);
        assert!(state.active_overlay().is_none());
        assert_eq!(state.current_tab(), NavigationTab::Discover);
    }

    #[test]
    fn probe_sends_only_when_long_enough() {
        let mut state = AppState::new(Seed::builtin());
        let vp = state.discover_feed()[0].clone();
        state.open_probe_composer(&vp);
        let mut screen = OverlayScreen::default();

        type_str(&mut screen, &mut state, "太短了");
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(state.messages().is_empty());
        assert!(state.active_overlay().is_some());

        type_str(&mut screen, &mut state, "，再多写几个字吧");
        screen.on_key(KeyCode::Enter, &mut state);
        assert!(state.active_overlay().is_none());
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].preview, "太短了，再多写几个字吧");
        assert!(state.has_probed(vp.id));
    }

    #[test]
    fn probe_preset_fills_draft() {
        let mut state = AppState::new(Seed::builtin());
        let vp = state.discover_feed()[1].clone();
        state.open_probe_composer(&vp);
        let mut screen = OverlayScreen::default();

        screen.on_key(KeyCode::Down, &mut state);
        screen.on_key(KeyCode::Down, &mut state);
        screen.on_key(KeyCode::Enter, &mut state);

        assert_eq!(state.messages()[0].title, "陈磊的分身");
        assert_eq!(state.messages()[0].preview, probe_presets(&vp)[1]);
    }

    #[test]
    fn takeover_is_local_only() {
        let mut state = AppState::new(Seed::builtin());
        state.open_answer_detail();
        let mut screen = OverlayScreen::default();
        type_str(&mut screen, &mut state, "我自己来说");
        screen.on_key(KeyCode::Enter, &mut state);

        assert!(screen.takeover_sent);
        assert!(state.messages().is_empty());
        assert_eq!(state.active_overlay(), Some(&Overlay::AnswerDetail));
    }

    #[test]
    fn settings_reset_returns_to_today() {
        let mut state = AppState::new(Seed::builtin());
        state.select_tab(NavigationTab::Messages);
        state.open_settings();
        let mut screen = OverlayScreen::default();
        screen.on_key(KeyCode::Char('n'), &mut state);
        assert!(!screen.notify_on_probe);

        screen.on_key(KeyCode::Char('r'), &mut state);
        assert_eq!(state.current_tab(), NavigationTab::Today);
        assert!(state.active_overlay().is_none());
    }

    #[test]
    fn every_overlay_closes_with_esc() {
        let mut state = AppState::new(Seed::builtin());
        let vp = state.discover_feed()[0].clone();
        state.record_probe(&vp, "一条足够长的追问内容");
        let message = state.messages()[0].clone();
        let question = state.past_questions()[0].clone();

        let openers: Vec<Box<dyn Fn(&mut AppState)>> = vec![
            Box::new(AppState::begin_onboarding_recording),
            Box::new(AppState::show_onboarding_preview),
            Box::new(AppState::open_answer_detail),
            Box::new(move |s: &mut AppState| s.open_probe_composer(&vp)),
            Box::new(AppState::open_settings),
            Box::new(AppState::open_invite_flow),
            Box::new(move |s: &mut AppState| s.open_message_detail(&message)),
            Box::new(move |s: &mut AppState| s.open_past_answer(&question)),
        ];
        for open in openers {
            open(&mut state);
            assert!(state.active_overlay().is_some());
            OverlayScreen::default().on_key(KeyCode::Esc, &mut state);
            assert!(state.active_overlay().is_none());
        }

        // The done overlay closes too.
        for _ in 0..OnboardingStep::TOTAL {
            state.confirm_onboarding_answer();
        }
        OverlayScreen::default().on_key(KeyCode::Esc, &mut state);
        assert!(state.active_overlay().is_none());
    }
}

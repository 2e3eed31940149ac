//! Application loop and screen routing.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use crate::model::{NavigationTab, Overlay};
use crate::state::AppState;

use super::screens::{
    ACCENT, AvatarScreen, DiscoverScreen, HIGHLIGHT, MUTED, MessagesScreen, OverlayScreen,
    TodayScreen,
};

/// Runs the TUI event loop until the user quits.
///
/// `tick` is the recording timer's interval.
pub fn run(state: &mut AppState, tick: Duration) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, state, tick);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, state: &mut AppState, tick: Duration) -> io::Result<()> {
    let mut shell = Shell::default();
    let mut clock = TickClock::new(tick, Instant::now());

    loop {
        terminal.draw(|frame| shell.render(frame, state))?;

        if event::poll(clock.timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && shell.on_key(key.code, state) == Flow::Quit
        {
            return Ok(());
        }

        if clock.is_due(state.is_recording(), Instant::now()) {
            state.tick();
        }
    }
}

/// Paces recording ticks.
///
/// The first second of a recording is counted a full interval after it
/// starts.
#[derive(Debug)]
struct TickClock {
    interval: Duration,
    last: Instant,
    recording: bool,
}

impl TickClock {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
            recording: false,
        }
    }

    fn timeout(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Whether a tick is due at `now`. Restarts the interval when recording begins.
    fn is_due(&mut self, recording: bool, now: Instant) -> bool {
        if recording && !self.recording {
            self.last = now;
        }
        self.recording = recording;

        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Whether the loop keeps going after a key.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The root shell: one screen per tab, plus the overlay router on top.
#[derive(Debug, Default)]
struct Shell {
    today: TodayScreen,
    discover: DiscoverScreen,
    avatar: AvatarScreen,
    messages: MessagesScreen,
    overlay: OverlayScreen,

    /// Key of the overlay `overlay` was last reset for.
    overlay_key: Option<String>,
}

impl Shell {
    fn on_key(&mut self, code: KeyCode, state: &mut AppState) -> Flow {
        let flow = self.route_key(code, state);
        self.sync_overlay(state);
        flow
    }

    fn route_key(&mut self, code: KeyCode, state: &mut AppState) -> Flow {
        // An overlay takes every key until it is dismissed.
        if state.active_overlay().is_some() {
            self.overlay.on_key(code, state);
            return Flow::Continue;
        }

        let typing = state.current_tab() == NavigationTab::Discover && self.discover.captures_text();
        if !typing {
            match code {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Tab => {
                    state.select_tab(state.current_tab().next());
                    return Flow::Continue;
                }
                KeyCode::BackTab => {
                    state.select_tab(state.current_tab().previous());
                    return Flow::Continue;
                }
                KeyCode::Char(c) => {
                    if let Some(tab) = c
                        .to_digit(10)
                        .and_then(|d| d.checked_sub(1))
                        .and_then(|i| NavigationTab::ALL.get(i as usize).copied())
                    {
                        state.select_tab(tab);
                        return Flow::Continue;
                    }
                }
                _ => {}
            }
        }

        match state.current_tab() {
            NavigationTab::Today => self.today.on_key(code, state),
            NavigationTab::Discover => self.discover.on_key(code, state),
            NavigationTab::Avatar => self.avatar.on_key(code, state),
            NavigationTab::Messages => self.messages.on_key(code, state),
        }
        Flow::Continue
    }

    /// Gives a newly presented overlay fresh view state.
    fn sync_overlay(&mut self, state: &AppState) {
        let key = state.active_overlay().map(Overlay::key);
        if key != self.overlay_key {
            self.overlay = OverlayScreen::default();
            self.overlay_key = key;
        }
    }

    fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Min(0),    // tab content
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // help
        ])
        .split(area);

        let current = state.current_tab();
        let title = Paragraph::new(Line::from(vec![
            Span::styled("Lumos", HIGHLIGHT),
            Span::styled(format!("  {}", current.title()), MUTED),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        match current {
            NavigationTab::Today => self.today.render(frame, chunks[1], state),
            NavigationTab::Discover => self.discover.render(frame, chunks[1], state),
            NavigationTab::Avatar => self.avatar.render(frame, chunks[1], state),
            NavigationTab::Messages => self.messages.render(frame, chunks[1], state),
        }

        let mut tabs = Vec::new();
        for (i, tab) in NavigationTab::ALL.into_iter().enumerate() {
            let style = if tab == current { HIGHLIGHT } else { MUTED };
            tabs.push(Span::styled(format!("  {} {}", i + 1, tab.title()), style));
            if tab == NavigationTab::Messages && state.unread_count() > 0 {
                tabs.push(Span::styled("•", ACCENT));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[2]);

        let help = if state.active_overlay().is_some() {
            OverlayScreen::help(state)
        } else {
            match current {
                NavigationTab::Today => TodayScreen::HELP,
                NavigationTab::Discover => self.discover.help(),
                NavigationTab::Avatar => AvatarScreen::HELP,
                NavigationTab::Messages => MessagesScreen::help(state),
            }
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(help, MUTED))), chunks[3]);

        self.overlay.render(frame, state);
    }
}

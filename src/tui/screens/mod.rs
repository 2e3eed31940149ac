//! Screen rendering and input handling.
//!
//! Screens keep only transient view state (selection, text being typed).
//! Everything else is read from, and dispatched to, [`AppState`](crate::state::AppState).

mod avatar;
mod discover;
mod messages;
mod overlay;
mod today;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub use avatar::AvatarScreen;
pub use discover::DiscoverScreen;
pub use messages::MessagesScreen;
pub use overlay::OverlayScreen;
pub use today::TodayScreen;

pub const MUTED: Style = Style::new().fg(Color::DarkGray);
pub const NORMAL: Style = Style::new().fg(Color::Gray);
pub const HIGHLIGHT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const ACCENT: Style = Style::new().fg(Color::Yellow);

/// The selection marker in lists.
pub fn pointer(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("› ", HIGHLIGHT)
    } else {
        Span::styled("  ", NORMAL)
    }
}

/// Row style for a list entry.
pub fn row_style(selected: bool) -> Style {
    if selected { HIGHLIGHT } else { NORMAL }
}

/// Moves a list selection one step, staying within `len`.
pub fn step(selected: usize, len: usize, down: bool) -> usize {
    if down {
        if selected + 1 < len { selected + 1 } else { selected }
    } else {
        selected.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_in_bounds() {
        assert_eq!(step(0, 3, false), 0);
        assert_eq!(step(0, 3, true), 1);
        assert_eq!(step(2, 3, true), 2);
        assert_eq!(step(0, 0, true), 0);
    }
}

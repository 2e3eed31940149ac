//! Bottom navigation tabs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The tab shown beneath any overlay. Exactly one is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationTab {
    #[default]
    Today,
    Discover,
    Avatar,
    Messages,
}

impl NavigationTab {
    /// All tabs in tab-bar order.
    pub const ALL: [Self; 4] = [Self::Today, Self::Discover, Self::Avatar, Self::Messages];

    /// Label shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Today => "今日",
            Self::Discover => "发现",
            Self::Avatar => "分身",
            Self::Messages => "消息",
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Self {
        let i = self.position();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn previous(self) -> Self {
        let i = self.position();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Zero-based position in the tab bar.
    pub fn position(self) -> usize {
        match self {
            Self::Today => 0,
            Self::Discover => 1,
            Self::Avatar => 2,
            Self::Messages => 3,
        }
    }
}

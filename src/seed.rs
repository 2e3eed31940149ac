//! Sample content the app starts with.
//!
//! The built-in seed is the prototype's hard-coded copy. A JSON file with
//! the same shape can replace it (`lumos --seed <path>`, or `seed` in the
//! config file). `lumos seed` prints the built-in one as a starting point.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{MessageItem, MessageKind, Question, Viewpoint};

/// Errors that can occur while loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid seed at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("today's question must have isToday set")]
    TodayNotFlagged,

    #[error("past question is flagged as today: {0}")]
    PastFlaggedToday(Uuid),

    #[error("viewpoint {0} is in the wrong collection (isMine does not match)")]
    MisplacedViewpoint(Uuid),

    #[error("duplicate viewpoint id: {0}")]
    DuplicateViewpoint(Uuid),

    #[error("more than one persona thread titled {0:?}")]
    DuplicatePersonaThread(String),
}

pub type Result<T> = core::result::Result<T, SeedError>;

/// Everything the app state is seeded with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub today: Question,

    /// Most recent first.
    pub past: Vec<Question>,

    pub mine: Vec<Viewpoint>,
    pub discover: Vec<Viewpoint>,

    /// Most recent first.
    #[serde(default)]
    pub messages: Vec<MessageItem>,
}

impl Seed {
    /// Reads and validates a seed file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: Self = serde_json::from_str(&json).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks the invariants the app state relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.today.is_today {
            return Err(SeedError::TodayNotFlagged);
        }
        if let Some(q) = self.past.iter().find(|q| q.is_today) {
            return Err(SeedError::PastFlaggedToday(q.id));
        }

        let mut ids = HashSet::new();
        let mine = self.mine.iter().map(|v| (v, true));
        let discover = self.discover.iter().map(|v| (v, false));
        for (viewpoint, expect_mine) in mine.chain(discover) {
            if viewpoint.is_mine != expect_mine {
                return Err(SeedError::MisplacedViewpoint(viewpoint.id));
            }
            if !ids.insert(viewpoint.id) {
                return Err(SeedError::DuplicateViewpoint(viewpoint.id));
            }
        }

        let mut threads = HashSet::new();
        for message in &self.messages {
            if message.kind == MessageKind::OtherPersona && !threads.insert(message.title.as_str()) {
                return Err(SeedError::DuplicatePersonaThread(message.title.clone()));
            }
        }

        Ok(())
    }

    /// The prototype's sample content. Fresh ids on every call.
    pub fn builtin() -> Self {
        let today = Question::today("35岁拿了大礼包想退休，你最可能去做什么？", 47);

        let past = vec![
            Question::past("如果现在离职，你最可能去做什么？", 31, "昨天"),
            Question::past("最近改变了什么之前一直坚持的判断？", 58, "周一"),
            Question::past("工作之外，你最近在认真对待什么？", 24, "周日"),
        ];

        let mine = vec![
            Viewpoint {
                id: Uuid::new_v4(),
                owner_name: "阿基米德".into(),
                owner_title: Some("产品经理".into()),
                is_mine: true,
                question: "如果现在离职，你最可能去做什么？".into(),
                answer: "可能会做乐队。不是那种想靠音乐赚钱的，就是纯粹想跟几个真正喜欢音乐的人，做出一点点让自己觉得有意思的东西。互联网做久了，太多时候都在优化，在迭代，在找更大规模。但好的东西不一定需要规模。".into(),
                tags: vec!["职场".into(), "人生".into()],
                probe_count: 3,
                time_label: "2天前".into(),
            },
            Viewpoint {
                id: Uuid::new_v4(),
                owner_name: "阿基米德".into(),
                owner_title: Some("产品经理".into()),
                is_mine: true,
                question: "最近改变了什么之前一直坚持的判断？".into(),
                answer: "以前觉得产品要极简，功能越少越好。最近开始觉得这是一个懒人逻辑——真正的极简是把复杂藏起来，而不是把功能砍掉。".into(),
                tags: vec!["产品".into(), "判断".into()],
                probe_count: 1,
                time_label: "4天前".into(),
            },
        ];

        let discover = vec![
            Viewpoint {
                id: Uuid::new_v4(),
                owner_name: "林晓".into(),
                owner_title: Some("产品总监".into()),
                is_mine: false,
                question: "35岁拿了大礼包想退休，你最可能去做什么？".into(),
                answer: "可能会去开一家很小的咖啡馆，但不是那种网红咖啡馆。就是一个让我可以每天跟真实的人面对面聊天的地方。做了这么多年产品，越来越觉得我们在帮用户「连接」，但自己反而越来越难跟人真正连接了。".into(),
                tags: vec!["人生".into(), "退休".into()],
                probe_count: 5,
                time_label: "刚刚".into(),
            },
            Viewpoint {
                id: Uuid::new_v4(),
                owner_name: "陈磊".into(),
                owner_title: Some("工程负责人".into()),
                is_mine: false,
                question: "如果现在离职，你最可能去做什么？".into(),
                answer: "去研究一个真正从零开始的技术方向。不是那种追热点的，是那种别人觉得没用但我觉得五年后会很重要的东西。".into(),
                tags: vec!["技术".into()],
                probe_count: 2,
                time_label: "2小时前".into(),
            },
        ];

        // Empty until the user sends a probe.
        let messages = Vec::new();

        Self {
            today,
            past,
            mine,
            discover,
            messages,
        }
    }
}

//! Probe composer rules: preset questions and the send threshold.

use crate::model::Viewpoint;

/// Minimum trimmed length, in characters, of a probe worth sending.
pub const MIN_PROBE_CHARS: usize = 10;

/// Three suggested probes, picked by what the answer talks about.
pub fn probe_presets(viewpoint: &Viewpoint) -> [&'static str; 3] {
    let answer = viewpoint.answer.as_str();
    if answer.contains("咖啡馆") || answer.contains("面对面聊天") {
        [
            "你说想跟「真实的人」连接，是什么时候开始觉得现在的连接不真实了？",
            "如果真的开了这家小咖啡馆，你最想每天重复做的一件事是什么？",
            "在现实约束（房租、时间、家人）里，你觉得离这家咖啡馆还有多远？",
        ]
    } else if answer.contains("技术") || answer.contains("从零开始") || answer.contains("五年后") {
        [
            "你现在最想从零研究的那个技术方向，具体是什么？",
            "如果五年后这个方向没跑出来，你会觉得最可惜的是什么——时间、钱，还是别的？",
            "在现有工作里，有什么小实验可以预演一下这个方向，而不用直接 all in？",
        ]
    } else {
        [
            "这件事对你来说，最核心的吸引力是什么？",
            "如果把现在的选择拆成几个小试验，你会先从哪一步开始？",
            "有没有一个瞬间，让你突然意识到自己已经不再满足于现在的状态？",
        ]
    }
}

/// The text being composed in the probe overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeDraft {
    text: String,
}

impl ProbeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft, e.g. with a chosen preset.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// The draft as typed.
    pub fn raw(&self) -> &str {
        &self.text
    }

    /// The draft as it would be sent.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Whether the trimmed draft is long enough to send.
    pub fn is_sendable(&self) -> bool {
        self.text().chars().count() >= MIN_PROBE_CHARS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    fn viewpoint(answer: &str) -> Viewpoint {
        Viewpoint {
            id: Uuid::new_v4(),
            owner_name: "林晓".into(),
            owner_title: None,
            is_mine: false,
            question: "Q".into(),
            answer: answer.into(),
            tags: vec![],
            probe_count: 0,
            time_label: "刚刚".into(),
        }
    }

    #[test]
    fn presets_follow_answer_keywords() {
        assert!(probe_presets(&viewpoint("想开一家咖啡馆"))[1].contains("咖啡馆"));
        assert!(probe_presets(&viewpoint("研究技术方向"))[0].contains("技术方向"));
        assert!(probe_presets(&viewpoint("做乐队"))[0].contains("吸引力"));
    }

    #[test]
    fn draft_counts_trimmed_characters() {
        let mut draft = ProbeDraft::new();
        draft.set("   一二三四五六七八九   ");
        assert!(!draft.is_sendable());

        draft.set("一二三四五六七八九");
        draft.push('十');
        assert!(draft.is_sendable());
        draft.pop();
        assert!(!draft.is_sendable());
    }

    #[test]
    fn text_is_trimmed() {
        let mut draft = ProbeDraft::new();
        draft.set("  hello world  \n");
        assert_eq!(draft.text(), "hello world");
        assert_eq!(draft.raw(), "  hello world  \n");
    }
}

//! Application state: the one store every screen reads and dispatches to.
//!
//! `AppState` owns navigation, onboarding progress, the sample content, the
//! presented overlay, and the set of probed viewpoints. Screens never mutate
//! these directly; they call the intent methods below. Every intent is
//! synchronous and infallible.
//!
//! The store is built explicitly (from a [`Seed`]) and passed by reference.

mod messages;
mod probe;
mod recording;

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::model::{
    MessageItem, MessageKind, NavigationTab, OnboardingStep, Overlay, Question, Viewpoint,
};
use crate::seed::Seed;

use messages::MessageBook;
pub use probe::{MIN_PROBE_CHARS, ProbeDraft, probe_presets};
pub use recording::{MIN_RECORDING_SECONDS, RecordingTimer};

/// Topic filter that matches every viewpoint.
pub const ALL_TOPICS: &str = "全部";

/// Suffix turning an owner's name into their persona's thread title.
pub const PERSONA_SUFFIX: &str = "的分身";

/// The persona thread title for a viewpoint's owner.
pub fn persona_title(owner_name: &str) -> String {
    format!("{owner_name}{PERSONA_SUFFIX}")
}

#[derive(Debug)]
pub struct AppState {
    current_tab: NavigationTab,

    onboarding_step: OnboardingStep,
    has_finished_onboarding: bool,

    today_question: Question,
    past_questions: Vec<Question>,
    my_viewpoints: Vec<Viewpoint>,
    discover_feed: Vec<Viewpoint>,
    messages: MessageBook,
    probed: HashSet<Uuid>,

    active_overlay: Option<Overlay>,

    /// Present only while a recording overlay is.
    recording: Option<RecordingTimer>,
}

impl AppState {
    /// Creates a fresh store from seed content, on the today tab.
    pub fn new(seed: Seed) -> Self {
        Self {
            current_tab: NavigationTab::default(),
            onboarding_step: OnboardingStep::Q1,
            has_finished_onboarding: false,
            today_question: seed.today,
            past_questions: seed.past,
            my_viewpoints: seed.mine,
            discover_feed: seed.discover,
            messages: MessageBook::new(seed.messages),
            probed: HashSet::new(),
            active_overlay: None,
            recording: None,
        }
    }

    // ── Read side ──

    pub fn current_tab(&self) -> NavigationTab {
        self.current_tab
    }

    pub fn onboarding_step(&self) -> OnboardingStep {
        self.onboarding_step
    }

    pub fn has_finished_onboarding(&self) -> bool {
        self.has_finished_onboarding
    }

    pub fn today_question(&self) -> &Question {
        &self.today_question
    }

    /// Most recent first.
    pub fn past_questions(&self) -> &[Question] {
        &self.past_questions
    }

    pub fn my_viewpoints(&self) -> &[Viewpoint] {
        &self.my_viewpoints
    }

    pub fn discover_feed(&self) -> &[Viewpoint] {
        &self.discover_feed
    }

    /// Most recent first.
    pub fn messages(&self) -> &[MessageItem] {
        self.messages.items()
    }

    pub fn probed(&self) -> &HashSet<Uuid> {
        &self.probed
    }

    pub fn has_probed(&self, viewpoint_id: Uuid) -> bool {
        self.probed.contains(&viewpoint_id)
    }

    pub fn active_overlay(&self) -> Option<&Overlay> {
        self.active_overlay.as_ref()
    }

    // ── Navigation ──

    pub fn select_tab(&mut self, tab: NavigationTab) {
        debug!(?tab, "select tab");
        self.current_tab = tab;
    }

    // ── Onboarding ──

    /// Opens the recording overlay for the current step with a new, idle timer.
    pub fn begin_onboarding_recording(&mut self) {
        let step = self.onboarding_step;
        self.present(Overlay::OnboardingRecording { step });
        self.recording = Some(RecordingTimer::new());
    }

    /// Moves from recording to the preview of the same step.
    pub fn show_onboarding_preview(&mut self) {
        let step = self.onboarding_step;
        self.present(Overlay::OnboardingPreview { step });
    }

    /// Accepts the current answer: on to the next question, or done.
    pub fn confirm_onboarding_answer(&mut self) {
        if let Some(next) = self.onboarding_step.next() {
            debug!(from = ?self.onboarding_step, to = ?next, "onboarding step confirmed");
            self.onboarding_step = next;
            self.begin_onboarding_recording();
        } else {
            info!("onboarding finished");
            self.has_finished_onboarding = true;
            self.present(Overlay::OnboardingDone);
        }
    }

    pub fn finish_onboarding_flow(&mut self) {
        self.close_overlay();
    }

    /// Leaves the done overlay for the discover tab.
    pub fn finish_onboarding_to_discover(&mut self) {
        self.finish_onboarding_flow();
        self.select_tab(NavigationTab::Discover);
    }

    /// The question being answered at the current step.
    ///
    /// Step one is today's question; the later steps reuse past questions.
    pub fn onboarding_question(&self) -> &Question {
        let past = match self.onboarding_step {
            OnboardingStep::Q1 => None,
            OnboardingStep::Q2 => self.past_questions.get(2),
            OnboardingStep::Q3 => self.past_questions.get(1),
        };
        past.unwrap_or(&self.today_question)
    }

    /// What the persona "heard" in the answer at the current step.
    pub fn onboarding_preview_text(&self) -> &'static str {
        match self.onboarding_step {
            OnboardingStep::Q1 => {
                "可能会去做乐队吧。不是那种想靠音乐赚钱的，就是纯粹想跟几个真正喜欢音乐的人，做出一点点让自己觉得有意思的东西。互联网做久了，太多时候都在优化，在迭代，在找更大规模。但好的东西不一定需要规模。"
            }
            OnboardingStep::Q2 => {
                "在学吉他。不是因为觉得会很酷，是因为想知道一件事从零开始学会是什么感觉，上一次有这种体验可能是大学。"
            }
            OnboardingStep::Q3 => {
                "以前觉得产品要极简，功能越少越好。最近开始觉得这是一个懒人逻辑——真正的极简是把复杂藏起来，而不是把功能砍掉。"
            }
        }
    }

    // ── Recording timer ──

    /// Starts the timer. Only while a recording overlay is presented.
    pub fn start_recording(&mut self) {
        if let Some(timer) = self.recording.as_mut() {
            timer.start();
        }
    }

    pub fn tick(&mut self) {
        if let Some(timer) = self.recording.as_mut() {
            timer.tick();
        }
    }

    /// Stops the timer and returns the seconds recorded so far. Idempotent.
    pub fn stop_recording(&mut self) -> u32 {
        self.recording.as_mut().map_or(0, RecordingTimer::stop)
    }

    pub fn recorded_seconds(&self) -> u32 {
        self.recording.as_ref().map_or(0, RecordingTimer::seconds)
    }

    pub fn is_recording(&self) -> bool {
        self.recording.as_ref().is_some_and(RecordingTimer::is_live)
    }

    /// The current recording session, if a recording overlay is open.
    pub fn recording(&self) -> Option<&RecordingTimer> {
        self.recording.as_ref()
    }

    // ── Overlays ──

    pub fn close_overlay(&mut self) {
        if self.active_overlay.is_some() {
            debug!("close overlay");
        }
        self.active_overlay = None;
        self.recording = None;
    }

    /// Opens the probe composer. Callers check [`has_probed`](Self::has_probed) first.
    pub fn open_probe_composer(&mut self, viewpoint: &Viewpoint) {
        self.present(Overlay::Probe {
            viewpoint: viewpoint.clone(),
        });
    }

    pub fn open_settings(&mut self) {
        self.present(Overlay::Settings);
    }

    pub fn open_invite_flow(&mut self) {
        self.present(Overlay::Invite);
    }

    pub fn open_answer_detail(&mut self) {
        self.present(Overlay::AnswerDetail);
    }

    /// Marks the message read (if still listed) and opens it.
    ///
    /// The overlay carries the caller's copy, even when the message is no
    /// longer in the list.
    pub fn open_message_detail(&mut self, message: &MessageItem) {
        if !self.messages.mark_read(message.id) {
            debug!(id = %message.id, "opened message not in list");
        }
        self.present(Overlay::MessageDetail {
            message: message.clone(),
        });
    }

    /// Opens my answer to the given question. Does nothing if I have none.
    pub fn open_past_answer(&mut self, question: &Question) {
        let found = self
            .my_viewpoints
            .iter()
            .find(|v| v.is_mine && v.question == question.text);
        match found {
            Some(viewpoint) => {
                let viewpoint = viewpoint.clone();
                self.present(Overlay::PastAnswer { viewpoint });
            }
            None => debug!(question = %question.text, "no past answer for question"),
        }
    }

    fn present(&mut self, overlay: Overlay) {
        debug!(overlay = %overlay.key(), "present overlay");
        if !overlay.is_recording() {
            self.recording = None;
        }
        self.active_overlay = Some(overlay);
    }

    // ── Probes ──

    /// Sends a probe to a viewpoint's persona.
    ///
    /// The viewpoint becomes probed, and the probe lands on the single
    /// thread for that owner's persona.
    pub fn record_probe(&mut self, viewpoint: &Viewpoint, text: &str) {
        self.probed.insert(viewpoint.id);
        let title = persona_title(&viewpoint.owner_name);
        let thread = self.messages.upsert_thread(title, text);
        info!(viewpoint = %viewpoint.id, %thread, "probe sent");
    }

    // ── Derived views ──

    /// Discover feed entries matching `query`; everything when it is blank.
    pub fn search_discover(&self, query: &str) -> Vec<&Viewpoint> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.discover_feed.iter().collect();
        }
        self.discover_feed
            .iter()
            .filter(|v| v.matches_lowercase(&needle))
            .collect()
    }

    /// [`ALL_TOPICS`] followed by my tags in first-seen order.
    pub fn my_topics(&self) -> Vec<&str> {
        let mut topics = vec![ALL_TOPICS];
        for tag in self.my_viewpoints.iter().flat_map(|v| &v.tags) {
            if !topics.contains(&tag.as_str()) {
                topics.push(tag.as_str());
            }
        }
        topics
    }

    /// My viewpoints tagged `topic`, or all of them for [`ALL_TOPICS`].
    pub fn my_viewpoints_in(&self, topic: &str) -> Vec<&Viewpoint> {
        self.my_viewpoints
            .iter()
            .filter(|v| topic == ALL_TOPICS || v.has_tag(topic))
            .collect()
    }

    /// Probes aimed at my persona.
    pub fn persona_messages(&self) -> Vec<&MessageItem> {
        self.messages
            .items()
            .iter()
            .filter(|m| m.kind == MessageKind::MyPersona)
            .collect()
    }

    /// Everything else in the message list.
    pub fn other_messages(&self) -> Vec<&MessageItem> {
        self.messages
            .items()
            .iter()
            .filter(|m| m.kind != MessageKind::MyPersona)
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.messages.unread_count()
    }

    /// A serializable view of the whole store.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let mut probed: Vec<Uuid> = self.probed.iter().copied().collect();
        probed.sort();
        Snapshot {
            current_tab: self.current_tab,
            onboarding_step: self.onboarding_step,
            has_finished_onboarding: self.has_finished_onboarding,
            today_question: &self.today_question,
            past_questions: &self.past_questions,
            my_viewpoints: &self.my_viewpoints,
            discover_feed: &self.discover_feed,
            messages: self.messages.items(),
            probed,
            active_overlay: self.active_overlay.as_ref(),
            recorded_seconds: self.recording.as_ref().map(RecordingTimer::seconds),
        }
    }
}

/// Borrowed, serializable copy of [`AppState`]'s observable fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub current_tab: NavigationTab,
    pub onboarding_step: OnboardingStep,
    pub has_finished_onboarding: bool,
    pub today_question: &'a Question,
    pub past_questions: &'a [Question],
    pub my_viewpoints: &'a [Viewpoint],
    pub discover_feed: &'a [Viewpoint],
    pub messages: &'a [MessageItem],
    pub probed: Vec<Uuid>,
    pub active_overlay: Option<&'a Overlay>,
    pub recorded_seconds: Option<u32>,
}

use std::sync::Arc;

use dioxus::prelude::*;

use assistant_core::model::{Language, UploadedVideo, VideoMatch};
use assistant_core::{Clock, Intent, QuizState, SessionStore, TopicTracker};
use services::ResponseGate;

/// The resolved target of the inline player.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePreview {
    pub label: String,
    pub embed_url: String,
}

/// Every signal the assistant view mutates, grouped by concern: the three
/// domain state objects, the transient chat cells, and the flags each panel
/// owns. One gate instance covers the lifetime of the view, so a stale
/// answer can never land after a newer question went out.
#[derive(Clone)]
pub struct AssistantState {
    pub store: Signal<SessionStore>,
    pub topics: Signal<TopicTracker>,
    pub quiz: Signal<QuizState>,

    pub question: Signal<String>,
    pub answer: Signal<String>,
    pub matches: Signal<Vec<VideoMatch>>,

    pub language: Signal<Language>,
    pub last_intent: Signal<Option<Intent>>,
    pub loading: Signal<bool>,
    pub quiz_loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
    pub is_listening: Signal<bool>,
    pub active_preview: Signal<Option<ActivePreview>>,
    pub export_notice: Signal<Option<String>>,

    pub uploads: Signal<Vec<UploadedVideo>>,
    pub upload_path: Signal<String>,
    pub uploading: Signal<bool>,
    pub upload_error: Signal<Option<String>>,

    pub gate: Arc<ResponseGate>,
    pub clock: Clock,
}

pub fn use_assistant_state(clock: Clock) -> AssistantState {
    let store = use_signal(|| SessionStore::new(clock.now()));
    let topics = use_signal(TopicTracker::new);
    let quiz = use_signal(QuizState::default);
    let question = use_signal(String::new);
    let answer = use_signal(String::new);
    let matches = use_signal(Vec::new);
    let language = use_signal(Language::default);
    let last_intent = use_signal(|| None::<Intent>);
    let loading = use_signal(|| false);
    let quiz_loading = use_signal(|| false);
    let error_msg = use_signal(|| None::<String>);
    let is_listening = use_signal(|| false);
    let active_preview = use_signal(|| None::<ActivePreview>);
    let export_notice = use_signal(|| None::<String>);
    let uploads = use_signal(Vec::new);
    let upload_path = use_signal(String::new);
    let uploading = use_signal(|| false);
    let upload_error = use_signal(|| None::<String>);
    let gate = use_hook(|| Arc::new(ResponseGate::new()));

    AssistantState {
        store,
        topics,
        quiz,
        question,
        answer,
        matches,
        language,
        last_intent,
        loading,
        quiz_loading,
        error_msg,
        is_listening,
        active_preview,
        export_notice,
        uploads,
        upload_path,
        uploading,
        upload_error,
        gate,
        clock,
    }
}

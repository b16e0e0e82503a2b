use dioxus::prelude::*;

use assistant_core::QuizState;
use assistant_core::model::Language;

use crate::context::AppContext;
use crate::vm::{bar_width_style, option_marker, session_pill_label, time_range_label};

use super::actions;
use super::state::use_assistant_state;

#[component]
pub fn AssistantView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_assistant_state(ctx.clock());
    let backend = ctx.backend();
    let speech = ctx.speech();
    let links = ctx.video_links();
    let export_dir = ctx.export_dir();

    let mut question = state.question;
    let mut language = state.language;
    let loading = state.loading;
    let quiz_loading = state.quiz_loading;
    let is_listening = state.is_listening;
    let uploading = state.uploading;
    let mut upload_path = state.upload_path;

    let pills = {
        let store = state.store.read();
        let current = store.current_id().clone();
        store
            .sessions()
            .iter()
            .map(|session| {
                (
                    session.id().clone(),
                    session_pill_label(session),
                    session.id() == &current,
                )
            })
            .collect::<Vec<_>>()
    };
    let answer = state.answer.cloned();
    let asked_question = {
        let store = state.store.read();
        store.current().question.clone()
    };
    let match_list = state.matches.cloned();
    let quiz = state.quiz.cloned();
    let top_topics = state.topics.read().top_n(5);
    let uploads = state.uploads.cloned();

    let ask = {
        let state = state.clone();
        let backend = backend.clone();
        move |_| {
            spawn(actions::submit_question(state.clone(), backend.clone()));
        }
    };
    let ask_on_key = {
        let state = state.clone();
        let backend = backend.clone();
        move |evt: KeyboardEvent| {
            if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
                evt.prevent_default();
                spawn(actions::submit_question(state.clone(), backend.clone()));
            }
        }
    };
    let new_session = {
        let state = state.clone();
        move |_| actions::start_new_session(state.clone())
    };
    let voice = {
        let state = state.clone();
        let speech = speech.clone();
        move |_| {
            spawn(actions::start_voice_input(state.clone(), speech.clone()));
        }
    };
    let export = {
        let state = state.clone();
        move |_| actions::export_pdf(state.clone(), &export_dir)
    };
    let quiz_generate = {
        let state = state.clone();
        let backend = backend.clone();
        move |_| {
            spawn(actions::generate_quiz(state.clone(), backend.clone()));
        }
    };
    let quiz_check = {
        let state = state.clone();
        move |_| actions::check_quiz(state.clone())
    };
    let upload = {
        let state = state.clone();
        let backend = backend.clone();
        move |_| {
            spawn(actions::upload_video(state.clone(), backend.clone()));
        }
    };
    let preview_close = {
        let state = state.clone();
        move |_| actions::close_preview(state.clone())
    };

    let session_pills = pills.into_iter().map(|(id, label, is_current)| {
        let state = state.clone();
        let class = if is_current {
            "session-pill session-pill--current"
        } else {
            "session-pill"
        };
        rsx! {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| actions::switch_session(state.clone(), &id),
                "{label}"
            }
        }
    });

    let match_cards = match_list.iter().map(|m| {
        let state = state.clone();
        let links_for_preview = links.clone();
        let m_for_preview = m.clone();
        let open_url = links.open_url(m);
        let heading = m.topic_key();
        let number_label = format!("Video {}", m.number);
        let time_label = time_range_label(m);
        let text = m.text.clone();
        rsx! {
            div { class: "video-card",
                h4 { class: "video-card-title", "{heading}" }
                p { class: "video-card-meta", "{number_label} | {time_label}" }
                p { class: "video-card-text", "{text}" }
                div { class: "video-card-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            actions::preview_video(state.clone(), &links_for_preview, &m_for_preview);
                        },
                        "Preview"
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "{open_url}",
                        target: "_blank",
                        "YouTube"
                    }
                }
            }
        }
    });

    let topic_bars = top_topics.into_iter().map(|(topic, count)| {
        let style = bar_width_style(count);
        rsx! {
            div { class: "topic-row",
                span { class: "topic-name", "{topic}" }
                div { class: "topic-bar",
                    div { class: "topic-bar-fill", style: "{style}" }
                }
                span { class: "topic-count", "{count}" }
            }
        }
    });

    rsx! {
        div { class: "assistant-page",
            header { class: "app-header",
                div { class: "app-header-text",
                    h1 { class: "app-title", "Sigma Web Dev - AI Teaching Assistant" }
                    p { class: "app-subtitle", "Ask anything from the course videos." }
                }
                div { class: "app-header-controls",
                    select {
                        class: "language-select",
                        value: "{language().code()}",
                        onchange: move |evt| language.set(Language::from_code(&evt.value())),
                        for lang in Language::all() {
                            option {
                                value: "{lang.code()}",
                                selected: lang == language(),
                                "{lang.display_name()}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: export,
                        "Export PDF"
                    }
                }
            }

            div { class: "session-bar",
                button {
                    class: "session-pill session-pill--new",
                    r#type: "button",
                    onclick: new_session,
                    "+ New chat"
                }
                {session_pills}
            }

            section { class: "chat-panel",
                textarea {
                    class: "question-input",
                    placeholder: "Type your question about the course...",
                    value: "{question}",
                    oninput: move |evt| question.set(evt.value()),
                    onkeydown: ask_on_key,
                }
                div { class: "chat-controls",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading(),
                        onclick: ask,
                        if loading() { "Thinking..." } else { "Ask" }
                    }
                    button {
                        class: if is_listening() { "btn btn-mic btn-mic--listening" } else { "btn btn-mic" },
                        r#type: "button",
                        onclick: voice,
                        if is_listening() { "Listening..." } else { "Speak" }
                    }
                }
                if let Some(intent) = state.last_intent.cloned() {
                    p { class: "intent-line", "Detected intent: {intent.label()}" }
                }
                if let Some(message) = state.error_msg.cloned() {
                    p { class: "error-line", "{message}" }
                }
                if let Some(notice) = state.export_notice.cloned() {
                    p { class: "notice-line", "{notice}" }
                }
                if !answer.is_empty() {
                    div { class: "chat-thread",
                        if !asked_question.is_empty() {
                            div { class: "bubble bubble--user", "{asked_question}" }
                        }
                        div { class: "bubble bubble--assistant", "{answer}" }
                    }
                }
            }

            section { class: "quiz-panel",
                div { class: "quiz-header",
                    h3 { class: "panel-title", "Quiz yourself" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: quiz_loading(),
                        onclick: quiz_generate,
                        if quiz_loading() { "Generating..." } else { "Generate quiz" }
                    }
                }
                match quiz {
                    QuizState::Empty => rsx! {
                        p { class: "quiz-hint", "Generate a quiz to test what you just learned." }
                    },
                    QuizState::Loaded(round) => {
                        let checked = round.is_checked();
                        let score = round.score();
                        let items = round
                            .items()
                            .iter()
                            .enumerate()
                            .map(|(question_index, item)| {
                                let selected = round.selected(question_index);
                                let options = item.options.iter().enumerate().map(|(option_index, option)| {
                                    let state = state.clone();
                                    let mut class = String::from("quiz-option");
                                    if selected == Some(option_index) {
                                        class.push_str(" quiz-option--selected");
                                    }
                                    if checked {
                                        if item.is_correct_option(option_index) {
                                            class.push_str(" quiz-option--correct");
                                        } else if selected == Some(option_index) {
                                            class.push_str(" quiz-option--wrong");
                                        }
                                    }
                                    let marker = option_marker(option_index);
                                    rsx! {
                                        button {
                                            class: "{class}",
                                            r#type: "button",
                                            onclick: move |_| {
                                                actions::select_quiz_option(
                                                    state.clone(),
                                                    question_index,
                                                    option_index,
                                                );
                                            },
                                            "{marker}. {option}"
                                        }
                                    }
                                });
                                let explanation = if checked { item.explanation.clone() } else { None };
                                rsx! {
                                    div { class: "quiz-item",
                                        p { class: "quiz-question", "{question_index + 1}. {item.question}" }
                                        div { class: "quiz-options", {options} }
                                        if let Some(text) = explanation {
                                            p { class: "quiz-explanation", "{text}" }
                                        }
                                    }
                                }
                            });
                        rsx! {
                            div { class: "quiz-items", {items} }
                            if let Some(score) = score {
                                p { class: "quiz-score", "Score: {score.correct} / {score.total}" }
                            } else {
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: quiz_check,
                                    "Check answers"
                                }
                            }
                        }
                    }
                    QuizState::RawText(raw) => rsx! {
                        pre { class: "quiz-raw", "{raw}" }
                    },
                    QuizState::Failed(message) => rsx! {
                        p { class: "error-line", "{message}" }
                    },
                }
            }

            if !match_list.is_empty() {
                section { class: "videos-panel",
                    h3 { class: "panel-title", "Relevant video chunks" }
                    div { class: "video-grid", {match_cards} }
                }
            }

            if let Some(preview) = state.active_preview.cloned() {
                section { class: "player-panel",
                    div { class: "player-header",
                        h3 { class: "panel-title", "{preview.label}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: preview_close,
                            "Close"
                        }
                    }
                    iframe {
                        class: "player-frame",
                        src: "{preview.embed_url}",
                        allow: "autoplay; encrypted-media",
                        allowfullscreen: true,
                    }
                }
            }

            section { class: "upload-panel",
                h3 { class: "panel-title", "Upload a course video" }
                div { class: "upload-controls",
                    input {
                        class: "upload-input",
                        r#type: "text",
                        placeholder: "Path to a video file...",
                        value: "{upload_path}",
                        oninput: move |evt| upload_path.set(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: uploading(),
                        onclick: upload,
                        if uploading() { "Uploading..." } else { "Upload" }
                    }
                }
                if let Some(message) = state.upload_error.cloned() {
                    p { class: "error-line", "{message}" }
                }
                if !uploads.is_empty() {
                    ul { class: "upload-list",
                        for video in uploads.iter() {
                            li { key: "{video.id}", "{video.title} ({video.chunks} chunks)" }
                        }
                    }
                }
            }

            if !state.topics.read().is_empty() {
                section { class: "topics-panel",
                    h3 { class: "panel-title", "Where you need practice" }
                    div { class: "topic-rows", {topic_bars} }
                }
            }
        }
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::prelude::*;
use futures::StreamExt;
use futures::channel::mpsc;
use tracing::warn;

use assistant_core::model::{SessionId, VideoMatch};
use assistant_core::{Intent, QuizState, VideoLinks};
use services::{
    AnswerExport, BackendClient, DEFAULT_EXPORT_FILE_NAME, ExportError, QuizOutcome,
    SpeechCapture, SpeechEvent, SpeechSink, append_transcript,
};

use super::state::{ActivePreview, AssistantState};

/// Sends the current question to the backend and applies the answer, unless
/// a newer question was issued while this one was in flight.
pub async fn submit_question(state: AssistantState, backend: Arc<BackendClient>) {
    let mut state = state;
    let question = state.question.cloned();
    if question.trim().is_empty() {
        state.error_msg.set(Some("Please type a question.".to_string()));
        return;
    }
    let intent = Intent::classify(&question);
    state.last_intent.set(Some(intent));
    state.error_msg.set(None);
    state.export_notice.set(None);
    state.loading.set(true);

    let seq = state.gate.issue();
    let language = state.language.cloned();
    let result = backend.ask(&question, language, intent).await;
    if !state.gate.admit(seq) {
        // A newer question owns the screen now.
        return;
    }
    match result {
        Ok(response) => {
            let answer = response.answer_or_placeholder().to_string();
            state.answer.set(answer.clone());
            state.matches.set(response.matches.clone());
            state
                .store
                .with_mut(|store| store.record_answer(&question, &answer, &response.matches));
            state
                .topics
                .with_mut(|topics| topics.record_matches(&response.matches));
        }
        Err(err) => {
            warn!(error = %err, "ask failed");
            state
                .error_msg
                .set(Some("Could not connect to backend.".to_string()));
        }
    }
    state.loading.set(false);
}

/// Snapshots the current session and opens a fresh one.
pub fn start_new_session(state: AssistantState) {
    let mut state = state;
    let now = state.clock.now();
    let question = state.question.cloned();
    let answer = state.answer.cloned();
    let matches = state.matches.cloned();
    state.store.with_mut(|store| {
        store.create_session(now, &question, &answer, &matches);
    });
    state.question.set(String::new());
    state.answer.set(String::new());
    state.matches.set(Vec::new());
    clear_session_scoped(&mut state);
}

/// Switches to another session, loading its fields into the chat cells.
/// Clicking the already-current pill does nothing.
pub fn switch_session(state: AssistantState, id: &SessionId) {
    let mut state = state;
    let question = state.question.cloned();
    let answer = state.answer.cloned();
    let matches = state.matches.cloned();
    let target = state
        .store
        .with_mut(|store| store.switch_to(id, &question, &answer, &matches).cloned());
    let Some(session) = target else {
        return;
    };
    state.question.set(session.question);
    state.answer.set(session.answer);
    state.matches.set(session.matches);
    clear_session_scoped(&mut state);
}

fn clear_session_scoped(state: &mut AssistantState) {
    state.quiz.with_mut(QuizState::reset);
    state.active_preview.set(None);
    state.last_intent.set(None);
    state.error_msg.set(None);
    state.export_notice.set(None);
}

/// Picks the quiz prompt and clears the previous round before the request
/// goes out, so a stale round cannot be answered while a new one is in
/// flight. Returns `None` when there is nothing to quiz on.
fn begin_quiz_request(quiz: &mut QuizState, question: &str, answer: &str) -> Option<String> {
    let prompt = if question.trim().is_empty() {
        answer
    } else {
        question
    };
    if prompt.trim().is_empty() {
        quiz.fail("Ask a question first, then generate a quiz.".to_string());
        return None;
    }
    quiz.reset();
    Some(prompt.to_string())
}

/// Requests a quiz for the current question, falling back to the answer
/// text when the question box is empty.
pub async fn generate_quiz(state: AssistantState, backend: Arc<BackendClient>) {
    let mut state = state;
    let question = state.question.cloned();
    let answer = state.answer.cloned();
    let prompt = state
        .quiz
        .with_mut(|quiz| begin_quiz_request(quiz, &question, &answer));
    let Some(prompt) = prompt else {
        return;
    };
    state.quiz_loading.set(true);
    let language = state.language.cloned();
    match backend.generate_quiz(&prompt, language).await {
        Ok(response) => match response.into_outcome() {
            QuizOutcome::Items(items) => state.quiz.with_mut(|quiz| quiz.load(items)),
            QuizOutcome::Raw(raw) => state.quiz.with_mut(|quiz| quiz.load_raw(raw)),
            QuizOutcome::Empty => state.quiz.with_mut(|quiz| {
                quiz.fail("Quiz could not be generated.".to_string());
            }),
        },
        Err(err) => {
            warn!(error = %err, "quiz request failed");
            state.quiz.with_mut(|quiz| {
                quiz.fail("Could not connect to quiz backend.".to_string());
            });
        }
    }
    state.quiz_loading.set(false);
}

pub fn select_quiz_option(state: AssistantState, question: usize, option: usize) {
    let mut state = state;
    state
        .quiz
        .with_mut(|quiz| quiz.select_option(question, option));
}

pub fn check_quiz(state: AssistantState) {
    let mut state = state;
    state.quiz.with_mut(|quiz| {
        quiz.check();
    });
}

/// Forwards capture events from the capability thread into the view task.
struct ChannelSink {
    tx: mpsc::UnboundedSender<SpeechEvent>,
}

impl SpeechSink for ChannelSink {
    fn on_start(&mut self) {
        let _ = self.tx.unbounded_send(SpeechEvent::Started);
    }

    fn on_result(&mut self, transcript: &str) {
        let _ = self
            .tx
            .unbounded_send(SpeechEvent::Result(transcript.to_string()));
    }

    fn on_error(&mut self, message: &str) {
        let _ = self
            .tx
            .unbounded_send(SpeechEvent::Error(message.to_string()));
    }

    fn on_end(&mut self) {
        let _ = self.tx.unbounded_send(SpeechEvent::Ended);
    }
}

/// Runs one speech-capture session, appending recognized transcripts to the
/// question box until the capability reports the end of the run.
pub async fn start_voice_input(state: AssistantState, speech: Arc<dyn SpeechCapture>) {
    let mut state = state;
    if state.is_listening.cloned() {
        return;
    }
    let (tx, mut rx) = mpsc::unbounded();
    if speech.start(Box::new(ChannelSink { tx })).is_err() {
        state
            .error_msg
            .set(Some("Voice input is not supported on this device.".to_string()));
        return;
    }
    while let Some(event) = rx.next().await {
        match event {
            SpeechEvent::Started => state.is_listening.set(true),
            SpeechEvent::Result(transcript) => {
                let appended = append_transcript(&state.question.cloned(), &transcript);
                state.question.set(appended);
            }
            SpeechEvent::Error(message) => {
                warn!(message, "speech capture error");
                state.error_msg.set(Some(
                    "Problem with microphone or speech recognition.".to_string(),
                ));
            }
            SpeechEvent::Ended => break,
        }
    }
    state.is_listening.set(false);
}

/// Writes the current question, answer and matches as a PDF into the
/// export directory.
pub fn export_pdf(state: AssistantState, export_dir: &Path) {
    let mut state = state;
    let export = AnswerExport {
        question: state.question.cloned(),
        answer: state.answer.cloned(),
        matches: state.matches.cloned(),
    };
    let path = export_dir.join(DEFAULT_EXPORT_FILE_NAME);
    match export.save_pdf(&path) {
        Ok(()) => {
            state.error_msg.set(None);
            state
                .export_notice
                .set(Some(format!("Saved {}", path.display())));
        }
        Err(ExportError::Empty) => {
            state
                .error_msg
                .set(Some("Ask a question first, then export PDF.".to_string()));
        }
        Err(err) => {
            warn!(error = %err, "pdf export failed");
            state
                .error_msg
                .set(Some("Could not export the PDF.".to_string()));
        }
    }
}

/// Resolves a match into an inline player target.
pub fn preview_video(state: AssistantState, links: &VideoLinks, m: &VideoMatch) {
    let mut state = state;
    if links.watch_url(m.number).is_none() {
        state.error_msg.set(Some(
            "No direct video link found for inline preview.".to_string(),
        ));
        return;
    }
    match links.embed_url(m) {
        Some(embed_url) => {
            state.error_msg.set(None);
            state.active_preview.set(Some(ActivePreview {
                label: format!("Video {} - {}", m.number, m.title),
                embed_url,
            }));
        }
        None => {
            state
                .error_msg
                .set(Some("Could not extract video ID.".to_string()));
        }
    }
}

pub fn close_preview(state: AssistantState) {
    let mut state = state;
    state.active_preview.set(None);
}

/// Reads the file named in the upload box and sends it to the backend for
/// transcription and indexing.
pub async fn upload_video(state: AssistantState, backend: Arc<BackendClient>) {
    let mut state = state;
    let path_text = state.upload_path.cloned().trim().to_string();
    if path_text.is_empty() {
        state
            .upload_error
            .set(Some("Choose a video file to upload.".to_string()));
        return;
    }
    let path = PathBuf::from(&path_text);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.mp4")
        .to_string();
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "could not read upload file");
            state
                .upload_error
                .set(Some("Could not read that file.".to_string()));
            return;
        }
    };
    state.upload_error.set(None);
    state.uploading.set(true);
    match backend.upload_video(&file_name, bytes).await {
        Ok(response) => {
            let message = response.message.clone();
            match response.into_video() {
                Some(video) => {
                    state.uploads.with_mut(|uploads| uploads.push(video));
                    state.upload_path.set(String::new());
                }
                None => {
                    state
                        .upload_error
                        .set(Some(message.unwrap_or_else(|| "Upload failed.".to_string())));
                }
            }
        }
        Err(err) => {
            warn!(error = %err, "upload failed");
            state
                .upload_error
                .set(Some("Could not connect to backend.".to_string()));
        }
    }
    state.uploading.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_core::model::QuizItem;
    use services::replay_events;

    #[test]
    fn regeneration_clears_the_old_round_before_the_request() {
        let mut quiz = QuizState::default();
        quiz.load(vec![QuizItem {
            question: "What does CSS stand for?".to_string(),
            options: vec!["Cascading Style Sheets".to_string(), "Computer Style".to_string()],
            answer: "Cascading Style Sheets".to_string(),
            explanation: None,
        }]);
        quiz.select_option(0, 0);

        let prompt = begin_quiz_request(&mut quiz, "what is flexbox", "");
        assert_eq!(prompt.as_deref(), Some("what is flexbox"));
        assert_eq!(quiz, QuizState::Empty);
    }

    #[test]
    fn quiz_without_question_or_answer_fails_up_front() {
        let mut quiz = QuizState::default();
        let prompt = begin_quiz_request(&mut quiz, "  ", "");
        assert_eq!(prompt, None);
        assert_eq!(
            quiz,
            QuizState::Failed("Ask a question first, then generate a quiz.".to_string())
        );
    }

    #[test]
    fn quiz_prompt_falls_back_to_the_answer() {
        let mut quiz = QuizState::default();
        let prompt = begin_quiz_request(&mut quiz, "", "Flexbox lays out items in one dimension.");
        assert_eq!(
            prompt.as_deref(),
            Some("Flexbox lays out items in one dimension.")
        );
    }

    #[test]
    fn channel_sink_forwards_the_event_contract() {
        let (tx, mut rx) = mpsc::unbounded();
        let mut sink = ChannelSink { tx };
        replay_events(
            &mut sink,
            &[
                SpeechEvent::Started,
                SpeechEvent::Result("what is flexbox".to_string()),
                SpeechEvent::Ended,
            ],
        );
        drop(sink);

        let mut seen = Vec::new();
        while let Ok(Some(event)) = rx.try_next() {
            seen.push(event);
        }
        assert_eq!(
            seen,
            [
                SpeechEvent::Started,
                SpeechEvent::Result("what is flexbox".to_string()),
                SpeechEvent::Ended,
            ]
        );
    }
}

//! End-to-end ordering behavior for overlapping ask calls.
//!
//! Two asks are issued back to back against a fake backend whose first
//! response resolves last. The gate must discard the stale response so the
//! final state always reflects the latest-issued question, regardless of
//! resolution order.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use assistant_core::model::{Language, VideoMatch};
use assistant_core::{Intent, SessionStore, TopicTracker, time::fixed_now};
use services::{AskResponse, BackendError, ResponseGate};

#[async_trait]
trait AskBackend: Send + Sync {
    async fn ask(
        &self,
        question: &str,
        language: Language,
        intent: Intent,
    ) -> Result<AskResponse, BackendError>;
}

/// Fake backend that answers after a per-question delay, echoing the
/// question so the test can tell responses apart.
struct DelayedBackend {
    delays: Vec<(&'static str, Duration)>,
}

#[async_trait]
impl AskBackend for DelayedBackend {
    async fn ask(
        &self,
        question: &str,
        _language: Language,
        _intent: Intent,
    ) -> Result<AskResponse, BackendError> {
        let delay = self
            .delays
            .iter()
            .find(|(q, _)| *q == question)
            .map(|(_, d)| *d)
            .unwrap_or_default();
        tokio::time::sleep(delay).await;
        Ok(AskResponse {
            answer: format!("answer to: {question}"),
            matches: vec![VideoMatch {
                number: 3,
                title: "Closures".to_string(),
                start: 10.0,
                end: 40.0,
                text: question.to_string(),
            }],
        })
    }
}

struct SharedState {
    store: SessionStore,
    topics: TopicTracker,
}

/// One ask flow: classify, tag, call, and apply the response only when the
/// gate still admits its sequence number.
async fn run_ask(
    backend: Arc<dyn AskBackend>,
    gate: Arc<ResponseGate>,
    state: Arc<Mutex<SharedState>>,
    question: &str,
) {
    let intent = Intent::classify(question);
    let seq = gate.issue();
    let response = backend
        .ask(question, Language::En, intent)
        .await
        .expect("fake backend cannot fail");
    if !gate.admit(seq) {
        return;
    }
    let mut state = state.lock().expect("state lock");
    state
        .store
        .record_answer(question, &response.answer, &response.matches);
    state.topics.record_matches(&response.matches);
}

#[tokio::test]
async fn stale_response_is_discarded_even_when_it_resolves_last() {
    // First-issued resolves later than second-issued.
    let backend = Arc::new(DelayedBackend {
        delays: vec![
            ("first question", Duration::from_millis(80)),
            ("second question", Duration::from_millis(10)),
        ],
    });
    let gate = Arc::new(ResponseGate::new());
    let state = Arc::new(Mutex::new(SharedState {
        store: SessionStore::new(fixed_now()),
        topics: TopicTracker::new(),
    }));

    let first_backend: Arc<dyn AskBackend> = backend.clone();
    let first = tokio::spawn(run_ask(
        first_backend,
        gate.clone(),
        state.clone(),
        "first question",
    ));
    // Give the first task time to issue its sequence number before the
    // second overtakes it.
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second_backend: Arc<dyn AskBackend> = backend;
    let second = tokio::spawn(run_ask(
        second_backend,
        gate,
        state.clone(),
        "second question",
    ));

    first.await.expect("first task");
    second.await.expect("second task");

    let state = state.lock().expect("state lock");
    // The later-issued ask wins even though it resolved first; the stale
    // response did not overwrite it afterwards.
    assert_eq!(state.store.current().answer, "answer to: second question");
    assert_eq!(state.store.current().question, "second question");
    // Only the admitted response fed the topic tracker.
    assert_eq!(state.topics.count("Closures"), 1);
}

#[tokio::test]
async fn answer_flow_records_session_title_and_topics() {
    let backend = Arc::new(DelayedBackend { delays: vec![] });
    let gate = Arc::new(ResponseGate::new());
    let state = Arc::new(Mutex::new(SharedState {
        store: SessionStore::new(fixed_now()),
        topics: TopicTracker::new(),
    }));

    let question = "explain what is a closure";
    assert_eq!(Intent::classify(question), Intent::Explain);
    run_ask(backend, gate, state.clone(), question).await;

    let state = state.lock().expect("state lock");
    assert_eq!(state.store.current().title, question);
    assert_eq!(state.topics.count("Closures"), 1);
}

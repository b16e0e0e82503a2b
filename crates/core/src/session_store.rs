//! In-memory chat session list.
//!
//! Sessions accumulate for the process lifetime and are mutated in place by
//! id. Exactly one session is current at any time, and the current id always
//! resolves to a member of the list. All mutation goes through the
//! transition methods here so the invariant holds by construction.

use chrono::{DateTime, Utc};

use crate::model::{ChatSession, SessionId, VideoMatch, derive_session_title};

/// Ordered list of chat sessions plus the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    current_id: SessionId,
}

impl SessionStore {
    /// Creates a store holding a single fresh session, which is current.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        let initial = ChatSession::new(now);
        let current_id = initial.id().clone();
        Self {
            sessions: vec![initial],
            current_id,
        }
    }

    /// All sessions, newest first.
    #[must_use]
    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    #[must_use]
    pub fn current_id(&self) -> &SessionId {
        &self.current_id
    }

    /// The current session. The current id is maintained by every
    /// transition, so the lookup cannot miss.
    #[must_use]
    pub fn current(&self) -> &ChatSession {
        self.sessions
            .iter()
            .find(|s| s.id() == &self.current_id)
            .unwrap_or(&self.sessions[0])
    }

    fn current_mut(&mut self) -> &mut ChatSession {
        let id = self.current_id.clone();
        let index = self
            .sessions
            .iter()
            .position(|s| s.id() == &id)
            .unwrap_or(0);
        &mut self.sessions[index]
    }

    /// Overwrites the current session's fields in place, so no in-flight
    /// edits are lost before switching away.
    pub fn snapshot_current(&mut self, question: &str, answer: &str, matches: &[VideoMatch]) {
        let session = self.current_mut();
        session.question = question.to_string();
        session.answer = answer.to_string();
        session.matches = matches.to_vec();
    }

    /// Snapshots the current session, then inserts a fresh session at the
    /// front of the list and makes it current.
    pub fn create_session(
        &mut self,
        now: DateTime<Utc>,
        question: &str,
        answer: &str,
        matches: &[VideoMatch],
    ) -> &ChatSession {
        self.snapshot_current(question, answer, matches);
        let session = ChatSession::new(now);
        self.current_id = session.id().clone();
        self.sessions.insert(0, session);
        &self.sessions[0]
    }

    /// Switches to `id` after snapshotting the current session. Returns the
    /// target session so the caller can load its fields into view state.
    ///
    /// Switching to the already-current id, or to an id that is not in the
    /// list, is a silent no-op and returns `None`.
    pub fn switch_to(
        &mut self,
        id: &SessionId,
        question: &str,
        answer: &str,
        matches: &[VideoMatch],
    ) -> Option<&ChatSession> {
        if id == &self.current_id {
            return None;
        }
        if !self.sessions.iter().any(|s| s.id() == id) {
            return None;
        }
        self.snapshot_current(question, answer, matches);
        self.current_id = id.clone();
        Some(self.current())
    }

    /// Records a successful answer on the current session: question, answer
    /// and matches are overwritten, and a session still carrying the default
    /// title takes the question (truncated) as its title.
    pub fn record_answer(&mut self, question: &str, answer: &str, matches: &[VideoMatch]) {
        let session = self.current_mut();
        session.question = question.to_string();
        session.answer = answer.to_string();
        session.matches = matches.to_vec();
        if session.has_default_title() {
            session.title = derive_session_title(question);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_SESSION_TITLE;
    use crate::time::fixed_now;

    fn one_match(title: &str) -> Vec<VideoMatch> {
        vec![VideoMatch {
            number: 3,
            title: title.to_string(),
            start: 10.0,
            end: 20.0,
            text: "chunk".to_string(),
        }]
    }

    #[test]
    fn new_store_has_one_current_session() {
        let store = SessionStore::new(fixed_now());
        assert_eq!(store.sessions().len(), 1);
        assert_eq!(store.current().id(), store.current_id());
    }

    #[test]
    fn create_session_snapshots_and_goes_front() {
        let mut store = SessionStore::new(fixed_now());
        let first_id = store.current_id().clone();
        store.create_session(fixed_now(), "draft question", "", &[]);

        assert_eq!(store.sessions().len(), 2);
        // New session is at the front and current.
        assert_eq!(store.sessions()[0].id(), store.current_id());
        assert_ne!(store.current_id(), &first_id);
        // The old session kept the in-flight edit.
        assert_eq!(store.sessions()[1].question, "draft question");
    }

    #[test]
    fn switching_never_loses_unsaved_edits() {
        let mut store = SessionStore::new(fixed_now());
        let first_id = store.current_id().clone();
        store.create_session(fixed_now(), "", "", &[]);
        let second_id = store.current_id().clone();

        // Edits typed into the second session survive a round trip.
        let target = store
            .switch_to(&first_id, "typed but not asked", "", &[])
            .expect("switch to first");
        assert!(target.question.is_empty());
        assert_eq!(store.current_id(), &first_id);

        store.switch_to(&second_id, "", "", &[]).expect("switch back");
        assert_eq!(store.current().question, "typed but not asked");
    }

    #[test]
    fn switch_to_current_id_is_noop() {
        let mut store = SessionStore::new(fixed_now());
        let id = store.current_id().clone();
        assert!(store.switch_to(&id, "edit", "", &[]).is_none());
        // No snapshot happened.
        assert!(store.current().question.is_empty());
    }

    #[test]
    fn switch_to_unknown_id_is_silent_noop() {
        let mut store = SessionStore::new(fixed_now());
        let ghost = SessionId::generate(fixed_now());
        assert!(store.switch_to(&ghost, "edit", "", &[]).is_none());
        assert_ne!(store.current_id(), &ghost);
        assert!(store.current().question.is_empty());
    }

    #[test]
    fn record_answer_sets_title_once() {
        let mut store = SessionStore::new(fixed_now());
        assert_eq!(store.current().title, DEFAULT_SESSION_TITLE);

        store.record_answer("what is flexbox", "an answer", &one_match("Flexbox"));
        assert_eq!(store.current().title, "what is flexbox");
        assert_eq!(store.current().matches.len(), 1);

        // A second answer does not retitle the session.
        store.record_answer("something much longer entirely", "another answer", &[]);
        assert_eq!(store.current().title, "what is flexbox");
    }

    #[test]
    fn record_answer_truncates_long_titles() {
        let mut store = SessionStore::new(fixed_now());
        store.record_answer(
            "explain the difference between let and const",
            "answer",
            &[],
        );
        assert_eq!(store.current().title, "explain the difference betw...");
    }
}

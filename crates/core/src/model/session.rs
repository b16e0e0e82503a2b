use chrono::{DateTime, Utc};

use crate::model::{SessionId, VideoMatch};

/// Title given to a session before its first answered question.
pub const DEFAULT_SESSION_TITLE: &str = "New chat";

/// One independent question/answer conversation thread, retained in memory
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    id: SessionId,
    pub title: String,
    pub question: String,
    pub answer: String,
    pub matches: Vec<VideoMatch>,
}

impl ChatSession {
    /// Creates an empty session with the default title.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::generate(now),
            title: DEFAULT_SESSION_TITLE.to_string(),
            question: String::new(),
            answer: String::new(),
            matches: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// True while the session still carries the placeholder title.
    #[must_use]
    pub fn has_default_title(&self) -> bool {
        self.title.is_empty() || self.title == DEFAULT_SESSION_TITLE
    }
}

/// Derives a session title from the first answered question: the question
/// itself, truncated to 27 characters plus an ellipsis when longer than 30.
#[must_use]
pub fn derive_session_title(question: &str) -> String {
    if question.chars().count() > 30 {
        let head: String = question.chars().take(27).collect();
        format!("{head}...")
    } else {
        question.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn new_session_is_blank() {
        let s = ChatSession::new(fixed_now());
        assert_eq!(s.title, DEFAULT_SESSION_TITLE);
        assert!(s.has_default_title());
        assert!(s.question.is_empty());
        assert!(s.answer.is_empty());
        assert!(s.matches.is_empty());
    }

    #[test]
    fn short_question_becomes_title_verbatim() {
        assert_eq!(derive_session_title("what is flexbox"), "what is flexbox");
    }

    #[test]
    fn exactly_thirty_chars_is_not_truncated() {
        let q = "a".repeat(30);
        assert_eq!(derive_session_title(&q), q);
    }

    #[test]
    fn long_question_truncates_to_27_plus_ellipsis() {
        let q = "explain the difference between let and const";
        let title = derive_session_title(q);
        assert_eq!(title, "explain the difference betw...");
        assert_eq!(title.chars().count(), 30);
    }
}

//! Quiz state machine.
//!
//! `Empty -> Loaded -> (selecting)* -> checked`, with a raw-text fallback
//! when the backend returns unstructured output and a failed state when it
//! returns nothing usable. Regenerating a quiz or switching sessions resets
//! to `Empty`, which also invalidates all selection indices.

use std::collections::BTreeMap;

use crate::model::QuizItem;

/// Score produced by checking a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// A loaded quiz round: the generated items plus per-question selections
/// and, once checked, the score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizRound {
    items: Vec<QuizItem>,
    selected: BTreeMap<usize, usize>,
    score: Option<QuizScore>,
}

impl QuizRound {
    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Selected option index for a question, if any.
    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selected.get(&question).copied()
    }

    /// Score from the last check, cleared by any later selection.
    #[must_use]
    pub fn score(&self) -> Option<QuizScore> {
        self.score
    }

    /// True once `check` has run and no selection has changed since.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.score.is_some()
    }
}

/// Current quiz state for the active session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QuizState {
    /// No quiz generated yet (or reset by regeneration/session switch).
    #[default]
    Empty,
    /// Structured items ready to answer.
    Loaded(QuizRound),
    /// The backend fell back to unstructured text.
    RawText(String),
    /// Generation failed or produced nothing; holds the user-facing message.
    Failed(String),
}

impl QuizState {
    /// Replaces whatever was loaded with a fresh round. Selections and any
    /// prior score are gone wholesale.
    pub fn load(&mut self, items: Vec<QuizItem>) {
        *self = QuizState::Loaded(QuizRound {
            items,
            selected: BTreeMap::new(),
            score: None,
        });
    }

    pub fn load_raw(&mut self, raw: String) {
        *self = QuizState::RawText(raw);
    }

    pub fn fail(&mut self, message: String) {
        *self = QuizState::Failed(message);
    }

    pub fn reset(&mut self) {
        *self = QuizState::Empty;
    }

    #[must_use]
    pub fn round(&self) -> Option<&QuizRound> {
        match self {
            QuizState::Loaded(round) => Some(round),
            _ => None,
        }
    }

    /// Records a choice for one question and drops any displayed score, so
    /// a changed answer always invalidates a prior check. Selections for
    /// other questions are kept.
    ///
    /// No-op unless a round is loaded, the question exists, and the option
    /// index points at one of its options.
    pub fn select_option(&mut self, question: usize, option: usize) {
        let QuizState::Loaded(round) = self else {
            return;
        };
        let Some(item) = round.items.get(question) else {
            return;
        };
        if option >= item.options.len() {
            return;
        }
        round.selected.insert(question, option);
        round.score = None;
    }

    /// Scores the round: every question with a selection matching its
    /// answer text (trimmed, case-insensitive) counts as correct;
    /// unanswered questions count as incorrect. Transitions to checked.
    ///
    /// Returns `None` when no round is loaded.
    pub fn check(&mut self) -> Option<QuizScore> {
        let QuizState::Loaded(round) = self else {
            return None;
        };
        let correct = round
            .items
            .iter()
            .enumerate()
            .filter(|(idx, item)| {
                round
                    .selected
                    .get(idx)
                    .is_some_and(|opt| item.is_correct_option(*opt))
            })
            .count();
        let score = QuizScore {
            correct,
            total: round.items.len(),
        };
        round.score = Some(score);
        Some(score)
    }
}

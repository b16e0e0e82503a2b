//! Keyword-heuristic intent detection.
//!
//! Classifies the purpose of a question so the backend can adjust its answer
//! style. No model, no scoring: ordered, case-insensitive containment checks,
//! first match wins. Deterministic and total over all strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a question's purpose, sent as a backend hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Auto,
    Debug,
    Code,
    Compare,
    Explain,
}

const DEBUG_WORDS: &[&str] = &["error", "not working", "bug", "traceback", "issue", "crash"];

const CODE_WORDS: &[&str] = &[
    "write code",
    "generate code",
    "code for",
    "implementation",
    "example code",
    "snippet",
    "program to",
];

const COMPARE_WORDS: &[&str] = &[
    "difference between",
    " vs ",
    "vs.",
    "compare",
    "which is better",
];

const EXPLAIN_WORDS: &[&str] = &["what is", "explain", "meaning of", "concept of"];

impl Intent {
    /// Classifies a question. Empty or whitespace-only input maps to
    /// `Auto`; anything else falls through the keyword sets in priority
    /// order (debug > code > compare > explain) and defaults to `Explain`.
    #[must_use]
    pub fn classify(question: &str) -> Self {
        let q = question.to_lowercase();
        if q.trim().is_empty() {
            return Intent::Auto;
        }
        if contains_any(&q, DEBUG_WORDS) {
            return Intent::Debug;
        }
        if contains_any(&q, CODE_WORDS) {
            return Intent::Code;
        }
        if contains_any(&q, COMPARE_WORDS) {
            return Intent::Compare;
        }
        if contains_any(&q, EXPLAIN_WORDS) {
            return Intent::Explain;
        }
        Intent::Explain
    }

    /// Wire value used in `/ask` request bodies.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Intent::Auto => "auto",
            Intent::Debug => "debug",
            Intent::Code => "code",
            Intent::Compare => "compare",
            Intent::Explain => "explain",
        }
    }

    /// Human-readable label for the intent indicator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Intent::Auto => "Auto",
            Intent::Debug => "Debug / Fix errors",
            Intent::Code => "Code generation",
            Intent::Compare => "Compare concepts",
            Intent::Explain => "Explain / Theory",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

use serde::{Deserialize, Serialize};

/// One multiple-choice question generated by the quiz backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizItem {
    /// True when an option at `index` matches the stored answer after
    /// trimming and case folding.
    #[must_use]
    pub fn is_correct_option(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_some_and(|opt| normalized_eq(opt, &self.answer))
    }

    /// Index of the option whose text equals the stored answer, if the
    /// backend phrased the answer as one of the options.
    #[must_use]
    pub fn correct_option_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|opt| normalized_eq(opt, &self.answer))
    }
}

fn normalized_eq(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

use serde::{Deserialize, Serialize};

/// Answer language requested from the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
}

impl Language {
    /// Wire value used in backend request bodies.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    /// Human-readable name for the language selector.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Mr => "Marathi",
        }
    }

    /// Parses a selector value back into a language. Unknown codes fall
    /// back to English.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "hi" => Language::Hi,
            "mr" => Language::Mr,
            _ => Language::En,
        }
    }

    /// All selectable languages, in display order.
    #[must_use]
    pub fn all() -> [Language; 3] {
        [Language::En, Language::Hi, Language::Mr]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("de"), Language::En);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&Language::Mr).unwrap();
        assert_eq!(json, "\"mr\"");
    }
}

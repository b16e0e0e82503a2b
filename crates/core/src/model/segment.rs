use serde::{Deserialize, Serialize};

/// A transcript segment the backend matched against a question.
///
/// Produced only by `/ask` responses and owned by the session that received
/// it; never mutated afterwards. `number` is `-1` for user-uploaded videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMatch {
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

impl VideoMatch {
    /// Key used to aggregate match frequency: the display title, or a
    /// synthesized `Video {number}` when the title is absent.
    #[must_use]
    pub fn topic_key(&self) -> String {
        if self.title.trim().is_empty() {
            format!("Video {}", self.number)
        } else {
            self.title.clone()
        }
    }

    /// Start of the segment, rounded to whole seconds for display and links.
    #[must_use]
    pub fn start_seconds(&self) -> i64 {
        self.start.round() as i64
    }

    /// End of the segment, rounded to whole seconds.
    #[must_use]
    pub fn end_seconds(&self) -> i64 {
        self.end.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(number: i32, title: &str) -> VideoMatch {
        VideoMatch {
            number,
            title: title.to_string(),
            start: 12.6,
            end: 48.2,
            text: "forms need a submit handler".to_string(),
        }
    }

    #[test]
    fn topic_key_prefers_title() {
        assert_eq!(segment(3, "HTML Forms").topic_key(), "HTML Forms");
    }

    #[test]
    fn topic_key_falls_back_to_video_number() {
        assert_eq!(segment(7, "").topic_key(), "Video 7");
        assert_eq!(segment(-1, "  ").topic_key(), "Video -1");
    }

    #[test]
    fn seconds_round_to_nearest() {
        let m = segment(1, "t");
        assert_eq!(m.start_seconds(), 13);
        assert_eq!(m.end_seconds(), 48);
    }

    #[test]
    fn decodes_with_missing_fields() {
        let m: VideoMatch = serde_json::from_str(r#"{"number": 4}"#).unwrap();
        assert_eq!(m.number, 4);
        assert!(m.title.is_empty());
        assert_eq!(m.topic_key(), "Video 4");
    }
}

use assistant_core::model::{ChatSession, VideoMatch};
use assistant_core::topics::bar_width_percent;

/// Label shown on a session pill: the title, shortened to 23 characters
/// plus an ellipsis when longer than 26. Default-titled sessions always
/// render as "New chat".
#[must_use]
pub fn session_pill_label(session: &ChatSession) -> String {
    if session.has_default_title() {
        return "New chat".to_string();
    }
    if session.title.chars().count() > 26 {
        let head: String = session.title.chars().take(23).collect();
        format!("{head}...")
    } else {
        session.title.clone()
    }
}

/// Rounded-seconds time range for a match card.
#[must_use]
pub fn time_range_label(m: &VideoMatch) -> String {
    format!("{}s - {}s", m.start_seconds(), m.end_seconds())
}

/// Marker for a quiz option: letters for the first 26, the 1-based number
/// past that.
#[must_use]
pub fn option_marker(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Inline style for a weak-topic bar.
#[must_use]
pub fn bar_width_style(count: u32) -> String {
    format!("width: {}%", bar_width_percent(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_core::time::fixed_now;

    #[test]
    fn default_title_renders_as_new_chat() {
        let session = ChatSession::new(fixed_now());
        assert_eq!(session_pill_label(&session), "New chat");
    }

    #[test]
    fn long_titles_shorten_for_the_pill() {
        let mut session = ChatSession::new(fixed_now());
        session.title = "how do promises work with async await".to_string();
        assert_eq!(session_pill_label(&session), "how do promises work wi...");

        session.title = "short title".to_string();
        assert_eq!(session_pill_label(&session), "short title");
    }

    #[test]
    fn time_range_rounds_seconds() {
        let m = VideoMatch {
            number: 1,
            title: String::new(),
            start: 59.6,
            end: 80.3,
            text: String::new(),
        };
        assert_eq!(time_range_label(&m), "60s - 80s");
    }

    #[test]
    fn option_markers_fall_back_to_numbers_after_z() {
        assert_eq!(option_marker(0), "A");
        assert_eq!(option_marker(25), "Z");
        assert_eq!(option_marker(26), "27");
        assert_eq!(option_marker(200), "201");
    }

    #[test]
    fn bar_style_is_a_percent_width() {
        assert_eq!(bar_width_style(2), "width: 50%");
    }
}

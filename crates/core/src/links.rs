//! Course video link resolution.
//!
//! Maps backend video numbers to YouTube watch URLs and builds the link
//! shapes the view needs: a timestamped watch link, a search fallback for
//! unmapped numbers, and the embed URL for the inline preview iframe.

use std::collections::HashMap;

use url::Url;

use crate::model::VideoMatch;

/// Lookup table from course video number to its YouTube watch URL.
///
/// Loaded from a JSON object of `{"<number>": "<watch url>"}` pairs; user
/// uploads (`number = -1`) are intentionally absent.
#[derive(Debug, Clone, Default)]
pub struct VideoLinks {
    links: HashMap<i32, String>,
}

impl VideoLinks {
    #[must_use]
    pub fn new(links: HashMap<i32, String>) -> Self {
        Self { links }
    }

    /// Builds the table from string-keyed JSON map entries. Keys that are
    /// not integers are skipped.
    #[must_use]
    pub fn from_string_keys(entries: HashMap<String, String>) -> Self {
        let links = entries
            .into_iter()
            .filter_map(|(key, value)| key.trim().parse::<i32>().ok().map(|n| (n, value)))
            .collect();
        Self { links }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn watch_url(&self, number: i32) -> Option<&str> {
        self.links.get(&number).map(String::as_str)
    }

    /// Link opened by the "YouTube" button: the mapped watch URL with a
    /// start-time offset, or a search-results URL when the number is not
    /// mapped.
    #[must_use]
    pub fn open_url(&self, m: &VideoMatch) -> String {
        match self.watch_url(m.number) {
            Some(base) => format!("{base}&t={}s", m.start_seconds()),
            None => {
                let query = format!("{} Video {}", m.title, m.number);
                format!(
                    "https://www.youtube.com/results?search_query={}",
                    urlencoding::encode(&query)
                )
            }
        }
    }

    /// Embed target for the inline preview, when the match maps to a watch
    /// URL carrying a video id.
    #[must_use]
    pub fn embed_url(&self, m: &VideoMatch) -> Option<String> {
        let base = self.watch_url(m.number)?;
        let video_id = video_id_from_watch_url(base)?;
        Some(embed_url(&video_id, m.start_seconds()))
    }
}

/// Iframe source for the inline player.
#[must_use]
pub fn embed_url(video_id: &str, start_seconds: i64) -> String {
    format!("https://www.youtube.com/embed/{video_id}?start={start_seconds}&autoplay=1&rel=0")
}

/// Extracts the `v` query parameter from a YouTube watch URL.
#[must_use]
pub fn video_id_from_watch_url(watch_url: &str) -> Option<String> {
    let url = Url::parse(watch_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
}

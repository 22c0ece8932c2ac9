use std::{fmt, ops::Deref, sync::LazyLock};

use regex::Regex;

static WATCH_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"v=([^&]+)").unwrap());

/// A YouTube video identifier, e.g. `dQw4w9WgXcQ`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        VideoId(id.into())
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the video identifier from a YouTube URL.
///
/// `youtube.com` URLs yield the `v` query parameter up to the next `&`;
/// `youtu.be` URLs yield their final path segment. Anything else, or an empty
/// extraction, yields `None`.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let video_id = if url.contains("youtube.com") {
        WATCH_PARAM_RE
            .captures(url)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    } else if url.contains("youtu.be") {
        url.rsplit('/')
            .next()
            .and_then(|segment| segment.split(['?', '#']).next())
    } else {
        None
    };

    match video_id.filter(|id| !id.is_empty()) {
        Some(id) => Some(VideoId::new(id)),
        None => {
            tracing::warn!(url, "URL do YouTube inválida");
            None
        }
    }
}

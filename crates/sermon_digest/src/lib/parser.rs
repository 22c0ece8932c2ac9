//! # Yt Parser
//!
//! This module pulls caption data out of YouTube watch pages: the embedded
//! `ytInitialPlayerResponse` script blob, the caption track listing inside it,
//! and the `json3` timed-text payload a caption track points to.

use std::{ops::Deref, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::{
    error::Error,
    types::{CaptionTrack, PlayerResponse, TimedText, TranscriptSegment},
    yt::TranscriptError,
};

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(?:var\s+)?ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s+meta\b|</script>)",
    )
    .unwrap()
});

/// Picks the caption track to fetch for the given language preference.
///
/// Languages are tried in order; within a language a manually created track
/// wins over an auto-generated one.
///
/// # Returns
/// * `Ok(&CaptionTrack)` for the best matching track.
/// * `Err(TranscriptError::Provider)` if the video is not playable.
/// * `Err(TranscriptError::Disabled)` if the video exposes no caption tracks at all.
/// * `Err(TranscriptError::NotFound)` if no track matches any requested language.
pub fn select_caption_track<'a>(
    player: &'a PlayerResponse,
    languages: &[&str],
) -> Result<&'a CaptionTrack, TranscriptError> {
    if let Some(status) = player
        .playability_status
        .as_ref()
        .filter(|s| s.status != "OK")
    {
        return Err(TranscriptError::Provider(
            status
                .reason
                .clone()
                .unwrap_or_else(|| format!("video is not playable ({})", status.status)),
        ));
    }

    let tracks = player
        .captions
        .as_ref()
        .and_then(|c| c.player_captions_tracklist_renderer.as_ref())
        .map(|r| r.caption_tracks.as_slice())
        .unwrap_or_default();

    if tracks.is_empty() {
        return Err(TranscriptError::Disabled);
    }

    languages
        .iter()
        .find_map(|lang| {
            tracks
                .iter()
                .filter(|t| t.language_code == *lang)
                .sorted_by_key(|t| t.is_generated())
                .next()
        })
        .ok_or(TranscriptError::NotFound)
}

/// Parses a `fmt=json3` timed-text payload into ordered transcript segments.
///
/// Events without text (window/style events, bare line breaks) are skipped.
#[tracing::instrument(skip_all)]
pub fn parse_timed_text(payload: &str) -> Result<Vec<TranscriptSegment>, Error> {
    let timed_text = serde_json::from_str::<TimedText>(payload)?;

    let segments = timed_text
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event.segs?.into_iter().map(|s| s.utf8).join("");
            if text.trim().is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                text,
                start: event.t_start_ms as f64 / 1000.0,
                duration: event.d_duration_ms as f64 / 1000.0,
            })
        })
        .collect();

    Ok(segments)
}

pub struct YtHtmlDocument(String);

impl Deref for YtHtmlDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl YtHtmlDocument {
    pub fn new(doc: String) -> Self {
        YtHtmlDocument(doc)
    }

    pub fn to_json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(Error::ParseError(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))
    }

    pub fn player_response(&self) -> Result<PlayerResponse, Error> {
        self.to_json::<PlayerResponse>()
    }
}

impl From<String> for YtHtmlDocument {
    fn from(value: String) -> Self {
        YtHtmlDocument(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn player(captions: Value) -> PlayerResponse {
        serde_json::from_value(json!({
            "playabilityStatus": { "status": "OK" },
            "captions": captions,
        }))
        .unwrap()
    }

    fn tracklist(tracks: Value) -> Value {
        json!({ "playerCaptionsTracklistRenderer": { "captionTracks": tracks } })
    }

    #[test]
    fn test_successful_extraction() {
        let html = r#"
            <html>
                <head>
                    <script nonce="gZTn8MILMQFuWon1rDk2VA">
                        var ytInitialPlayerResponse = {"key": "value", "number": 42};var meta = document.createElement('meta');
                    </script>
                </head>
            </html>
        "#;

        let doc = YtHtmlDocument::from(html.to_string());
        let result = doc.to_json::<Value>();
        assert!(result.is_ok(), "Failed to extract JSON: {:?}", result.err());
        assert_eq!(result.unwrap(), json!({"key": "value", "number": 42}));
    }

    #[test]
    fn test_extraction_ending_at_script_tag() {
        let html = r#"<script>var ytInitialPlayerResponse = {"nested": {"a": [1, 2]}};</script>"#;

        let doc = YtHtmlDocument::from(html.to_string());
        let json = doc.to_json::<Value>().expect("Failed to extract JSON");
        assert_eq!(json, json!({"nested": {"a": [1, 2]}}));
    }

    #[test]
    fn test_extraction_with_no_data() {
        let doc = YtHtmlDocument::new("<html><body>nothing here</body></html>".to_string());
        let result = doc.to_json::<Value>();
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_extraction_with_invalid_json() {
        let html = r#"<script>var ytInitialPlayerResponse = {invalid: json};</script>"#;

        let doc = YtHtmlDocument::from(html.to_string());
        assert!(matches!(doc.to_json::<Value>(), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_player_response_with_captions() {
        let html = r#"<script>var ytInitialPlayerResponse = {"playabilityStatus":{"status":"OK"},"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=pt","languageCode":"pt","kind":"asr"}]}}};</script>"#;

        let response = YtHtmlDocument::from(html.to_string())
            .player_response()
            .expect("Failed to parse player response");
        let track = select_caption_track(&response, &["pt"]).unwrap();
        assert!(track.is_generated());
        assert_eq!(track.language_code, "pt");
    }

    #[test]
    fn test_manual_track_preferred_over_generated() {
        let response = player(tracklist(json!([
            { "baseUrl": "asr-url", "languageCode": "pt", "kind": "asr" },
            { "baseUrl": "manual-url", "languageCode": "pt" },
        ])));

        let track = select_caption_track(&response, &["pt"]).unwrap();
        assert_eq!(track.base_url, "manual-url");
    }

    #[test]
    fn test_language_order_is_respected() {
        let response = player(tracklist(json!([
            { "baseUrl": "en-url", "languageCode": "en" },
            { "baseUrl": "pt-url", "languageCode": "pt", "kind": "asr" },
        ])));

        let track = select_caption_track(&response, &["pt", "en"]).unwrap();
        assert_eq!(track.base_url, "pt-url");
    }

    #[test]
    fn test_missing_captions_is_disabled() {
        let response = player(Value::Null);
        assert_eq!(
            select_caption_track(&response, &["pt"]).unwrap_err(),
            TranscriptError::Disabled
        );

        let response = player(tracklist(json!([])));
        assert_eq!(
            select_caption_track(&response, &["pt"]).unwrap_err(),
            TranscriptError::Disabled
        );
    }

    #[test]
    fn test_unmatched_language_is_not_found() {
        let response = player(tracklist(json!([
            { "baseUrl": "en-url", "languageCode": "en" },
        ])));

        assert_eq!(
            select_caption_track(&response, &["pt"]).unwrap_err(),
            TranscriptError::NotFound
        );
    }

    #[test]
    fn test_unplayable_video_is_provider_error() {
        let response: PlayerResponse = serde_json::from_value(json!({
            "playabilityStatus": { "status": "ERROR", "reason": "Video unavailable" }
        }))
        .unwrap();

        assert_eq!(
            select_caption_track(&response, &["pt"]).unwrap_err(),
            TranscriptError::Provider("Video unavailable".into())
        );
    }

    #[test]
    fn test_parse_timed_text() {
        let payload = json!({
            "events": [
                { "tStartMs": 0, "dDurationMs": 120000, "id": 1, "wWinId": 1 },
                { "tStartMs": 1500, "dDurationMs": 2500, "segs": [{ "utf8": "Hoje vamos" }, { "utf8": " falar" }] },
                { "tStartMs": 4000, "segs": [{ "utf8": "\n" }] },
                { "tStartMs": 4000, "dDurationMs": 3000, "segs": [{ "utf8": "de João 3:16" }] },
            ]
        })
        .to_string();

        let segments = parse_timed_text(&payload).expect("Failed to parse timed text");
        assert_eq!(
            segments,
            vec![
                TranscriptSegment {
                    text: "Hoje vamos falar".into(),
                    start: 1.5,
                    duration: 2.5,
                },
                TranscriptSegment {
                    text: "de João 3:16".into(),
                    start: 4.0,
                    duration: 3.0,
                },
            ]
        );
    }

    #[test]
    fn test_parse_timed_text_without_events() {
        assert!(parse_timed_text("{}").unwrap().is_empty());
        assert!(matches!(parse_timed_text("not json"), Err(Error::Json(_))));
    }
}

use std::ops::Deref;

use reqwest::RequestBuilder;

use crate::{
    parser::{parse_timed_text, select_caption_track, YtHtmlDocument},
    types::{CaptionTrack, TranscriptSegment},
    yt::{TranscriptError, TranscriptProvider, VideoId},
};

/// Fetches caption tracks straight from YouTube watch pages
#[derive(Debug, Clone, Default)]
pub struct YtTranscriptClient(pub reqwest::Client);

impl Deref for YtTranscriptClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl YtTranscriptClient {
    const WATCH_URL: &str = "https://www.youtube.com/watch";
    const ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9";

    fn watch_page_request(&self, video_id: &VideoId) -> RequestBuilder {
        self.get(Self::WATCH_URL).query(&[("v", &**video_id)])
    }

    fn timed_text_request(&self, track: &CaptionTrack) -> RequestBuilder {
        self.get(&track.base_url).query(&[("fmt", "json3")])
    }

    async fn get_text(&self, request: RequestBuilder) -> Result<String, TranscriptError> {
        let resp = request
            .header("Accept-Language", Self::ACCEPT_LANGUAGE)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))
            .map_err(|e| TranscriptError::Provider(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            tracing::error!(status, url = %resp.url(), "YouTube responded with an error status");
            return Err(TranscriptError::Provider(format!(
                "YouTube respondeu com status {status}"
            )));
        }

        resp.text()
            .await
            .map_err(|e| TranscriptError::Provider(e.to_string()))
    }
}

impl TranscriptProvider for YtTranscriptClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: &[&str],
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let page = self
            .get_text(self.watch_page_request(video_id))
            .await
            .map(YtHtmlDocument::from)?;

        let player = page
            .player_response()
            .inspect_err(|e| tracing::error!(error = %e, "Failed to parse watch page"))
            .map_err(|e| TranscriptError::Provider(e.to_string()))?;

        let track = select_caption_track(&player, languages)?;
        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        let payload = self.get_text(self.timed_text_request(track)).await?;

        parse_timed_text(&payload)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to parse timed text"))
            .map_err(|e| TranscriptError::Provider(e.to_string()))
    }
}

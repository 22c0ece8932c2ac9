pub mod builder;

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use itertools::Itertools;

use crate::{
    cleaner::clean_text,
    error::PipelineError,
    llm::{prompter::AnalysisPrompter, LanguageModel},
    types::{AnalysisResult, TranscriptSegment},
    yt::{extract_video_id, TranscriptProvider},
};

// The sermon analysis pipeline: url -> transcript -> cleaned text -> model analysis
#[derive(Debug)]
pub struct SermonProcessor<T, M>
where
    T: TranscriptProvider + Send + Sync + 'static,
    M: LanguageModel + Send + Sync + 'static,
{
    transcripts: T,
    prompter: AnalysisPrompter<M>,
    languages: Vec<&'static str>,
    title: String,
}

impl<T, M> SermonProcessor<T, M>
where
    T: TranscriptProvider + Send + Sync + 'static,
    M: LanguageModel + Send + Sync + 'static,
{
    /// Runs the whole pipeline for `url`. Never fails: every stage failure,
    /// panics included, comes back as [`AnalysisResult::Failure`].
    #[tracing::instrument(skip(self))]
    pub async fn analyze(&self, url: &str) -> AnalysisResult {
        let outcome = AssertUnwindSafe(self.run(url)).catch_unwind().await;

        match outcome {
            Ok(Ok(analysis)) => AnalysisResult::Success {
                title: self.title.clone(),
                analysis,
            },
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Analysis request failed");
                e.into()
            }
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panic".into());
                tracing::error!(error = %message, "Unexpected failure while analyzing");
                PipelineError::Unexpected(message).into()
            }
        }
    }

    async fn run(&self, url: &str) -> Result<String, PipelineError> {
        let video_id = extract_video_id(url).ok_or(PipelineError::InvalidUrl)?;

        let segments = self
            .transcripts
            .fetch_transcript(&video_id, &self.languages)
            .await
            .inspect_err(|e| tracing::error!(error = %e, %video_id, "Failed to fetch transcript"))?;

        let transcript = concatenate_segments(&segments);
        if transcript.is_empty() {
            tracing::error!(%video_id, "Transcript is empty");
            return Err(PipelineError::EmptyTranscript);
        }

        let cleaned = clean_text(&transcript);
        tracing::info!(
            %video_id,
            segments = segments.len(),
            raw_len = transcript.len(),
            cleaned_len = cleaned.len(),
            "Cleaned transcript"
        );

        self.prompter
            .analyze(&cleaned)
            .await
            .ok_or(PipelineError::AnalysisFailed)
    }
}

/// Joins segment texts in order with a single space
pub fn concatenate_segments(segments: &[TranscriptSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).join(" ")
}

pub mod client;
pub mod video_id;

use std::future::Future;

use crate::types::TranscriptSegment;

pub use video_id::{extract_video_id, VideoId};

/// Classified failures of a transcript lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    #[error("transcripts are disabled for this video")]
    Disabled,
    #[error("no transcript found for the requested languages")]
    NotFound,
    #[error("{0}")]
    Provider(String),
}

/// Caption languages requested when the caller does not override them
pub const DEFAULT_LANGUAGES: &[&str] = &["pt"];

pub trait TranscriptProvider {
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: &[&str],
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, TranscriptError>> + Send;
}

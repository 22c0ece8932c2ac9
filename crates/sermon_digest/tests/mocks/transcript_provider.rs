use std::sync::{Arc, Mutex};
use sermon_digest::{
    yt::{TranscriptError, TranscriptProvider, VideoId},
    TranscriptSegment,
};

#[derive(Clone)]
pub struct MockTranscriptProvider {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    pub fail_with: Option<TranscriptError>,
    pub panic_with: Option<String>,
}

impl MockTranscriptProvider {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment {
                text: text.to_string(),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect();

        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            panic_with: None,
        }
    }

    pub fn failing(error: TranscriptError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::new(&[])
        }
    }

    pub fn panicking(msg: &str) -> Self {
        Self {
            panic_with: Some(msg.to_string()),
            ..Self::new(&[])
        }
    }
}

impl TranscriptProvider for MockTranscriptProvider {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: &[&str],
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push((
            video_id.to_string(),
            languages.iter().map(|l| l.to_string()).collect(),
        ));
        if let Some(ref msg) = self.panic_with {
            panic!("{}", msg);
        }
        if let Some(ref err) = self.fail_with {
            return Err(err.clone());
        }
        Ok(self.segments.clone())
    }
}

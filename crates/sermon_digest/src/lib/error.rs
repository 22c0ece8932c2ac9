/// Failures while pulling structured data out of YouTube pages and caption payloads
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The caller-facing failure taxonomy of a single analysis request.
///
/// The `Display` output of each variant is the exact message returned to the
/// caller in the `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("URL do YouTube inválida")]
    InvalidUrl,
    #[error("Este vídeo não possui transcrições habilitadas")]
    TranscriptsDisabled,
    #[error("Não foi encontrada transcrição para este vídeo")]
    NoTranscriptFound,
    #[error("Erro ao obter transcrição: {0}")]
    TranscriptProvider(String),
    #[error("A transcrição está vazia")]
    EmptyTranscript,
    #[error("Não foi possível analisar o conteúdo")]
    AnalysisFailed,
    #[error("Erro inesperado: {0}")]
    Unexpected(String),
}

impl From<crate::yt::TranscriptError> for PipelineError {
    fn from(value: crate::yt::TranscriptError) -> Self {
        use crate::yt::TranscriptError;

        match value {
            TranscriptError::Disabled => PipelineError::TranscriptsDisabled,
            TranscriptError::NotFound => PipelineError::NoTranscriptFound,
            TranscriptError::Provider(message) => PipelineError::TranscriptProvider(message),
        }
    }
}

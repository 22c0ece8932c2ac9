use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::{llm::LanguageModel, types::AnalysisResult, yt::TranscriptProvider, SermonProcessor};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

pub fn router<T, M>(processor: Arc<SermonProcessor<T, M>>) -> Router
where
    T: TranscriptProvider + Send + Sync + 'static,
    M: LanguageModel + Send + Sync + 'static,
{
    Router::new()
        .route("/analyze", post(analyze_video::<T, M>))
        .route("/health", get(|| async { "ok" }))
        .layer(CorsLayer::permissive())
        .with_state(processor)
}

/// Always answers 200; failures travel in the `{"error": ...}` body
pub async fn analyze_video<T, M>(
    State(processor): State<Arc<SermonProcessor<T, M>>>,
    Form(request): Form<AnalyzeRequest>,
) -> Json<AnalysisResult>
where
    T: TranscriptProvider + Send + Sync + 'static,
    M: LanguageModel + Send + Sync + 'static,
{
    tracing::info!(url = %request.url, "received analyze request");

    let result = processor.analyze(&request.url).await;
    if result.is_success() {
        tracing::info!(url = %request.url, "analyze request completed");
    }

    Json(result)
}

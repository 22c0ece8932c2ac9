use crate::llm::LanguageModel;

/// Builds the sermon analysis prompt and runs it through the configured model
#[derive(Debug)]
pub struct AnalysisPrompter<M> {
    model: Option<M>,
}

impl<M: LanguageModel> AnalysisPrompter<M> {
    const PROMPT_TEMPLATE: &str = include_str!("./prompts/sermon_0.txt");

    /// `None` means the model handle failed to initialize at startup
    pub fn new(model: Option<M>) -> Self {
        Self { model }
    }

    pub fn build_prompt(transcript: &str) -> String {
        Self::PROMPT_TEMPLATE.replace("{transcript}", transcript)
    }

    /// Returns the model's raw answer, or `None` if the model is unavailable
    /// or the call fails. Failures are logged, never surfaced in detail.
    #[tracing::instrument(skip_all, fields(transcript_len = transcript.len()))]
    pub async fn analyze(&self, transcript: &str) -> Option<String> {
        let Some(model) = self.model.as_ref() else {
            tracing::error!("Language model was not initialized");
            return None;
        };

        if !model.is_configured() {
            tracing::error!(model = model.model_name(), "Language model API key is not configured");
            return None;
        }

        tracing::info!(model = model.model_name(), "Sending prompt to language model");
        match model.generate_content(Self::build_prompt(transcript)).await {
            Ok(analysis) => {
                tracing::info!(response_len = analysis.len(), "Received language model response");
                Some(analysis)
            }
            Err(e) => {
                tracing::error!(error = %e, model = model.model_name(), "Language model call failed");
                None
            }
        }
    }
}

pub mod gemini;
pub mod prompter;

use std::{fmt::Display, future::Future};

/// A text-generation model behind some provider API
pub trait LanguageModel {
    type Error: Display;

    fn model_name(&self) -> &str;

    /// Whether the credentials the provider needs were supplied at startup
    fn is_configured(&self) -> bool {
        true
    }

    fn generate_content(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

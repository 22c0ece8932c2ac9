use std::sync::{Arc, Mutex};
use sermon_digest::LanguageModel;

#[derive(Clone)]
pub struct MockLanguageModel {
    pub response: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
    pub configured: bool,
}

impl MockLanguageModel {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            configured: true,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new("unused")
        }
    }
}

impl LanguageModel for MockLanguageModel {
    type Error = anyhow::Error;

    fn model_name(&self) -> &str {
        "mock-gemini"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate_content(&self, prompt: String) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(prompt);
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.response.clone())
    }
}

use crate::{
    llm::{prompter::AnalysisPrompter, LanguageModel},
    yt::{TranscriptProvider, DEFAULT_LANGUAGES},
    SermonProcessor,
};

pub struct SermonProcessorBuilder<T = (), M = ()> {
    transcripts: T,
    model: Option<M>,
    languages: Vec<&'static str>,
    title: String,
}

impl SermonProcessorBuilder {
    pub const DEFAULT_TITLE: &str = "Análise da Pregação";

    pub fn new() -> Self {
        Self {
            transcripts: (),
            model: None,
            languages: DEFAULT_LANGUAGES.to_vec(),
            title: Self::DEFAULT_TITLE.into(),
        }
    }
}

impl Default for SermonProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> SermonProcessorBuilder<T, M> {
    pub fn transcript_provider<T2: TranscriptProvider + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> SermonProcessorBuilder<T2, M> {
        SermonProcessorBuilder {
            transcripts,
            model: self.model,
            languages: self.languages,
            title: self.title,
        }
    }

    /// `None` records that the model handle could not be initialized; every
    /// analysis will then fail fast.
    pub fn language_model<M2: LanguageModel + Send + Sync + 'static>(
        self,
        model: Option<M2>,
    ) -> SermonProcessorBuilder<T, M2> {
        SermonProcessorBuilder {
            transcripts: self.transcripts,
            model,
            languages: self.languages,
            title: self.title,
        }
    }

    pub fn languages(mut self, languages: &[&'static str]) -> Self {
        self.languages = languages.to_vec();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl<T, M> SermonProcessorBuilder<T, M>
where
    T: TranscriptProvider + Send + Sync + 'static,
    M: LanguageModel + Send + Sync + 'static,
{
    pub fn build(self) -> SermonProcessor<T, M> {
        SermonProcessor {
            transcripts: self.transcripts,
            prompter: AnalysisPrompter::new(self.model),
            languages: self.languages,
            title: self.title,
        }
    }
}

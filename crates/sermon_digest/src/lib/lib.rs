pub mod cleaner;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod server;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::{Error, PipelineError};
pub use llm::{
    gemini::{self, GeminiClient, GeminiError},
    prompter::AnalysisPrompter,
    LanguageModel,
};
pub use processor::{builder::SermonProcessorBuilder, concatenate_segments, SermonProcessor};
pub use types::{AnalysisResult, TranscriptSegment};

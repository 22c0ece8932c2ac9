pub mod language_model;
pub mod transcript_provider;

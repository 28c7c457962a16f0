use std::fmt;

use crate::lang::Language;

/// Failure inside a generation backend.
///
/// Never reaches the controller: `WikiEngine` logs it and substitutes the
/// language's fallback paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateError {
    pub message: String,
    pub phase: &'static str,
}

impl GenerateError {
    pub fn new(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phase,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// Prompt in, text out. One call per entry, no retry.
pub trait Backend: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        (**self).generate(prompt)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        (**self).generate(prompt)
    }
}

/// Which entry to generate next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRequest {
    /// Welcome paragraph for the root of the history.
    Initial(Language),
    Topic { topic: String, language: Language },
}

impl EntryRequest {
    pub fn language(&self) -> Language {
        match self {
            EntryRequest::Initial(language) => *language,
            EntryRequest::Topic { language, .. } => *language,
        }
    }

    pub fn run<B: Backend>(&self, engine: &WikiEngine<B>) -> String {
        match self {
            EntryRequest::Initial(language) => engine.generate_initial_entry(*language),
            EntryRequest::Topic { topic, language } => {
                engine.generate_wiki_entry(topic, *language)
            }
        }
    }
}

/// The entry generator: Prompt → Backend → Text (or fallback text)
pub struct WikiEngine<B> {
    backend: B,
}

impl<B: Backend> WikiEngine<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Welcome paragraph in `language`. Always returns displayable text.
    pub fn generate_initial_entry(&self, language: Language) -> String {
        log::debug!("generating initial entry ({language})");
        match self.call(&language.initial_prompt()) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Error generating initial entry: {e}");
                language.initial_error_text()
            }
        }
    }

    /// Entry about `topic` in `language`. Always returns displayable text.
    pub fn generate_wiki_entry(&self, topic: &str, language: Language) -> String {
        log::debug!("generating entry for {topic:?} ({language})");
        match self.call(&language.topic_prompt(topic)) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Error generating entry for {topic:?}: {e}");
                language.topic_error_text(topic)
            }
        }
    }

    fn call(&self, prompt: &str) -> Result<String, GenerateError> {
        let text = self.backend.generate(prompt)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GenerateError::new("empty", "backend returned no text"));
        }
        Ok(text.to_string())
    }
}

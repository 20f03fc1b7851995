use std::sync::Arc;

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Normalize raw document text before tokenizing
    fn normalize(&self, text: &str) -> String;

    /// Break text into word tokens, in document order
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Whether a lower-cased token belongs in the report
    fn is_candidate(&self, word: &str) -> bool;

    /// Fallback stem derivation used when a direct lookup misses
    fn stemmer(&self) -> Arc<dyn Stemmer>;
}

/// Derives the single fallback form looked up after a dictionary miss
pub trait Stemmer: Send + Sync {
    /// `None` when the word has no fallback form
    fn fallback_stem(&self, word: &str) -> Option<String>;
}

/// Stemmer that never offers a fallback
pub struct NoStemmer;

impl Stemmer for NoStemmer {
    fn fallback_stem(&self, _word: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text as it appears in the document
    pub surface: String,
    /// Lower-cased surface
    pub normalized: String,
    /// Index in the token stream
    pub position: usize,
}

impl Token {
    pub fn new(surface: &str, position: usize) -> Self {
        Self {
            surface: surface.to_string(),
            normalized: surface.to_lowercase(),
            position,
        }
    }
}

/// Pronunciation and definition data for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub british_pronunciation: String,
    pub american_pronunciation: String,
    pub paraphrase: String,
}

/// Dictionary provider interface
#[async_trait::async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Look up a single word. Any error means "not found" to the caller.
    async fn lookup(&self, word: &str) -> Result<DictionaryEntry, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub online: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Http(u16),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Lookup timed out")]
    Timeout,
}

use serde::{Deserialize, Serialize};

fn default_min_word_len() -> usize {
    3
}

fn default_nfkc() -> bool {
    false
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TextConfig {
    /// Shortest word kept in the report, in characters
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Longest word kept in the report, unlimited when unset
    #[serde(default)]
    pub max_word_len: Option<usize>,
    /// Apply NFKC before tokenizing (folds full-width Latin letters)
    #[serde(default = "default_nfkc")]
    pub nfkc: bool,
}

impl TextConfig {
    pub fn accepts_len(&self, len: usize) -> bool {
        len >= self.min_word_len && self.max_word_len.is_none_or(|max| len <= max)
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_word_len: default_min_word_len(),
            max_word_len: None,
            nfkc: default_nfkc(),
        }
    }
}

use std::sync::Arc;

use wordsheet_config::text::TextConfig;
use wordsheet_core::language::{LanguageProcessor, Stemmer, Token};
use wordsheet_core::preprocess::{IdentityPreprocessor, NfkcPreprocessor, Preprocessor};

use crate::filter::is_candidate_word;
use crate::stemmer::SuffixStemmer;
use crate::tokenizer::split_words;

/// English language processor
pub struct EnglishProcessor {
    config: TextConfig,
    preprocessor: Box<dyn Preprocessor + Send + Sync>,
    stemmer: Arc<SuffixStemmer>,
}

impl EnglishProcessor {
    pub fn new(config: TextConfig) -> Self {
        let preprocessor: Box<dyn Preprocessor + Send + Sync> = if config.nfkc {
            Box::new(NfkcPreprocessor)
        } else {
            Box::new(IdentityPreprocessor)
        };

        Self {
            config,
            preprocessor,
            stemmer: Arc::new(SuffixStemmer::new()),
        }
    }
}

impl Default for EnglishProcessor {
    fn default() -> Self {
        Self::new(TextConfig::default())
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        self.preprocessor.process(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        split_words(text)
            .enumerate()
            .map(|(position, surface)| Token::new(surface, position))
            .collect()
    }

    fn is_candidate(&self, word: &str) -> bool {
        is_candidate_word(word, &self.config)
    }

    fn stemmer(&self) -> Arc<dyn Stemmer> {
        self.stemmer.clone()
    }
}

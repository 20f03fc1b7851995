use std::collections::BTreeSet;

use crate::frequency::FrequencyTable;
use crate::language::LanguageProcessor;

/// Candidate words of one document together with its token counts
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Distinct lower-cased candidates, ascending
    pub words: Vec<String>,
    /// Counts over the full lower-cased token stream
    pub frequencies: FrequencyTable,
}

impl Vocabulary {
    pub fn build(processor: &dyn LanguageProcessor, text: &str) -> Self {
        let normalized = processor.normalize(text);
        let tokens = processor.tokenize(&normalized);

        let frequencies = FrequencyTable::from_tokens(tokens.iter().map(|t| &t.normalized));

        let words: BTreeSet<&str> = tokens
            .iter()
            .map(|t| t.normalized.as_str())
            .filter(|w| processor.is_candidate(w))
            .collect();

        let words: Vec<String> = words.into_iter().map(str::to_string).collect();

        tracing::debug!(
            "Vocabulary: {} tokens, {} distinct, {} candidates",
            frequencies.total(),
            frequencies.distinct(),
            words.len()
        );

        Self { words, frequencies }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

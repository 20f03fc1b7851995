use wordsheet_core::language::Stemmer;

/// Endings that make a missed word eligible for a second lookup
pub const TRIGGER_SUFFIXES: [&str; 3] = ["s", "ed", "ing"];

/// Single-step suffix stripper for dictionary fallback lookups.
///
/// A word ending in `s`, `ed` or `ing` loses exactly one trailing `s`, `d`
/// or `ing`: `cats -> cat`, `jumping -> jump`, `baked -> bake`,
/// `walked -> walke`. Only the final `d` of `ed` is removed, which restores
/// the base of e-final verbs and costs a miss on the rest.
pub struct SuffixStemmer;

impl SuffixStemmer {
    pub fn new() -> Self {
        Self
    }

    /// The stripped ending and the stem, if the word qualifies
    pub fn strip(&self, word: &str) -> Option<(&'static str, String)> {
        if !TRIGGER_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
            return None;
        }

        let (removed, stem) = if let Some(stem) = word.strip_suffix("ing") {
            ("ing", stem)
        } else if let Some(stem) = word.strip_suffix('s') {
            ("s", stem)
        } else {
            // ends with "ed"
            ("d", word.strip_suffix('d')?)
        };

        if stem.is_empty() {
            return None;
        }

        Some((removed, stem.to_string()))
    }
}

impl Default for SuffixStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SuffixStemmer {
    fn fallback_stem(&self, word: &str) -> Option<String> {
        let (removed, stem) = self.strip(word)?;
        tracing::trace!("Stripped '{}' from '{}'", removed, word);
        Some(stem)
    }
}

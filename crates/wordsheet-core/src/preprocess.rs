use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    fn process(&self, text: &str) -> String;
}

/// Leaves document text untouched
pub struct IdentityPreprocessor;

impl Preprocessor for IdentityPreprocessor {
    fn process(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Unicode compatibility normalization (NFKC).
///
/// Folds full-width Latin (`Ｈｅｌｌｏ`) and ligatures (`ﬁ`) into plain ASCII
/// letters so the tokenizer sees them.
pub struct NfkcPreprocessor;

impl Preprocessor for NfkcPreprocessor {
    fn process(&self, text: &str) -> String {
        // BOM is not a letter, but drop it so it never glues onto a token
        text.trim_start_matches('\u{feff}').nfkc().collect()
    }
}

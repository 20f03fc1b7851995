use wordsheet_config::text::TextConfig;

/// Whether a lower-cased token is reported.
///
/// Rejects contractions and possessives (any apostrophe), digits and
/// anything outside the Basic Latin letters, plus words outside the
/// configured length bounds (by default: two letters or fewer).
pub fn is_candidate_word(word: &str, config: &TextConfig) -> bool {
    if word.contains('\'') {
        return false;
    }

    if word.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    config.accepts_len(word.chars().count())
}

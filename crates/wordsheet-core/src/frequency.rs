use std::collections::HashMap;

/// Occurrence counts of lower-cased tokens across one document
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of the stream, filtered or not
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Occurrences of `word`, 0 when it never appeared
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of tokens counted
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let table = FrequencyTable::from_tokens(["the", "cats", "ran", "the", "cat", "ran", "fast"]);

        assert_eq!(table.count("the"), 2);
        assert_eq!(table.count("ran"), 2);
        assert_eq!(table.count("cats"), 1);
        assert_eq!(table.count("cat"), 1);
        assert_eq!(table.count("fast"), 1);
        assert_eq!(table.count("dog"), 0);
        assert_eq!(table.total(), 7);
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn test_total_equals_sum_of_counts() {
        let table = FrequencyTable::from_tokens(["a", "to", "a", "be", "a"]);
        let sum: u64 = table.iter().map(|(_, c)| c as u64).sum();
        assert_eq!(sum, table.total());
        assert_eq!(table.count("a"), 3);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        assert_eq!(table.total(), 0);
        assert_eq!(table.distinct(), 0);
    }

    #[test]
    fn test_count_saturates() {
        let mut table = FrequencyTable::from_tokens(["loop"]);
        table.counts.insert("loop".to_string(), u32::MAX);

        table.add("loop");

        assert_eq!(table.count("loop"), u32::MAX);
        assert_eq!(table.total(), 2);
    }
}

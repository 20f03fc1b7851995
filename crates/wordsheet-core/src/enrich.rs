use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordsheet_config::dictionary::DictionaryConfig;

use crate::dictionary::{DictionaryEntry, DictionaryLookup, LookupError};
use crate::error::PipelineError;
use crate::language::Stemmer;

/// Fans dictionary lookups out over a document's candidate words.
///
/// Results come back aligned with the input order no matter which lookup
/// finishes first. Failed lookups become `None` and never affect siblings.
#[derive(Debug, Clone)]
pub struct EnrichmentScheduler {
    max_concurrent: usize,
    timeout: Duration,
    fallback: bool,
}

impl EnrichmentScheduler {
    pub fn new(max_concurrent: usize, timeout: Duration) -> Self {
        Self {
            max_concurrent: max_concurrent.clamp(1, Semaphore::MAX_PERMITS),
            timeout,
            fallback: true,
        }
    }

    /// Zero timeouts are raised to one second
    pub fn from_config(config: &DictionaryConfig) -> Self {
        if config.timeout_seconds == 0 {
            tracing::warn!("Lookup timeout of 0s would fail every lookup, using 1s");
        }

        Self::new(
            config.max_concurrent_lookups,
            Duration::from_secs(config.timeout_seconds.max(1)),
        )
        .with_fallback(config.fallback_stemming)
    }

    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Look up every word, reporting `(completed, total)` after each one.
    ///
    /// Returns only once every lookup has settled. On cancellation pending
    /// lookups are aborted and nothing is returned.
    pub async fn enrich<F>(
        &self,
        words: &[String],
        lookup: Arc<dyn DictionaryLookup>,
        stemmer: Arc<dyn Stemmer>,
        cancel: &CancellationToken,
        mut on_progress: F,
    ) -> Result<Vec<Option<DictionaryEntry>>, PipelineError>
    where
        F: FnMut(usize, usize),
    {
        let total = words.len();
        let mut slots: Vec<Option<DictionaryEntry>> = vec![None; total];

        if total == 0 {
            return Ok(slots);
        }

        let permits = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for (index, word) in words.iter().enumerate() {
            let word = word.clone();
            let lookup = Arc::clone(&lookup);
            let stemmer = Arc::clone(&stemmer);
            let permits = Arc::clone(&permits);
            let timeout = self.timeout;
            let fallback = self.fallback;

            tasks.spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return (index, None);
                };

                let stemmer = if fallback { Some(stemmer.as_ref()) } else { None };
                let entry = lookup_word(lookup.as_ref(), stemmer, &word, timeout).await;

                (index, entry)
            });
        }

        let mut completed = 0;
        loop {
            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    tracing::warn!("Enrichment cancelled with {} of {} lookups done", completed, total);
                    return Err(PipelineError::Cancelled);
                }
                joined = tasks.join_next() => joined,
            };

            match joined {
                Some(Ok((index, entry))) => slots[index] = entry,
                // The slot of a panicked task stays empty
                Some(Err(e)) => tracing::error!("Lookup task failed: {e}"),
                None => break,
            }

            completed += 1;
            on_progress(completed, total);
        }

        let found = slots.iter().filter(|s| s.is_some()).count();
        tracing::info!("Enriched {} of {} words", found, total);

        Ok(slots)
    }
}

/// Direct lookup, then at most one lookup of the fallback stem
pub async fn lookup_word(
    lookup: &dyn DictionaryLookup,
    stemmer: Option<&dyn Stemmer>,
    word: &str,
    timeout: Duration,
) -> Option<DictionaryEntry> {
    if let Some(entry) = try_lookup(lookup, word, timeout).await {
        return Some(entry);
    }

    let stem = stemmer?.fallback_stem(word)?;
    tracing::debug!("Retrying '{}' as '{}'", word, stem);

    try_lookup(lookup, &stem, timeout).await
}

async fn try_lookup(
    lookup: &dyn DictionaryLookup,
    word: &str,
    timeout: Duration,
) -> Option<DictionaryEntry> {
    let result = match tokio::time::timeout(timeout, lookup.lookup(word)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout),
    };

    match result {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::debug!("Lookup '{}' failed: {}", word, e);
            None
        }
    }
}

use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_url_template() -> String {
    "https://www.youdao.com/w/eng/{word}".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_max_concurrent_lookups() -> usize {
    16
}

fn default_user_agent() -> String {
    concat!("wordsheet/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_fallback_stemming() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Query the online dictionary, if false every row is left blank
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Lookup URL, `{word}` is replaced with the queried word
    #[serde(default = "default_url_template")]
    pub url_template: String,
    /// Upper bound for a single lookup request
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Retry misses on the suffix-stripped stem
    #[serde(default = "default_fallback_stemming")]
    pub fallback_stemming: bool,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let url_template = env::var("DICTIONARY_URL").unwrap_or(defaults.url_template);

        let timeout_seconds = env::var("LOOKUP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &u64| *n > 0)
            .unwrap_or(defaults.timeout_seconds);

        let max_concurrent_lookups = env::var("MAX_CONCURRENT_LOOKUPS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(defaults.max_concurrent_lookups);

        Self {
            url_template,
            timeout_seconds,
            max_concurrent_lookups,
            ..defaults
        }
    }

    pub fn url_for(&self, word: &str) -> String {
        self.url_template.replace("{word}", word)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url_template: default_url_template(),
            timeout_seconds: default_timeout_seconds(),
            max_concurrent_lookups: default_max_concurrent_lookups(),
            user_agent: default_user_agent(),
            fallback_stemming: default_fallback_stemming(),
        }
    }
}

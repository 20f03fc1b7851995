use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::report::ReportConfig;
use self::text::TextConfig;

pub mod dictionary;
pub mod report;
pub mod text;

fn default_event_buffer() -> usize {
    256
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub text: TextConfig,
    pub report: ReportConfig,

    /// Capacity of the pipeline -> front end event channel
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let event_buffer = env::var("EVENT_BUFFER")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or_else(default_event_buffer);

        Config {
            dictionary: DictionaryConfig::new(),
            text: TextConfig::default(),
            report: ReportConfig::default(),

            event_buffer,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            text: TextConfig::default(),
            report: ReportConfig::default(),
            event_buffer: default_event_buffer(),
        }
    }
}

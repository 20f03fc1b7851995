use std::path::PathBuf;

use clap::Parser;
use wordsheet_config::Config;

/// Build a vocabulary spreadsheet (pronunciations, definitions, counts)
/// for each input document, written next to it as `.xlsx`.
#[derive(Parser, Debug)]
#[command(name = "wordsheet", version)]
pub struct Cli {
    /// Input documents (.txt or .docx)
    pub files: Vec<PathBuf>,

    /// JSON config profile, defaults to ./config.json when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip dictionary lookups and leave pronunciation columns blank
    #[arg(long)]
    pub no_lookup: bool,

    /// Maximum lookups in flight per document
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-lookup timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Command-line flags win over the profile
    pub fn apply(&self, config: &mut Config) {
        if self.no_lookup {
            config.dictionary.enabled = false;
        }
        if let Some(concurrency) = self.concurrency {
            config.dictionary.max_concurrent_lookups = concurrency.max(1);
        }
        if let Some(timeout) = self.timeout {
            config.dictionary.timeout_seconds = timeout.max(1);
        }
    }
}

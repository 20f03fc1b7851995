use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Notifications sent from the pipeline to whatever front end drives it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    RunStarted {
        total_files: usize,
    },
    FileStarted {
        index: usize,
        path: PathBuf,
    },
    /// Dictionary lookups finished for the current document
    LookupProgress {
        index: usize,
        completed: usize,
        total: usize,
    },
    FileCompleted(FileReport),
    FileFailed {
        index: usize,
        path: PathBuf,
        reason: String,
    },
    RunFinished(RunSummary),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub index: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Rows written, header excluded
    pub words: usize,
    /// Rows written without a dictionary entry
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub completed: Vec<FileReport>,
    pub failed: Vec<FailedFile>,
    pub cancelled: bool,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.cancelled
    }

    pub fn attempted(&self) -> usize {
        self.completed.len() + self.failed.len()
    }
}

use std::path::PathBuf;

use wordsheet_types::{PipelineEvent, RunSummary};

/// Progress of the current run as seen by the front end
#[derive(Clone, Debug, Default)]
pub struct RunStatus {
    pub total_files: usize,
    pub files_done: usize,
    pub files_failed: usize,
    pub current_file: Option<PathBuf>,
    pub lookups_done: usize,
    pub lookups_total: usize,
    /// Set once the pipeline reports the run finished
    pub summary: Option<RunSummary>,
}

impl RunStatus {
    pub fn apply(&mut self, event: &PipelineEvent) {
        match event {
            PipelineEvent::RunStarted { total_files } => {
                *self = Self {
                    total_files: *total_files,
                    ..Self::default()
                };
            }
            PipelineEvent::FileStarted { path, .. } => {
                self.current_file = Some(path.clone());
                self.lookups_done = 0;
                self.lookups_total = 0;
            }
            PipelineEvent::LookupProgress {
                completed, total, ..
            } => {
                // Progress may arrive out of order after a dropped event
                self.lookups_done = self.lookups_done.max(*completed);
                self.lookups_total = *total;
            }
            PipelineEvent::FileCompleted(_) => {
                self.files_done += 1;
                self.current_file = None;
            }
            PipelineEvent::FileFailed { .. } => {
                self.files_failed += 1;
                self.current_file = None;
            }
            PipelineEvent::RunFinished(summary) => {
                self.current_file = None;
                self.summary = Some(summary.clone());
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.summary.is_some()
    }
}

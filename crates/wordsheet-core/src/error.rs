use std::path::PathBuf;

/// Failures of a pipeline invocation or of a single input file.
///
/// Everything except `NoInputSelected` is scoped to one file: the driver
/// records it and moves on to the next path.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Unsupported format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unreadable document {}: {reason}", path.display())]
    Document { path: PathBuf, reason: String },

    #[error("Failed to render report for {}: {reason}", path.display())]
    Report { path: PathBuf, reason: String },

    #[error("{outcomes} lookup results for {words} words")]
    Misaligned { words: usize, outcomes: usize },

    #[error("No input files selected")]
    NoInputSelected,

    #[error("Cancelled")]
    Cancelled,
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

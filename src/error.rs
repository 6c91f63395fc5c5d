use thiserror::Error;

/// Setup failures of a run. Per-file and per-line problems never surface here.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("no log files to process")]
    NoFiles,

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid line pattern: {0}")]
    LinePattern(#[from] regex::Error),

    #[error("worker {id} panicked")]
    WorkerPanicked { id: usize },
}

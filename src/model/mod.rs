//! Aggregation model: ranking tables, the byte counter, and the final report.

pub mod counter;
pub mod topn;

pub use counter::ByteCounter;
pub use topn::{RankEntry, TopNTable};

use serde::Serialize;
use std::ops::AddAssign;

/// Per-worker bookkeeping, summed by the coordinator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkerStats {
    pub files_read: usize,
    pub files_failed: usize,
    pub lines_read: u64,
    /// Lines that did not have the combined log shape.
    pub lines_skipped: u64,
}

impl AddAssign for WorkerStats {
    fn add_assign(&mut self, rhs: Self) {
        self.files_read += rhs.files_read;
        self.files_failed += rhs.files_failed;
        self.lines_read += rhs.lines_read;
        self.lines_skipped += rhs.lines_skipped;
    }
}

/// Result of one run, read after every worker has finished.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub top: usize,
    pub workers: usize,
    /// URLs ranked by summed transferred bytes.
    pub urls: Vec<RankEntry>,
    /// Referrers ranked by request count.
    pub referrers: Vec<RankEntry>,
    pub total_bytes: u64,
    pub stats: WorkerStats,
}

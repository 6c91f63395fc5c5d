use crate::log::LineParser;
use crate::model::{ByteCounter, TopNTable, WorkerStats};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Shared aggregation targets of one run.
#[derive(Debug)]
pub struct Globals {
    pub urls: TopNTable,
    pub referrers: TopNTable,
    pub bytes: ByteCounter,
}

impl Globals {
    pub fn new(capacity: usize) -> Self {
        Self {
            urls: TopNTable::new(capacity),
            referrers: TopNTable::new(capacity),
            bytes: ByteCounter::new(),
        }
    }
}

/// Processes one file assignment.
///
/// Rankings are accumulated into tables owned by the worker and merged into
/// the globals once, after the last file, so the globals never see a partial
/// contribution and per-line work takes no contended lock. Bytes go straight
/// to the shared counter.
pub struct Worker<'a> {
    id: usize,
    files: &'a [PathBuf],
    parser: LineParser,
    urls: TopNTable,
    referrers: TopNTable,
    stats: WorkerStats,
}

impl<'a> Worker<'a> {
    pub fn new(id: usize, files: &'a [PathBuf], parser: LineParser, capacity: usize) -> Self {
        Self {
            id,
            files,
            parser,
            urls: TopNTable::new(capacity),
            referrers: TopNTable::new(capacity),
            stats: WorkerStats::default(),
        }
    }

    pub fn run(mut self, globals: &Globals) -> WorkerStats {
        info!(worker = self.id, files = ?self.files, "worker started");

        for path in self.files {
            self.process_file(path, &globals.bytes);
        }

        debug!(
            worker = self.id,
            urls = self.urls.len(),
            referrers = self.referrers.len(),
            "merging local rankings"
        );
        globals.urls.merge(&self.urls);
        globals.referrers.merge(&self.referrers);

        info!(
            worker = self.id,
            files_read = self.stats.files_read,
            files_failed = self.stats.files_failed,
            lines = self.stats.lines_read,
            skipped = self.stats.lines_skipped,
            "worker finished"
        );
        self.stats
    }

    fn process_file(&mut self, path: &Path, bytes: &ByteCounter) {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(worker = self.id, path = %path.display(), error = %e, "cannot open log file");
                self.stats.files_failed += 1;
                return;
            }
        };
        debug!(worker = self.id, path = %path.display(), "file opened");

        let mut reader = BufReader::new(file);
        let mut buf = Vec::with_capacity(512);
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    self.process_line(&line, bytes);
                }
                Err(e) => {
                    warn!(worker = self.id, path = %path.display(), error = %e, "read failed, rest of file skipped");
                    break;
                }
            }
        }

        self.stats.files_read += 1;
        debug!(worker = self.id, path = %path.display(), "file closed");
    }

    fn process_line(&mut self, line: &str, bytes: &ByteCounter) {
        self.stats.lines_read += 1;

        let Some(fields) = self.parser.parse(line) else {
            self.stats.lines_skipped += 1;
            return;
        };

        match (fields.request, fields.bytes()) {
            (Some(_), Some(size)) => {
                if let Some(url) = fields.url() {
                    self.urls.add(url, size);
                }
                bytes.add(size);
            }
            (request, size) => {
                debug!(
                    worker = self.id,
                    url_parsed = request.is_some(),
                    size_parsed = size.is_some(),
                    "request or size missing"
                );
            }
        }

        if let Some(referrer) = fields.referrer() {
            self.referrers.add(referrer, 1);
        }
    }
}

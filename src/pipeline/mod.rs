//! Fan-out over worker threads, fan-in into shared rankings.

pub mod worker;

pub use worker::{Globals, Worker};

use crate::config::Settings;
use crate::error::RunError;
use crate::log::LineParser;
use crate::model::{Report, WorkerStats};

use std::path::PathBuf;
use std::thread;
use tracing::info;

/// Split `files` into `workers` contiguous slices. The remainder of an uneven
/// split goes entirely to the last slice.
///
/// `workers` must be in `1..=files.len()`.
pub fn partition(files: &[PathBuf], workers: usize) -> Vec<&[PathBuf]> {
    let per_worker = files.len() / workers;
    (0..workers)
        .map(|i| {
            let start = i * per_worker;
            let end = if i + 1 == workers {
                files.len()
            } else {
                start + per_worker
            };
            &files[start..end]
        })
        .collect()
}

/// Run every file through the worker pool and report the rankings.
///
/// Global state is read only after every worker thread has joined.
pub fn run(
    files: &[PathBuf],
    requested_workers: usize,
    settings: &Settings,
) -> Result<Report, RunError> {
    if files.is_empty() {
        return Err(RunError::NoFiles);
    }

    let workers = requested_workers.clamp(1, files.len());
    let assignments = partition(files, workers);
    let parser = LineParser::new()?;
    let capacity = settings.capacity();
    let globals = Globals::new(capacity);

    info!(
        files = files.len(),
        workers,
        capacity = globals.urls.capacity(),
        "starting run"
    );

    let results: Vec<thread::Result<WorkerStats>> = thread::scope(|s| {
        let handles: Vec<_> = assignments
            .into_iter()
            .enumerate()
            .map(|(id, files)| {
                let worker = Worker::new(id, files, parser.clone(), capacity);
                let globals = &globals;
                s.spawn(move || worker.run(globals))
            })
            .collect();

        handles.into_iter().map(|h| h.join()).collect()
    });

    let mut stats = WorkerStats::default();
    for (id, result) in results.into_iter().enumerate() {
        stats += result.map_err(|_| RunError::WorkerPanicked { id })?;
    }

    info!(
        files_read = stats.files_read,
        files_failed = stats.files_failed,
        lines = stats.lines_read,
        skipped = stats.lines_skipped,
        "run finished"
    );

    Ok(Report {
        top: settings.top,
        workers,
        urls: globals.urls.top_k(settings.top),
        referrers: globals.referrers.top_k(settings.top),
        total_bytes: globals.bytes.value(),
        stats,
    })
}

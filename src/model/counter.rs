use std::sync::atomic::{AtomicU64, Ordering};

/// Running total of transferred bytes, shared by all workers of one run.
#[derive(Debug, Default)]
pub struct ByteCounter {
    total: AtomicU64,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, n: u64) {
        self.total.fetch_add(n, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

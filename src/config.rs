//! Run settings and their defaults.

use anyhow::bail;

/// Entries shown per ranking.
pub const DEFAULT_TOP: usize = 10;

/// Table capacity is `top * CAPACITY_FACTOR`. Keeping far more entries than are
/// shown stops per-worker tables from dropping keys that rank globally.
pub const CAPACITY_FACTOR: usize = 100;

pub const DEFAULT_WORKERS: usize = 7;
pub const DEFAULT_PATTERN: &str = "*.log.*";
pub const DEFAULT_LOG_DIR: &str = "/var/log/nginx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub top: usize,
    pub capacity_factor: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            capacity_factor: CAPACITY_FACTOR,
        }
    }
}

impl Settings {
    pub fn new(top: usize, capacity_factor: usize) -> crate::Result<Self> {
        let settings = Self {
            top,
            capacity_factor,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.top == 0 {
            bail!("top must be at least 1");
        }
        if self.capacity_factor == 0 {
            bail!("capacity factor must be at least 1");
        }
        Ok(())
    }

    /// Capacity of every ranking table, local and global.
    pub fn capacity(&self) -> usize {
        self.top.saturating_mul(self.capacity_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_inflated_over_top() {
        let settings = Settings::default();
        assert_eq!(settings.top, 10);
        assert_eq!(settings.capacity(), 1000);
        assert_eq!(Settings::new(3, CAPACITY_FACTOR).unwrap().capacity(), 300);
        assert_eq!(Settings::new(3, 2).unwrap().capacity(), 6);
    }

    #[test]
    fn rejects_zero_top() {
        assert!(Settings::new(0, CAPACITY_FACTOR).is_err());
    }

    #[test]
    fn rejects_zero_capacity_factor() {
        assert!(Settings::new(10, 0).is_err());
    }
}

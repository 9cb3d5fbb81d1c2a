//! Report types for reconciliation passes

use serde::{Deserialize, Serialize};

/// Options for a reconciliation pass
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Remove `.strm` files under the root that are no longer desired.
    pub cleanup: bool,
    /// If true, simulate changes without modifying the filesystem.
    /// Actions are logged with a "[dry-run]" prefix.
    pub dry_run: bool,
}

/// Counters for one reconciliation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStats {
    /// Files that did not exist and were written
    pub created: usize,
    /// Files whose content differed and were rewritten
    pub updated: usize,
    /// Files whose content already matched; no write occurred
    pub skipped: usize,
    /// Stale `.strm` files deleted during cleanup
    pub removed: usize,
}

impl SyncStats {
    /// True when the pass changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed == 0
    }
}

/// Report from one reconciliation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Counters for the pass
    pub stats: SyncStats,
    /// Per-entry write failures; the pass continues past them
    pub errors: Vec<String>,
}

impl SyncReport {
    /// True when every desired entry converged.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_report_is_successful_and_noop() {
        let report = SyncReport::default();
        assert!(report.success());
        assert!(report.stats.is_noop());
    }

    #[test]
    fn skipped_entries_still_count_as_noop() {
        let stats = SyncStats {
            skipped: 10,
            ..Default::default()
        };
        assert!(stats.is_noop());
    }

    #[test]
    fn any_mutation_clears_noop() {
        for stats in [
            SyncStats {
                created: 1,
                ..Default::default()
            },
            SyncStats {
                updated: 1,
                ..Default::default()
            },
            SyncStats {
                removed: 1,
                ..Default::default()
            },
        ] {
            assert!(!stats.is_noop());
        }
    }
}

//! SyncEngine implementation
//!
//! The SyncEngine converges the filesystem under the output root to the
//! desired mapping: identical files are left untouched, differing or
//! missing files are written, and with cleanup enabled any `.strm` file
//! that is no longer desired is removed.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{debug, error, info, warn};

use strm_fs::{NormalizedPath, io};

use super::report::{SyncOptions, SyncReport, SyncStats};

/// Engine for converging pointer files under an output root
pub struct SyncEngine {
    /// Absolute output root; the engine never touches anything outside it
    root: NormalizedPath,
}

impl SyncEngine {
    /// Create an engine for the given output root.
    ///
    /// The root is expected to exist; establishing it is the caller's
    /// startup responsibility (and the only fatal filesystem error in
    /// the system).
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    /// The output root this engine converges.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Converge the filesystem to the desired mapping.
    ///
    /// Entries are processed in sorted path order so repeated runs are
    /// reproducible and their logs diffable. Identical content is never
    /// rewritten, preserving modification times and making the operation
    /// idempotent: a second run with the same mapping reports zero
    /// creates, updates and removals. A failure on one entry is recorded
    /// and never blocks the rest.
    pub fn reconcile(
        &self,
        desired: &BTreeMap<String, String>,
        options: &SyncOptions,
    ) -> SyncReport {
        let mut report = SyncReport::default();
        let mut desired_paths: HashSet<NormalizedPath> = HashSet::with_capacity(desired.len());

        info!(entries = desired.len(), root = %self.root, "reconciling pointer files");

        for (rel_path, content) in desired {
            let abs_path = self.root.join(rel_path);
            desired_paths.insert(abs_path.clone());

            let existing = io::read_text_or_absent(&abs_path);
            if existing.as_deref() == Some(content.as_str()) {
                debug!(path = %abs_path, "content matches, skipping");
                report.stats.skipped += 1;
                continue;
            }

            let exists = existing.is_some();
            if options.dry_run {
                info!(
                    path = %abs_path,
                    "[dry-run] would {} pointer file",
                    if exists { "update" } else { "create" }
                );
            } else if let Err(e) = io::write_text(&abs_path, content) {
                error!(path = %abs_path, error = %e, "failed to write pointer file");
                report.errors.push(format!("{abs_path}: {e}"));
                continue;
            } else {
                info!(
                    path = %abs_path,
                    "{} pointer file",
                    if exists { "updated" } else { "created" }
                );
            }

            if exists {
                report.stats.updated += 1;
            } else {
                report.stats.created += 1;
            }
        }

        if options.cleanup {
            self.remove_stale(&desired_paths, options.dry_run, &mut report.stats);
        }

        info!(
            created = report.stats.created,
            updated = report.stats.updated,
            skipped = report.stats.skipped,
            removed = report.stats.removed,
            "reconciliation complete"
        );
        report
    }

    /// Delete `.strm` files under the root that are not in the desired
    /// set.
    ///
    /// Only regular files with a `.strm` extension (case-insensitive) are
    /// candidates; directories and other files are never touched, and
    /// directories emptied by a deletion are left in place. A failed
    /// deletion is logged and skipped.
    fn remove_stale(
        &self,
        desired: &HashSet<NormalizedPath>,
        dry_run: bool,
        stats: &mut SyncStats,
    ) {
        debug!(root = %self.root, "scanning for stale pointer files");
        walk_strm_files(&self.root.to_native(), &mut |path| {
            if desired.contains(&path) {
                return;
            }
            if dry_run {
                info!(path = %path, "[dry-run] would remove stale pointer file");
                stats.removed += 1;
                return;
            }
            match fs::remove_file(path.to_native()) {
                Ok(()) => {
                    info!(path = %path, "removed stale pointer file");
                    stats.removed += 1;
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "failed to remove stale pointer file");
                }
            }
        });
    }
}

/// Recursively visit every regular `.strm` file under `dir`.
///
/// Unreadable directories are logged and skipped so one bad subtree never
/// aborts the walk.
fn walk_strm_files(dir: &Path, visit: &mut impl FnMut(NormalizedPath)) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot read directory during cleanup");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            walk_strm_files(&path, visit);
        } else if file_type.is_file() && has_strm_extension(&path) {
            visit(NormalizedPath::new(&path));
        }
    }
}

/// `.strm` extension check, case-insensitive.
fn has_strm_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("strm"))
}

//! Desired entry construction from the remote listing
//!
//! Transforms listing records into the desired mapping of relative
//! `.strm` paths to pointer content. Records are classified explicitly:
//! each one either contributes entries or lands in the report's skip list
//! with a typed reason, so callers can log or assert on the outcome.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use strm_fs::{NamingMode, sanitize_name, sanitize_rel_path};

use crate::category::category_folder;
use crate::record::{FileStat, TorrentRecord};

/// Why a listing element (or one of its files) contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The listing element was not a JSON object.
    NotAnObject,
    /// The record carried no non-empty identifying hash.
    MissingHash,
    /// A `file_stats` element was not a JSON object.
    FileNotAnObject { file_index: usize },
    /// A `file_stats` element had no identifier at all.
    MissingFileId { file_index: usize },
}

/// A skipped listing element, addressed by its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub record_index: usize,
    pub reason: SkipReason,
}

/// Outcome of one entry-building run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Desired relative path (forward-slash joined) to pointer content,
    /// iterated in sorted order.
    pub entries: BTreeMap<String, String>,
    /// Listing elements that contributed nothing, with typed reasons.
    pub skipped: Vec<SkippedRecord>,
}

/// Build the desired mapping of relative `.strm` paths to pointer content.
///
/// Records are processed in input order and colliding relative paths
/// resolve last-write-wins. A malformed record or file is recorded in the
/// skip list and never aborts the run.
pub fn build_entries(records: &[Value], mode: NamingMode) -> BuildReport {
    let mut report = BuildReport::default();
    info!(records = records.len(), "building desired entries");

    for (index, value) in records.iter().enumerate() {
        let Some(record) = TorrentRecord::from_value(value) else {
            warn!(record = index, "skipping listing element: not an object");
            report.skip(index, SkipReason::NotAnObject);
            continue;
        };
        let Some(hash) = record.hash() else {
            warn!(record = index, "skipping record: no hash");
            report.skip(index, SkipReason::MissingHash);
            continue;
        };

        let category = category_folder(record.category(), mode);
        let title = record.title().unwrap_or(hash);
        let item_folder = sanitize_name(title, hash, mode);
        debug!(record = index, %category, %item_folder, "derived folders");

        match record.file_stats() {
            Some(files) => {
                for (file_index, file_value) in files.iter().enumerate() {
                    let Some(file) = FileStat::from_value(file_value) else {
                        warn!(
                            record = index,
                            file = file_index,
                            "skipping file: not an object"
                        );
                        report.skip(index, SkipReason::FileNotAnObject { file_index });
                        continue;
                    };
                    let Some(file_id) = file.id() else {
                        warn!(record = index, file = file_index, "skipping file: no id");
                        report.skip(index, SkipReason::MissingFileId { file_index });
                        continue;
                    };

                    let raw_path = file
                        .path()
                        .map(str::to_string)
                        .unwrap_or_else(|| file_id.clone());
                    let stem_path = sanitize_rel_path(&raw_path, mode);
                    let stem = strip_extension(&stem_path);
                    let rel_path = format!("{category}/{item_folder}/{stem}.strm");
                    debug!(record = index, file = %file_id, %rel_path, "desired entry");
                    report
                        .entries
                        .insert(rel_path, format!("play/{hash}/{file_id}"));
                }
            }
            None => {
                // Single streamable unit: the file name reuses the
                // sanitized title, and the file id is always 1.
                let rel_path = format!("{category}/{item_folder}/{item_folder}.strm");
                debug!(record = index, %rel_path, "desired entry (no file list)");
                report.entries.insert(rel_path, format!("play/{hash}/1"));
            }
        }
    }

    info!(
        entries = report.entries.len(),
        skipped = report.skipped.len(),
        "desired entries built"
    );
    report
}

impl BuildReport {
    fn skip(&mut self, record_index: usize, reason: SkipReason) {
        self.skipped.push(SkippedRecord {
            record_index,
            reason,
        });
    }
}

/// Strip the final extension from the last segment of a `/`-joined path.
///
/// Leading-dot names (`.hidden`) keep their dot, matching the usual
/// splitext behavior.
fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |idx| idx + 1);
    match path[name_start..].rfind('.') {
        Some(idx) if idx > 0 => &path[..name_start + idx],
        _ => path,
    }
}

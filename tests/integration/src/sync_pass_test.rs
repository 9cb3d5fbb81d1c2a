//! End-to-end reconciliation pass tests
//!
//! Exercises the complete core flow a polling pass performs: listing JSON
//! -> desired entries -> filesystem convergence, including repeat passes
//! and cleanup of items that disappeared from the listing.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

use strm_core::{SyncEngine, SyncOptions, build_entries};
use strm_fs::{NamingMode, NormalizedPath};

/// A listing as TorrServer would return it: one multi-file TV torrent,
/// one single-unit music torrent, and one broken record.
fn sample_listing() -> Vec<Value> {
    vec![
        json!({
            "hash": "abc123",
            "title": "My Show",
            "category": "tv",
            "file_stats": [
                { "id": 1, "path": "Season 1/S01E01.mkv" },
                { "id": 2, "path": "Season 1/S01E02.mkv" },
            ],
        }),
        json!({
            "hash": "xyz",
            "title": "Song",
            "category": "music",
        }),
        json!({ "title": "no hash here" }),
    ]
}

/// Collect every file under `root`, relative, forward-slashed, sorted.
fn tree(root: &Path) -> BTreeSet<String> {
    fn visit(dir: &Path, root: &Path, out: &mut BTreeSet<String>) {
        for entry in fs::read_dir(dir).unwrap().flatten() {
            let path = entry.path();
            if path.is_dir() {
                visit(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                out.insert(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    let mut out = BTreeSet::new();
    visit(root, root, &mut out);
    out
}

#[test]
fn full_pass_converges_and_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let engine = SyncEngine::new(NormalizedPath::new(temp.path()));
    let options = SyncOptions {
        cleanup: true,
        dry_run: false,
    };

    let listing = sample_listing();
    let build = build_entries(&listing, NamingMode::Ascii);

    // The hash-less record is skipped, the rest contribute.
    assert_eq!(build.skipped.len(), 1);
    assert_eq!(build.entries.len(), 3);

    let first = engine.reconcile(&build.entries, &options);
    assert!(first.success());
    assert_eq!(first.stats.created, 3);

    assert_eq!(
        tree(temp.path()),
        BTreeSet::from([
            "TV/My Show/Season 1/S01E01.strm".to_string(),
            "TV/My Show/Season 1/S01E02.strm".to_string(),
            "Music/Song/Song.strm".to_string(),
        ])
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("TV/My Show/Season 1/S01E01.strm")).unwrap(),
        "play/abc123/1"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("Music/Song/Song.strm")).unwrap(),
        "play/xyz/1"
    );

    // A second pass over the same listing must not touch anything.
    let second = engine.reconcile(&build.entries, &options);
    assert!(second.stats.is_noop());
    assert_eq!(second.stats.skipped, 3);
    assert_eq!(tree(temp.path()).len(), 3);
}

#[test]
fn localized_folders_in_unicode_mode() {
    let temp = TempDir::new().unwrap();
    let engine = SyncEngine::new(NormalizedPath::new(temp.path()));

    let build = build_entries(&sample_listing(), NamingMode::Unicode);
    engine.reconcile(&build.entries, &SyncOptions::default());

    assert!(
        temp.path()
            .join("Сериалы/My Show/Season 1/S01E01.strm")
            .is_file()
    );
    assert!(temp.path().join("Музыка/Song/Song.strm").is_file());
}

#[test]
fn items_dropped_from_the_listing_are_cleaned_up() {
    let temp = TempDir::new().unwrap();
    let engine = SyncEngine::new(NormalizedPath::new(temp.path()));
    let options = SyncOptions {
        cleanup: true,
        dry_run: false,
    };

    let build = build_entries(&sample_listing(), NamingMode::Ascii);
    engine.reconcile(&build.entries, &options);

    // A side-car file the media player wrote must survive cleanup.
    fs::write(temp.path().join("Music/Song/cover.jpg"), b"jpeg").unwrap();

    // The music torrent disappears from the next listing.
    let shrunk: Vec<Value> = sample_listing().into_iter().take(1).collect();
    let build = build_entries(&shrunk, NamingMode::Ascii);
    let report = engine.reconcile(&build.entries, &options);

    assert_eq!(report.stats.removed, 1);
    assert_eq!(report.stats.skipped, 2);
    assert!(!temp.path().join("Music/Song/Song.strm").exists());
    assert!(temp.path().join("Music/Song/cover.jpg").is_file());
    assert!(temp.path().join("TV/My Show/Season 1/S01E01.strm").is_file());
}

#[test]
fn content_changes_update_in_place() {
    let temp = TempDir::new().unwrap();
    let engine = SyncEngine::new(NormalizedPath::new(temp.path()));

    let listing = vec![json!({
        "hash": "oldhash",
        "title": "Film",
        "category": "movie",
    })];
    let build = build_entries(&listing, NamingMode::Ascii);
    engine.reconcile(&build.entries, &SyncOptions::default());

    // Same title re-added under a new hash: same path, new content.
    let listing = vec![json!({
        "hash": "newhash",
        "title": "Film",
        "category": "movie",
    })];
    let build = build_entries(&listing, NamingMode::Ascii);
    let report = engine.reconcile(&build.entries, &SyncOptions::default());

    assert_eq!(report.stats.updated, 1);
    assert_eq!(report.stats.created, 0);
    assert_eq!(
        fs::read_to_string(temp.path().join("Movies/Film/Film.strm")).unwrap(),
        "play/newhash/1"
    );
}

#[test]
fn empty_listing_with_cleanup_empties_the_tree() {
    let temp = TempDir::new().unwrap();
    let engine = SyncEngine::new(NormalizedPath::new(temp.path()));
    let options = SyncOptions {
        cleanup: true,
        dry_run: false,
    };

    let build = build_entries(&sample_listing(), NamingMode::Ascii);
    engine.reconcile(&build.entries, &options);

    let build = build_entries(&[], NamingMode::Ascii);
    let report = engine.reconcile(&build.entries, &options);

    assert_eq!(report.stats.removed, 3);
    assert!(tree(temp.path()).is_empty());
}

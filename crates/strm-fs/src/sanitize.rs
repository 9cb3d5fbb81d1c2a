//! Name sanitization for remote-supplied titles and paths
//!
//! Remote titles and file paths are arbitrary text; these functions map
//! them onto path segments that are safe on every filesystem this tool
//! targets.

use crate::naming::NamingMode;

/// Characters that are invalid in file names on at least one supported
/// filesystem.
const RESERVED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitize a single path segment.
///
/// Reserved characters become `_`, whitespace runs collapse to one space,
/// and leading/trailing spaces and dots are trimmed. In ASCII mode every
/// run of non-ASCII characters is folded to a single `_`. An input that
/// sanitizes to nothing yields `fallback` instead.
///
/// The result never contains a reserved character, never starts or ends
/// with a space or dot, and is never empty.
pub fn sanitize_name(raw: &str, fallback: &str, mode: NamingMode) -> String {
    if raw.is_empty() {
        return fallback.to_string();
    }

    let replaced: String = raw
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect();
    let collapsed = collapse_whitespace(&replaced);
    let mut trimmed = collapsed.trim_matches(['.', ' ']).to_string();

    if mode.is_ascii() {
        trimmed = fold_non_ascii(&trimmed);
    }

    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed
    }
}

/// Sanitize a multi-segment path.
///
/// Splits on any run of `/` or `\`, sanitizes each non-blank segment with
/// fallback `"item"`, and rejoins with `/` (the [`NormalizedPath`]
/// convention). An input with no non-blank segments degrades to
/// `sanitize_name(raw, "item", mode)`.
///
/// [`NormalizedPath`]: crate::path::NormalizedPath
pub fn sanitize_rel_path(raw: &str, mode: NamingMode) -> String {
    let segments: Vec<&str> = raw
        .split(['/', '\\'])
        .filter(|segment| !segment.trim().is_empty())
        .collect();

    if segments.is_empty() {
        return sanitize_name(raw, "item", mode);
    }

    segments
        .iter()
        .map(|segment| sanitize_name(segment, "item", mode))
        .collect::<Vec<_>>()
        .join("/")
}

/// Collapse every whitespace run to a single space and trim the ends.
fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;
    for c in value.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }
    out
}

/// Fold each run of non-ASCII characters to a single `_`, squeeze repeated
/// `_`, and re-trim the edges so folding cannot reintroduce a leading or
/// trailing dot or space.
fn fold_non_ascii(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        let mapped = if c.is_ascii() { c } else { '_' };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches(['_', '.', ' ']).to_string()
}
